//! Elastic Beanstalk client construction and the SDK-backed API seam.
//!
//! Tools never touch the SDK directly. They ask a [`ClientFactory`] for a
//! [`BeanstalkApi`] in a region and hand it sparse params; everything the
//! SDK can fail with comes back as a [`ClientError`].

use super::conversion::{
    application_to_json, config_settings_to_json, environment_to_json, event_to_json,
};
use super::params::{
    DescribeApplicationsParams, DescribeConfigSettingsParams, DescribeEnvironmentsParams,
    DescribeEventsParams, Page,
};
use super::region::region_from_env;
use crate::prelude::*;
use aws_config::BehaviorVersion;
use aws_sdk_elasticbeanstalk::error::{ProvideErrorMetadata, SdkError};
use aws_sdk_elasticbeanstalk::primitives::DateTime;
use aws_sdk_elasticbeanstalk::types::EventSeverity;
use aws_sdk_elasticbeanstalk::Client;
use aws_types::app_name::AppName;
use aws_types::region::Region;
use std::error::Error as StdError;
use std::sync::Arc;

/// App name reported in the SDK user agent.
pub const USER_AGENT_APP_NAME: &str = "awslabs-elasticbeanstalk-mcp-server";

// ============================================================================
// Seams
// ============================================================================

/// The Elastic Beanstalk calls the tools need.
///
/// Implemented by [`SdkBeanstalkClient`] in production and by recording
/// mocks in tests.
#[async_trait::async_trait]
pub trait BeanstalkApi: Send + Sync {
    async fn describe_environments(
        &self,
        params: DescribeEnvironmentsParams,
    ) -> Result<Page, ClientError>;

    async fn describe_applications(
        &self,
        params: DescribeApplicationsParams,
    ) -> Result<Page, ClientError>;

    async fn describe_events(&self, params: DescribeEventsParams) -> Result<Page, ClientError>;

    async fn describe_configuration_settings(
        &self,
        params: DescribeConfigSettingsParams,
    ) -> Result<Page, ClientError>;
}

/// Produces a client bound to a region.
#[async_trait::async_trait]
pub trait ClientFactory: Send + Sync {
    async fn client(&self, region: &str) -> Result<Arc<dyn BeanstalkApi>, ClientError>;
}

/// Resolve the region for a call and obtain a client for it.
pub async fn connect(
    factory: &dyn ClientFactory,
    region_name: Option<&str>,
) -> Result<Arc<dyn BeanstalkApi>, ClientError> {
    let region = region_from_env(region_name);
    tracing::debug!(region = %region, "creating Elastic Beanstalk client");
    factory.client(&region).await
}

// ============================================================================
// SDK-backed factory
// ============================================================================

/// Builds SDK clients from the default AWS credential provider chain.
///
/// Credentials are looked up in order:
/// 1. Environment variables (AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY)
/// 2. Shared credentials and config files (~/.aws/credentials, ~/.aws/config)
/// 3. Web identity token / SSO
/// 4. ECS task role, EKS pod identity, or EC2 instance profile
///
/// A fresh client is built for every call; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct SdkClientFactory {
    profile: Option<String>,
    verify_credentials: bool,
}

/// Builder for [`SdkClientFactory`].
#[derive(Debug, Default)]
pub struct SdkClientFactoryBuilder {
    profile: Option<String>,
    verify_credentials: Option<bool>,
}

impl SdkClientFactoryBuilder {
    /// Use a named profile from ~/.aws/config instead of the default chain.
    pub fn profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Probe credentials with `DescribeApplications` when a client is built
    /// (default: true).
    pub fn verify_credentials(mut self, verify: bool) -> Self {
        self.verify_credentials = Some(verify);
        self
    }

    pub fn build(self) -> SdkClientFactory {
        SdkClientFactory {
            profile: self.profile.filter(|p| !p.is_empty()),
            verify_credentials: self.verify_credentials.unwrap_or(true),
        }
    }
}

impl SdkClientFactory {
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> SdkClientFactoryBuilder {
        SdkClientFactoryBuilder::default()
    }

    pub fn profile(&self) -> Option<&str> {
        self.profile.as_deref()
    }

    pub fn verifies_credentials(&self) -> bool {
        self.verify_credentials
    }

    async fn build_client(&self, region: &str) -> Result<SdkBeanstalkClient, ClientError> {
        let app_name = AppName::new(USER_AGENT_APP_NAME)
            .map_err(|e| ClientError::internal(format!("Invalid user agent app name: {}", e)))?;

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .app_name(app_name);

        if let Some(profile) = &self.profile {
            loader = loader.profile_name(profile);
        }

        // Missing credentials surface on the first request, not here
        let config = loader.load().await;
        let client = SdkBeanstalkClient::new(Client::new(&config));

        if self.verify_credentials {
            client.verify().await?;
        }

        Ok(client)
    }
}

impl Default for SdkClientFactory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ClientFactory for SdkClientFactory {
    async fn client(&self, region: &str) -> Result<Arc<dyn BeanstalkApi>, ClientError> {
        match self.build_client(region).await {
            Ok(client) => Ok(Arc::new(client)),
            Err(err) => {
                tracing::error!(
                    region = %region,
                    kind = %err.kind(),
                    "Error creating Elastic Beanstalk client: {}",
                    err
                );
                Err(err)
            }
        }
    }
}

// ============================================================================
// SDK-backed client
// ============================================================================

/// Production implementation wrapping the AWS SDK client
pub struct SdkBeanstalkClient {
    client: Client,
}

impl SdkBeanstalkClient {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Make one cheap call to prove the credentials work.
    async fn verify(&self) -> Result<(), ClientError> {
        self.client
            .describe_applications()
            .send()
            .await
            .map(|_| ())
            .map_err(classify_sdk_error)
    }
}

#[async_trait::async_trait]
impl BeanstalkApi for SdkBeanstalkClient {
    async fn describe_environments(
        &self,
        params: DescribeEnvironmentsParams,
    ) -> Result<Page, ClientError> {
        let output = self
            .client
            .describe_environments()
            .set_application_name(params.application_name)
            .set_environment_names(params.environment_names)
            .set_environment_ids(params.environment_ids)
            .set_include_deleted(params.include_deleted)
            .send()
            .await
            .map_err(classify_sdk_error)?;

        let items = output
            .environments()
            .iter()
            .map(environment_to_json)
            .collect();
        Ok(Page::new(items).with_next_token(output.next_token().map(str::to_string)))
    }

    async fn describe_applications(
        &self,
        params: DescribeApplicationsParams,
    ) -> Result<Page, ClientError> {
        let output = self
            .client
            .describe_applications()
            .set_application_names(params.application_names)
            .send()
            .await
            .map_err(classify_sdk_error)?;

        let items = output
            .applications()
            .iter()
            .map(application_to_json)
            .collect();
        Ok(Page::new(items))
    }

    async fn describe_events(&self, params: DescribeEventsParams) -> Result<Page, ClientError> {
        let output = self
            .client
            .describe_events()
            .set_application_name(params.application_name)
            .set_environment_name(params.environment_name)
            .set_environment_id(params.environment_id)
            .set_start_time(
                params
                    .start_time
                    .map(|t| DateTime::from_millis(t.timestamp_millis())),
            )
            .set_end_time(
                params
                    .end_time
                    .map(|t| DateTime::from_millis(t.timestamp_millis())),
            )
            .set_max_records(params.max_records)
            .set_severity(params.severity.map(|s| EventSeverity::from(s.as_str())))
            .send()
            .await
            .map_err(classify_sdk_error)?;

        let items = output.events().iter().map(event_to_json).collect();
        Ok(Page::new(items).with_next_token(output.next_token().map(str::to_string)))
    }

    async fn describe_configuration_settings(
        &self,
        params: DescribeConfigSettingsParams,
    ) -> Result<Page, ClientError> {
        let output = self
            .client
            .describe_configuration_settings()
            .application_name(params.application_name)
            .set_environment_name(params.environment_name)
            .set_template_name(params.template_name)
            .send()
            .await
            .map_err(classify_sdk_error)?;

        let items = output
            .configuration_settings()
            .iter()
            .map(config_settings_to_json)
            .collect();
        Ok(Page::new(items))
    }
}

// ============================================================================
// Error Handling Helpers
// ============================================================================

/// Turn an SDK error into a [`ClientError`].
///
/// Service errors keep their AWS code and message. Everything else (no
/// credentials, timeouts, DNS failures) is described from the error chain.
fn classify_sdk_error<E, R>(err: SdkError<E, R>) -> ClientError
where
    E: ProvideErrorMetadata + StdError + 'static,
    R: std::fmt::Debug,
{
    if let SdkError::ServiceError(service_err) = &err {
        let inner = service_err.err();
        return ClientError::from_aws(inner.code(), inner.message());
    }

    let is_transport = match &err {
        SdkError::TimeoutError(_) => true,
        SdkError::DispatchFailure(failure) => failure.is_io() || failure.is_timeout(),
        _ => false,
    };

    let message = error_chain_message(&err);
    classify_local_failure(&message, is_transport)
}

fn classify_local_failure(message: &str, is_transport: bool) -> ClientError {
    let lower = message.to_lowercase();
    if lower.contains("credential")
        || lower.contains("security token")
        || lower.contains("session token")
        || lower.contains("expired token")
        || lower.contains("sso")
    {
        ClientError::credentials(message)
    } else if is_transport
        || lower.contains("timeout")
        || lower.contains("timed out")
        || lower.contains("dns")
        || lower.contains("connection")
    {
        ClientError::network(message)
    } else {
        ClientError::new(ErrorKind::Service, message)
    }
}

/// Join the messages of an error chain, skipping generic SDK wrappers.
fn error_chain_message(err: &dyn StdError) -> String {
    let mut messages = Vec::new();
    collect_error_messages(err, &mut messages);
    if messages.is_empty() {
        "Unknown error calling Elastic Beanstalk".to_string()
    } else {
        messages.join(": ")
    }
}

fn collect_error_messages(err: &dyn StdError, messages: &mut Vec<String>) {
    let msg = err.to_string();
    if !msg.is_empty()
        && !msg.starts_with("dispatch failure")
        && !msg.starts_with("connector error")
        && !msg.starts_with("unhandled error")
        && !msg.starts_with("failed to construct request")
    {
        messages.push(msg);
    }

    if let Some(source) = err.source() {
        collect_error_messages(source, messages);
    }
}
