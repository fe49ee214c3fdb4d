//! Test utilities for beanstalk-mcp-tools.
//!
//! Recording mocks of [`BeanstalkApi`] and [`ClientFactory`] so tools can be
//! exercised without AWS credentials or network access.
//!
//! Enable with the `test-utils` feature:
//!
//! ```toml
//! [dev-dependencies]
//! beanstalk-mcp-tools = { version = "...", features = ["test-utils"] }
//! ```
//!
//! # Example
//!
//! ```ignore
//! use beanstalk_mcp_tools::beanstalk::DescribeApplicationsTool;
//! use beanstalk_mcp_tools::test_utils::{MockBeanstalkApi, MockClientFactory};
//! use serde_json::json;
//!
//! let api = MockBeanstalkApi::new().with_items(vec![json!({"ApplicationName": "my-app"})]);
//! let factory = MockClientFactory::new(api.clone());
//! let tool = DescribeApplicationsTool::new(factory.shared());
//! ```

use crate::beanstalk::{
    BeanstalkApi, ClientFactory, DescribeApplicationsParams, DescribeConfigSettingsParams,
    DescribeEnvironmentsParams, DescribeEventsParams, Page,
};
use beanstalk_mcp_core::ClientError;
use serde::Serialize;
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// One recorded API call: the operation name and the params as sent.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub operation: &'static str,
    pub params: Value,
}

/// A mock Elastic Beanstalk API.
///
/// Every call is recorded with its serialized params and answered with the
/// configured page (or error).
#[derive(Clone, Default)]
pub struct MockBeanstalkApi {
    page: Page,
    error: Option<ClientError>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockBeanstalkApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records to return from every call
    pub fn with_items(mut self, items: Vec<Value>) -> Self {
        self.page.items = items;
        self
    }

    /// Pagination token to return from every call
    pub fn with_next_token(mut self, token: impl Into<String>) -> Self {
        self.page.next_token = Some(token.into());
        self
    }

    /// Fail every call with this error
    pub fn with_error(mut self, error: ClientError) -> Self {
        self.error = Some(error);
        self
    }

    /// All calls made so far, oldest first
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// The most recent call, if any
    pub fn last_call(&self) -> Option<RecordedCall> {
        self.calls.lock().unwrap().last().cloned()
    }

    fn record(&self, operation: &'static str, params: impl Serialize) -> Result<Page, ClientError> {
        let params = serde_json::to_value(params)?;
        self.calls
            .lock()
            .unwrap()
            .push(RecordedCall { operation, params });

        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(self.page.clone()),
        }
    }
}

#[async_trait::async_trait]
impl BeanstalkApi for MockBeanstalkApi {
    async fn describe_environments(
        &self,
        params: DescribeEnvironmentsParams,
    ) -> Result<Page, ClientError> {
        self.record("DescribeEnvironments", params)
    }

    async fn describe_applications(
        &self,
        params: DescribeApplicationsParams,
    ) -> Result<Page, ClientError> {
        self.record("DescribeApplications", params)
    }

    async fn describe_events(&self, params: DescribeEventsParams) -> Result<Page, ClientError> {
        self.record("DescribeEvents", params)
    }

    async fn describe_configuration_settings(
        &self,
        params: DescribeConfigSettingsParams,
    ) -> Result<Page, ClientError> {
        self.record("DescribeConfigurationSettings", params)
    }
}

/// A mock client factory that hands out a shared [`MockBeanstalkApi`] and
/// records the region of every request.
#[derive(Clone)]
pub struct MockClientFactory {
    api: MockBeanstalkApi,
    error: Option<ClientError>,
    regions: Arc<Mutex<Vec<String>>>,
}

impl MockClientFactory {
    pub fn new(api: MockBeanstalkApi) -> Self {
        Self {
            api,
            error: None,
            regions: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Fail client construction with this error (e.g. bad credentials)
    pub fn with_error(mut self, error: ClientError) -> Self {
        self.error = Some(error);
        self
    }

    /// Regions clients were requested for, oldest first
    pub fn regions(&self) -> Vec<String> {
        self.regions.lock().unwrap().clone()
    }

    /// Wrap in an `Arc<dyn ClientFactory>` for tool constructors
    pub fn shared(&self) -> Arc<dyn ClientFactory> {
        Arc::new(self.clone())
    }
}

#[async_trait::async_trait]
impl ClientFactory for MockClientFactory {
    async fn client(&self, region: &str) -> Result<Arc<dyn BeanstalkApi>, ClientError> {
        self.regions.lock().unwrap().push(region.to_string());
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(Arc::new(self.api.clone())),
        }
    }
}
