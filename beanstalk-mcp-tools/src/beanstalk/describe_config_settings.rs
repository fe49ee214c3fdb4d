use super::client::{connect, ClientFactory};
use super::params::{non_empty, DescribeConfigSettingsParams};
use crate::prelude::*;
use std::sync::Arc;

/// Input parameters for describe_config_settings tool
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct DescribeConfigSettingsInput {
    /// The application name for the configuration settings
    pub application_name: String,

    /// The environment name to retrieve configuration settings for
    #[serde(default)]
    pub environment_name: Option<String>,

    /// The configuration template name to retrieve settings for
    #[serde(default)]
    pub template_name: Option<String>,

    /// The AWS region to run the tool
    #[serde(default)]
    pub region_name: Option<String>,
}

impl DescribeConfigSettingsInput {
    /// Build the outbound params.
    ///
    /// Exactly one of environment or template is sent; the environment wins
    /// when both are given.
    pub(crate) fn to_params(&self) -> Result<DescribeConfigSettingsParams, ClientError> {
        let environment_name = non_empty(self.environment_name.clone());
        let template_name = non_empty(self.template_name.clone());

        let (environment_name, template_name) = match (environment_name, template_name) {
            (Some(env), _) => (Some(env), None),
            (None, Some(template)) => (None, Some(template)),
            (None, None) => {
                return Err(ClientError::validation(
                    "Either environment_name or template_name must be provided",
                ))
            }
        };

        Ok(DescribeConfigSettingsParams {
            application_name: self.application_name.clone(),
            environment_name,
            template_name,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct DescribeConfigSettingsOutput {
    configuration_settings: Vec<serde_json::Value>,
}

/// Tool for reading configuration settings of an environment or template
pub struct DescribeConfigSettingsTool {
    factory: Arc<dyn ClientFactory>,
}

impl DescribeConfigSettingsTool {
    pub fn new(factory: Arc<dyn ClientFactory>) -> Self {
        Self { factory }
    }
}

impl Tool for DescribeConfigSettingsTool {
    type Input = DescribeConfigSettingsInput;

    fn name(&self) -> &str {
        "describe_config_settings"
    }

    fn description(&self) -> &str {
        "Returns descriptions of the configuration settings for a specified configuration set. \
         This tool can retrieve settings for either a configuration template or the \
         configuration set associated with a running environment. When describing settings for \
         a running environment, it may return both the deployed configuration and a draft \
         configuration that is in the process of deployment or that failed to deploy. \
         Either environment_name or template_name must be provided."
    }

    fn read_only(&self) -> bool {
        true
    }

    async fn execute(&self, input: Self::Input) -> Result<ToolResult, ClientError> {
        let params = input.to_params()?;
        let client = connect(self.factory.as_ref(), input.region_name.as_deref()).await?;

        let page = client.describe_configuration_settings(params).await?;

        Ok(ToolResult::json(DescribeConfigSettingsOutput {
            configuration_settings: page.items,
        })?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(env: Option<&str>, template: Option<&str>) -> DescribeConfigSettingsInput {
        DescribeConfigSettingsInput {
            application_name: "my-app".to_string(),
            environment_name: env.map(str::to_string),
            template_name: template.map(str::to_string),
            region_name: None,
        }
    }

    #[test]
    fn test_requires_environment_or_template() {
        for app in ["my-app", "", "other"] {
            let mut i = input(None, None);
            i.application_name = app.to_string();
            let err = i.to_params().unwrap_err();
            assert!(err.is_validation());
            assert_eq!(
                err.to_string(),
                "Either environment_name or template_name must be provided"
            );
        }
    }

    #[test]
    fn test_empty_strings_do_not_count() {
        assert!(input(Some(""), Some("")).to_params().is_err());
    }

    #[test]
    fn test_environment_preferred_over_template() {
        let params = input(Some("prod"), Some("base")).to_params().unwrap();
        assert_eq!(params.environment_name.as_deref(), Some("prod"));
        assert_eq!(params.template_name, None);

        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "ApplicationName": "my-app", "EnvironmentName": "prod" })
        );
    }

    #[test]
    fn test_template_only() {
        let params = input(None, Some("base")).to_params().unwrap();
        assert_eq!(params.environment_name, None);
        assert_eq!(params.template_name.as_deref(), Some("base"));
    }

    #[test]
    fn test_application_name_is_required_in_schema() {
        let tool = DescribeConfigSettingsTool::new(Arc::new(
            crate::beanstalk::SdkClientFactory::new(),
        ));
        let schema = tool.input_schema();
        let required = schema["required"].as_array().unwrap();
        assert!(required.iter().any(|r| r == "application_name"));
        assert!(!required.iter().any(|r| r == "environment_name"));
    }
}
