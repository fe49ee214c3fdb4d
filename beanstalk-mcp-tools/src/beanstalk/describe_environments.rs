use super::client::{connect, ClientFactory};
use super::params::{non_empty, non_empty_list, DescribeEnvironmentsParams};
use crate::prelude::*;
use std::sync::Arc;

/// Input parameters for describe_environments tool
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct DescribeEnvironmentsInput {
    /// If specified, restricts the returned descriptions to environments of this application
    #[serde(default)]
    pub application_name: Option<String>,

    /// List of environment names to describe
    #[serde(default)]
    pub environment_names: Option<Vec<String>>,

    /// List of environment IDs to describe
    #[serde(default)]
    pub environment_ids: Option<Vec<String>>,

    /// Include deleted environments if they existed within the last hour
    #[serde(default)]
    pub include_deleted: bool,

    /// The AWS region to run the tool
    #[serde(default)]
    pub region_name: Option<String>,
}

impl DescribeEnvironmentsInput {
    pub(crate) fn into_params(self) -> DescribeEnvironmentsParams {
        DescribeEnvironmentsParams {
            application_name: non_empty(self.application_name),
            environment_names: non_empty_list(self.environment_names),
            environment_ids: non_empty_list(self.environment_ids),
            include_deleted: self.include_deleted.then_some(true),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct DescribeEnvironmentsOutput {
    environments: Vec<serde_json::Value>,
    next_token: Option<String>,
}

/// Tool for describing Elastic Beanstalk environments
pub struct DescribeEnvironmentsTool {
    factory: Arc<dyn ClientFactory>,
}

impl DescribeEnvironmentsTool {
    pub fn new(factory: Arc<dyn ClientFactory>) -> Self {
        Self { factory }
    }
}

impl Tool for DescribeEnvironmentsTool {
    type Input = DescribeEnvironmentsInput;

    fn name(&self) -> &str {
        "describe_environments"
    }

    fn description(&self) -> &str {
        "Returns descriptions for existing environments. You can filter the results by \
         application name, environment name, or environment ID. If no filters are specified, \
         all environments will be returned."
    }

    fn read_only(&self) -> bool {
        true
    }

    async fn execute(&self, input: Self::Input) -> Result<ToolResult, ClientError> {
        let client = connect(self.factory.as_ref(), input.region_name.as_deref()).await?;

        let page = client.describe_environments(input.into_params()).await?;

        Ok(ToolResult::json(DescribeEnvironmentsOutput {
            environments: page.items,
            next_token: page.next_token,
        })?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_sends_no_filters() {
        let params = DescribeEnvironmentsInput::default().into_params();
        assert_eq!(params, DescribeEnvironmentsParams::default());
    }

    #[test]
    fn test_include_deleted_false_is_omitted() {
        let input = DescribeEnvironmentsInput {
            application_name: Some("my-app".to_string()),
            include_deleted: false,
            ..Default::default()
        };
        let params = input.into_params();
        assert_eq!(params.application_name.as_deref(), Some("my-app"));
        assert_eq!(params.include_deleted, None);
    }

    #[test]
    fn test_all_filters_forwarded() {
        let input = DescribeEnvironmentsInput {
            application_name: Some("my-app".to_string()),
            environment_names: Some(vec!["prod".to_string()]),
            environment_ids: Some(vec!["e-1".to_string(), "e-2".to_string()]),
            include_deleted: true,
            region_name: Some("eu-west-1".to_string()),
        };
        let json = serde_json::to_value(input.into_params()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "ApplicationName": "my-app",
                "EnvironmentNames": ["prod"],
                "EnvironmentIds": ["e-1", "e-2"],
                "IncludeDeleted": true,
            })
        );
    }

    #[test]
    fn test_schema_describes_parameters() {
        let tool = DescribeEnvironmentsTool::new(Arc::new(crate::beanstalk::SdkClientFactory::new()));
        let schema = tool.input_schema();
        let props = &schema["properties"];
        assert!(props["application_name"].is_object());
        assert!(props["environment_names"].is_object());
        assert!(props["include_deleted"].is_object());
        assert!(props["region_name"].is_object());
    }
}
