use super::client::{connect, ClientFactory};
use super::params::{non_empty_list, DescribeApplicationsParams};
use crate::prelude::*;
use std::sync::Arc;

/// Input parameters for describe_applications tool
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct DescribeApplicationsInput {
    /// List of application names to describe
    #[serde(default)]
    pub application_names: Option<Vec<String>>,

    /// The AWS region to run the tool
    #[serde(default)]
    pub region_name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct DescribeApplicationsOutput {
    applications: Vec<serde_json::Value>,
}

/// Tool for describing Elastic Beanstalk applications
pub struct DescribeApplicationsTool {
    factory: Arc<dyn ClientFactory>,
}

impl DescribeApplicationsTool {
    pub fn new(factory: Arc<dyn ClientFactory>) -> Self {
        Self { factory }
    }
}

impl Tool for DescribeApplicationsTool {
    type Input = DescribeApplicationsInput;

    fn name(&self) -> &str {
        "describe_applications"
    }

    fn description(&self) -> &str {
        "Returns descriptions for existing applications. If no application names are \
         specified, all applications will be returned."
    }

    fn read_only(&self) -> bool {
        true
    }

    async fn execute(&self, input: Self::Input) -> Result<ToolResult, ClientError> {
        let client = connect(self.factory.as_ref(), input.region_name.as_deref()).await?;

        let params = DescribeApplicationsParams {
            application_names: non_empty_list(input.application_names),
        };
        let page = client.describe_applications(params).await?;

        Ok(ToolResult::json(DescribeApplicationsOutput {
            applications: page.items,
        })?)
    }
}
