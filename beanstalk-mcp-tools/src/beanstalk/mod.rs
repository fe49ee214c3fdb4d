//! Read-only AWS Elastic Beanstalk tools.
//!
//! Each tool maps to exactly one Elastic Beanstalk API call. Optional filters
//! the caller leaves out are not sent at all, and every failure (validation,
//! credentials, AWS service errors) comes back as a
//! [`ClientError`](beanstalk_mcp_core::ClientError).
//!
//! # Available Tools
//!
//! | Tool | API call |
//! |------|----------|
//! | [`DescribeEnvironmentsTool`] | `DescribeEnvironments` |
//! | [`DescribeApplicationsTool`] | `DescribeApplications` |
//! | [`DescribeEventsTool`] | `DescribeEvents` |
//! | [`DescribeConfigSettingsTool`] | `DescribeConfigurationSettings` |
//!
//! # Regions
//!
//! Every tool takes an optional `region_name`. Without it the `AWS_REGION`
//! environment variable is used, then [`DEFAULT_REGION`].
//!
//! # Example
//!
//! ```no_run
//! use beanstalk_mcp_tools::beanstalk::{self, SdkClientFactory};
//! use std::sync::Arc;
//!
//! let factory = Arc::new(SdkClientFactory::builder().profile("dev").build());
//! let tools = beanstalk::read_only_tools(factory);
//! assert_eq!(tools.len(), 4);
//! ```

mod client;
mod conversion;
mod describe_applications;
mod describe_config_settings;
mod describe_environments;
mod describe_events;
mod params;
mod region;

pub use client::{
    connect, BeanstalkApi, ClientFactory, SdkBeanstalkClient, SdkClientFactory,
    SdkClientFactoryBuilder, USER_AGENT_APP_NAME,
};
pub use describe_applications::{DescribeApplicationsInput, DescribeApplicationsTool};
pub use describe_config_settings::{DescribeConfigSettingsInput, DescribeConfigSettingsTool};
pub use describe_environments::{DescribeEnvironmentsInput, DescribeEnvironmentsTool};
pub use describe_events::{DescribeEventsInput, DescribeEventsTool};
pub use params::{
    DescribeApplicationsParams, DescribeConfigSettingsParams, DescribeEnvironmentsParams,
    DescribeEventsParams, Page, Severity,
};
pub use region::{region_from_env, resolve_region, DEFAULT_REGION, REGION_ENV_VAR};

use beanstalk_mcp_core::{box_tool, DynTool};
use std::sync::Arc;

/// Returns all read-only Elastic Beanstalk tools
pub fn read_only_tools(factory: Arc<dyn ClientFactory>) -> Vec<Box<dyn DynTool>> {
    vec![
        box_tool(DescribeEnvironmentsTool::new(factory.clone())),
        box_tool(DescribeApplicationsTool::new(factory.clone())),
        box_tool(DescribeEventsTool::new(factory.clone())),
        box_tool(DescribeConfigSettingsTool::new(factory)),
    ]
}

/// Returns all Elastic Beanstalk tools
///
/// Every tool is currently read-only, so this is the same set as
/// [`read_only_tools`].
pub fn all_tools(factory: Arc<dyn ClientFactory>) -> Vec<Box<dyn DynTool>> {
    read_only_tools(factory)
}
