//! Ready-to-use AWS Elastic Beanstalk tools.
//!
//! See [`beanstalk`] for the tool list and client construction.

pub mod beanstalk;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export tool grouping functions at crate root for convenience
pub use beanstalk::{all_tools, read_only_tools};

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use beanstalk_mcp_core::{ClientError, ErrorKind, Tool, ToolResult};
    pub use schemars::JsonSchema;
    pub use serde::{Deserialize, Serialize};
}
