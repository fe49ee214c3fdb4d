//! # beanstalk-mcp-core
//!
//! Building blocks shared by the Elastic Beanstalk MCP tools and server:
//!
//! - [`Tool`] - typed tool trait with a schemars-derived input schema
//! - [`DynTool`] / [`box_tool`] - type erasure for registries
//! - [`ToolResult`] - what a tool hands back
//! - [`ClientError`] - the single error type every tool surfaces
//!
//! ## Adding Tools
//!
//! ```ignore
//! use beanstalk_mcp_core::{ClientError, Tool, ToolResult};
//! use schemars::JsonSchema;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, JsonSchema)]
//! struct PingInput {}
//!
//! struct Ping;
//!
//! impl Tool for Ping {
//!     type Input = PingInput;
//!
//!     fn name(&self) -> &str { "ping" }
//!     fn description(&self) -> &str { "Check the server is alive" }
//!     fn read_only(&self) -> bool { true }
//!
//!     async fn execute(&self, _input: Self::Input) -> Result<ToolResult, ClientError> {
//!         Ok(ToolResult::text("pong"))
//!     }
//! }
//! ```

pub mod error;
pub mod tool;

pub use error::{ClientError, ErrorKind};
pub use tool::{box_tool, DynTool, Tool, ToolResult};
