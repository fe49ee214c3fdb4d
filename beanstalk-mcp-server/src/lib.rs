//! MCP server exposing read-only AWS Elastic Beanstalk tools.
//!
//! The server speaks MCP over stdio. Tools come from
//! [`beanstalk_mcp_tools`]; this crate adds dispatch, read-only mode,
//! command-line configuration and logging.
//!
//! # Example
//!
//! ```rust,no_run
//! use beanstalk_mcp_server::{serve_stdio, BeanstalkServer, ServerContext};
//! use beanstalk_mcp_tools::beanstalk::SdkClientFactory;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let factory = Arc::new(SdkClientFactory::new());
//! let server = BeanstalkServer::new(ServerContext::new(true))
//!     .with_tools(beanstalk_mcp_tools::all_tools(factory));
//!
//! serve_stdio(server).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod server;

pub use config::{Cli, LogFormat};
pub use context::ServerContext;
pub use error::{ServerError, ServerResult};
pub use logging::init_logging;
pub use server::{BeanstalkServer, SERVER_INSTRUCTIONS, SERVER_NAME};

use rmcp::ServiceExt;

/// Serve `server` over stdin/stdout until the client disconnects.
pub async fn serve_stdio(server: BeanstalkServer) -> ServerResult<()> {
    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| ServerError::Transport(e.to_string()))?;

    let reason = service
        .waiting()
        .await
        .map_err(|e| ServerError::Transport(e.to_string()))?;

    tracing::info!(reason = ?reason, "MCP session ended");
    Ok(())
}
