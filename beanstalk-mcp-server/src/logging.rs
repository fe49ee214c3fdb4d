//! Tracing setup.
//!
//! Stdout carries MCP protocol frames, so every log line goes to stderr.

use crate::config::LogFormat;
use crate::error::{ServerError, ServerResult};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str =
    "beanstalk_mcp_server=info,beanstalk_mcp_tools=info,beanstalk_mcp_core=info";

pub fn init_logging(format: LogFormat) -> ServerResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let result = match format {
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(layer.compact())
            .try_init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(layer.json())
            .try_init(),
    };

    result.map_err(|e| ServerError::Logging(e.to_string()))
}
