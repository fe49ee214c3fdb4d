//! Error types for the Elastic Beanstalk MCP server.

/// Errors that can stop the server process.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The tracing subscriber could not be installed.
    #[error("Failed to initialize logging: {0}")]
    Logging(String),

    /// The stdio transport failed to start or terminated abnormally.
    #[error("Transport error: {0}")]
    Transport(String),
}

/// Result type alias for server operations.
pub type ServerResult<T> = Result<T, ServerError>;
