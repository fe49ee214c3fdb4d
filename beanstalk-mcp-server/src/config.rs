//! Command-line configuration.

use crate::context::ServerContext;
use beanstalk_mcp_tools::beanstalk::SdkClientFactory;
use clap::{ArgAction, Parser, ValueEnum};

/// AWS Elastic Beanstalk MCP Server
#[derive(Parser, Debug, Clone)]
#[command(name = "beanstalk-mcp-server", version, about)]
pub struct Cli {
    /// Run in read-only mode. `--readonly` alone means true.
    #[arg(
        long,
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value_t = false,
        default_missing_value = "true"
    )]
    pub readonly: bool,

    /// Named AWS profile to load credentials from
    #[arg(long, env = "AWS_PROFILE")]
    pub profile: Option<String>,

    /// Do not probe credentials with DescribeApplications when building clients
    #[arg(long)]
    pub skip_credential_check: bool,

    /// Log line format (logs are written to stderr)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

impl Cli {
    pub fn context(&self) -> ServerContext {
        ServerContext::new(self.readonly)
    }

    pub fn client_factory(&self) -> SdkClientFactory {
        let mut builder =
            SdkClientFactory::builder().verify_credentials(!self.skip_credential_check);
        if let Some(profile) = &self.profile {
            builder = builder.profile(profile.clone());
        }
        builder.build()
    }
}
