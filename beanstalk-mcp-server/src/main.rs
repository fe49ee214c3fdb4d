use anyhow::Context;
use beanstalk_mcp_server::{init_logging, serve_stdio, BeanstalkServer, Cli};
use beanstalk_mcp_tools::beanstalk::ClientFactory;
use clap::Parser;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_format)?;

    let context = cli.context();
    let factory: Arc<dyn ClientFactory> = Arc::new(cli.client_factory());

    tracing::info!(
        readonly = context.readonly_mode(),
        profile = cli.profile.as_deref().unwrap_or("default"),
        "starting Elastic Beanstalk MCP server"
    );

    let server =
        BeanstalkServer::new(context).with_tools(beanstalk_mcp_tools::all_tools(factory));

    serve_stdio(server)
        .await
        .context("Elastic Beanstalk MCP server stopped")?;

    Ok(())
}
