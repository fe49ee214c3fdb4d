//! MCP request handling.
//!
//! [`BeanstalkServer`] owns the registered tools and answers `tools/list` and
//! `tools/call`. Tool failures are reported as tool results flagged with
//! `isError` carrying the [`ClientError`] message; only protocol misuse (an
//! unknown tool name) becomes a JSON-RPC error.

use crate::context::ServerContext;
use beanstalk_mcp_core::{ClientError, DynTool, ErrorKind};
use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, Implementation, JsonObject, ListToolsResult,
    PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool as McpTool, ToolAnnotations,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData, RoleServer, ServerHandler};
use std::sync::Arc;

/// Name reported in the MCP initialize handshake.
pub const SERVER_NAME: &str = "awslabs.elasticbeanstalk-mcp-server";

/// Instructions reported in the MCP initialize handshake.
pub const SERVER_INSTRUCTIONS: &str = "Elastic Beanstalk MCP server for interacting with \
     environments, applications and other Beanstalk resources.";

/// MCP server exposing a set of tools under a [`ServerContext`].
pub struct BeanstalkServer {
    tools: Vec<Box<dyn DynTool>>,
    context: Arc<ServerContext>,
}

impl BeanstalkServer {
    pub fn new(context: ServerContext) -> Self {
        Self {
            tools: Vec::new(),
            context: Arc::new(context),
        }
    }

    /// Register a batch of tools.
    pub fn with_tools(mut self, tools: Vec<Box<dyn DynTool>>) -> Self {
        for tool in tools {
            self.add_tool(tool);
        }
        self
    }

    /// Register one tool. The first tool registered under a name wins.
    pub fn add_tool(&mut self, tool: Box<dyn DynTool>) {
        if self.tools.iter().any(|t| t.name() == tool.name()) {
            tracing::warn!(tool = tool.name(), "duplicate tool name, ignoring registration");
            return;
        }
        self.tools.push(tool);
    }

    pub fn context(&self) -> &ServerContext {
        &self.context
    }

    /// Tools visible under the current context, in registration order.
    fn visible_tools(&self) -> impl Iterator<Item = &dyn DynTool> {
        self.tools
            .iter()
            .map(|t| t.as_ref())
            .filter(|t| self.context.allows(*t))
    }

    /// Names of the tools clients can see.
    pub fn tool_names(&self) -> Vec<&str> {
        self.visible_tools().map(|t| t.name()).collect()
    }

    /// Tool definitions as advertised by `tools/list`.
    pub fn list_mcp_tools(&self) -> Vec<McpTool> {
        self.visible_tools().map(to_mcp_tool).collect()
    }

    /// Execute a `tools/call` request.
    pub async fn dispatch(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ErrorData> {
        let Some(tool) = self.tools.iter().find(|t| t.name() == name) else {
            return Err(ErrorData::invalid_params(
                format!("Unknown tool: {}", name),
                None,
            ));
        };

        if !self.context.allows(tool.as_ref()) {
            let err = ClientError::new(
                ErrorKind::AccessDenied,
                format!(
                    "Tool {} is not available: the server is running in read-only mode",
                    name
                ),
            );
            tracing::warn!(tool = name, "{}", err);
            return Ok(error_result(&err));
        }

        let arguments = serde_json::Value::Object(arguments.unwrap_or_default());
        tracing::debug!(tool = name, arguments = %arguments, "calling tool");

        match tool.execute_raw(arguments).await {
            Ok(result) => Ok(CallToolResult::success(vec![Content::text(
                result.as_text(),
            )])),
            Err(err) => {
                tracing::error!(
                    tool = name,
                    kind = %err.kind(),
                    code = err.code().unwrap_or("-"),
                    "Error in {}: {}",
                    name,
                    err
                );
                Ok(error_result(&err))
            }
        }
    }
}

fn error_result(err: &ClientError) -> CallToolResult {
    CallToolResult::error(vec![Content::text(err.to_string())])
}

fn to_mcp_tool(tool: &dyn DynTool) -> McpTool {
    let schema = match tool.input_schema() {
        serde_json::Value::Object(map) => map,
        _ => JsonObject::new(),
    };

    let mut mcp_tool = McpTool::new(
        tool.name().to_string(),
        tool.description().to_string(),
        Arc::new(schema),
    );
    mcp_tool.annotations = Some(ToolAnnotations {
        read_only_hint: Some(tool.read_only()),
        open_world_hint: Some(true),
        ..Default::default()
    });
    mcp_tool
}

impl ServerHandler for BeanstalkServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult::with_all_items(self.list_mcp_tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        self.dispatch(&request.name, request.arguments).await
    }
}
