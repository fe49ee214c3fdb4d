//! Process-wide server settings.

use beanstalk_mcp_core::DynTool;

/// Settings fixed at startup and shared with every request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerContext {
    readonly_mode: bool,
}

impl ServerContext {
    pub fn new(readonly_mode: bool) -> Self {
        Self { readonly_mode }
    }

    /// True when only read-only tools may be listed and called.
    pub fn readonly_mode(&self) -> bool {
        self.readonly_mode
    }

    /// Whether `tool` is exposed under this context.
    pub fn allows(&self, tool: &dyn DynTool) -> bool {
        !self.readonly_mode || tool.read_only()
    }
}
