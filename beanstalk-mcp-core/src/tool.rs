use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ClientError;

/// Result types that tools can return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ToolResult {
    /// Plain text response
    Text(String),

    /// Structured JSON data - what every describe tool returns
    Json(Value),
}

impl ToolResult {
    /// Create a JSON result from any serializable type
    pub fn json<T: Serialize>(value: T) -> Result<Self, serde_json::Error> {
        Ok(Self::Json(serde_json::to_value(value)?))
    }

    /// Create a text result from a string
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Render the result as text. JSON is pretty-printed.
    pub fn as_text(&self) -> String {
        match self {
            ToolResult::Text(s) => s.clone(),
            ToolResult::Json(v) => serde_json::to_string_pretty(v).unwrap_or_else(|_| v.to_string()),
        }
    }

    /// Get a reference to the text content if this is a Text variant
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ToolResult::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get a reference to the JSON content if this is a Json variant
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ToolResult::Json(v) => Some(v),
            _ => None,
        }
    }
}

/// Convert strings directly to ToolResult::Text
impl From<String> for ToolResult {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for ToolResult {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Trait for implementing tools exposed to MCP clients.
///
/// Tools define an input type with `#[derive(Deserialize, JsonSchema)]`; the
/// JSON schema advertised to clients is generated from that type, so the
/// doc comments on input fields become parameter descriptions.
///
/// # Example
///
/// ```rust
/// use beanstalk_mcp_core::{ClientError, Tool, ToolResult};
/// use schemars::JsonSchema;
/// use serde::Deserialize;
///
/// #[derive(Deserialize, JsonSchema)]
/// struct EchoInput {
///     /// Text to send back
///     text: String,
/// }
///
/// struct EchoTool;
///
/// impl Tool for EchoTool {
///     type Input = EchoInput;
///
///     fn name(&self) -> &str { "echo" }
///     fn description(&self) -> &str { "Echo the input" }
///     fn read_only(&self) -> bool { true }
///
///     fn execute(&self, input: Self::Input) -> impl std::future::Future<Output = Result<ToolResult, ClientError>> + Send {
///         async move {
///             if input.text.is_empty() {
///                 return Err(ClientError::validation("text cannot be empty"));
///             }
///             Ok(input.text.into())
///         }
///     }
/// }
/// ```
pub trait Tool: Send + Sync {
    /// The input type for this tool. Must implement `Deserialize` and `JsonSchema`.
    type Input: DeserializeOwned + JsonSchema;

    /// The name of the tool (e.g., "describe_environments")
    fn name(&self) -> &str;

    /// A description of what the tool does
    fn description(&self) -> &str;

    /// Whether the tool only reads AWS state.
    ///
    /// Tools that return `false` are hidden when the server runs in
    /// read-only mode.
    fn read_only(&self) -> bool {
        false
    }

    /// Execute the tool with typed input
    fn execute(
        &self,
        input: Self::Input,
    ) -> impl std::future::Future<Output = Result<ToolResult, ClientError>> + Send;

    /// Get the JSON schema for this tool's input.
    ///
    /// This is automatically implemented using the `JsonSchema` derive on `Input`.
    fn input_schema(&self) -> Value {
        let schema = schemars::schema_for!(Self::Input);
        serde_json::to_value(schema)
            .unwrap_or_else(|_| serde_json::json!({ "type": "object", "properties": {} }))
    }
}

/// Object-safe trait for dynamic tool dispatch (used by the server).
///
/// Implement `Tool` instead and use `box_tool()` to convert.
pub trait DynTool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn read_only(&self) -> bool;
    fn input_schema(&self) -> Value;
    fn execute_raw(
        &self,
        input: Value,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<ToolResult, ClientError>> + Send + '_>,
    >;
}

/// Convert a `Tool` into a type-erased `Box<dyn DynTool>` for storage in collections.
pub fn box_tool<T: Tool + 'static>(tool: T) -> Box<dyn DynTool> {
    Box::new(ToolWrapper(tool))
}

/// Create a `Vec<Box<dyn DynTool>>` from heterogeneous tool types.
///
/// # Example
///
/// ```ignore
/// use beanstalk_mcp_core::box_tools;
///
/// let tools = box_tools![
///     DescribeApplicationsTool::new(factory.clone()),
///     DescribeEventsTool::new(factory),
/// ];
/// ```
#[macro_export]
macro_rules! box_tools {
    ($($tool:expr),* $(,)?) => {
        vec![$($crate::tool::box_tool($tool)),*]
    };
}

/// Internal wrapper that implements DynTool for any Tool
struct ToolWrapper<T>(T);

impl<T: Tool + 'static> DynTool for ToolWrapper<T> {
    fn name(&self) -> &str {
        self.0.name()
    }

    fn description(&self) -> &str {
        self.0.description()
    }

    fn read_only(&self) -> bool {
        self.0.read_only()
    }

    fn input_schema(&self) -> Value {
        self.0.input_schema()
    }

    fn execute_raw(
        &self,
        input: Value,
    ) -> std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<ToolResult, ClientError>> + Send + '_>,
    > {
        Box::pin(async move {
            // MCP clients send no `arguments` at all for zero-argument calls
            let input = if input.is_null() {
                Value::Object(Default::default())
            } else {
                input
            };

            let typed_input: T::Input = serde_json::from_value(input).map_err(|e| {
                ClientError::validation(format!(
                    "Invalid arguments for {}: {}",
                    self.0.name(),
                    e
                ))
            })?;

            self.0.execute(typed_input).await
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize, JsonSchema)]
    struct CountInput {
        /// How many items
        count: u32,
    }

    struct CountTool;

    impl Tool for CountTool {
        type Input = CountInput;

        fn name(&self) -> &str {
            "count"
        }

        fn description(&self) -> &str {
            "Count things"
        }

        async fn execute(&self, input: Self::Input) -> Result<ToolResult, ClientError> {
            Ok(ToolResult::json(serde_json::json!({ "Count": input.count }))?)
        }
    }

    #[test]
    fn test_default_read_only_is_false() {
        assert!(!CountTool.read_only());
        assert!(!box_tool(CountTool).read_only());
    }

    #[test]
    fn test_input_schema_lists_properties() {
        let schema = CountTool.input_schema();
        assert_eq!(schema["type"], "object");
        assert!(schema["properties"]["count"].is_object());
        assert_eq!(schema["properties"]["count"]["description"], "How many items");
    }

    #[tokio::test]
    async fn test_execute_raw_deserializes_input() {
        let tool = box_tool(CountTool);
        let result = tool
            .execute_raw(serde_json::json!({ "count": 3 }))
            .await
            .unwrap();
        assert_eq!(result.as_json().unwrap()["Count"], 3);
    }

    #[tokio::test]
    async fn test_execute_raw_rejects_bad_input_as_validation() {
        let tool = box_tool(CountTool);
        let err = tool
            .execute_raw(serde_json::json!({ "count": "three" }))
            .await
            .unwrap_err();
        assert!(err.is_validation());
        assert!(err.message().contains("Invalid arguments for count"));
    }

    #[tokio::test]
    async fn test_execute_raw_null_is_empty_object() {
        let tool = box_tool(CountTool);
        // `count` is required, so an empty object still fails - but as a
        // missing field, not as "invalid type: null"
        let err = tool.execute_raw(Value::Null).await.unwrap_err();
        assert!(err.message().contains("missing field"));
    }
}
