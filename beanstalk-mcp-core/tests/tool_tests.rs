use beanstalk_mcp_core::{box_tools, ClientError, ErrorKind, ToolResult};
use serde::Serialize;

// ===== ToolResult Helper Method Tests =====

#[test]
fn test_tool_result_text_factory() {
    let result = ToolResult::text("Hello");
    assert!(matches!(result, ToolResult::Text(_)));

    if let ToolResult::Text(s) = result {
        assert_eq!(s, "Hello");
    }
}

#[test]
fn test_tool_result_json_factory() {
    #[derive(Serialize)]
    #[serde(rename_all = "PascalCase")]
    struct Page {
        applications: Vec<String>,
        next_token: Option<String>,
    }

    let page = Page {
        applications: vec!["my-app".to_string()],
        next_token: None,
    };

    let result = ToolResult::json(page).unwrap();
    let value = result.as_json().unwrap();
    assert_eq!(value["Applications"][0], "my-app");
    assert!(value["NextToken"].is_null());
}

#[test]
fn test_tool_result_as_text_pretty_prints_json() {
    let json_result = ToolResult::Json(serde_json::json!({"Events": []}));
    let text = json_result.as_text();
    assert!(text.contains("\"Events\": []"));

    let text_result = ToolResult::Text("Hello".to_string());
    assert_eq!(text_result.as_text(), "Hello");
}

#[test]
fn test_tool_result_accessors() {
    let text_result = ToolResult::Text("Hello".to_string());
    assert_eq!(text_result.as_str(), Some("Hello"));
    assert!(text_result.as_json().is_none());

    let json_result = ToolResult::Json(serde_json::json!({"key": "value"}));
    assert_eq!(json_result.as_str(), None);
    assert!(json_result.as_json().is_some());
}

#[test]
fn test_tool_result_from_strings() {
    let result: ToolResult = String::from("Test").into();
    assert_eq!(result, ToolResult::Text("Test".to_string()));

    let result: ToolResult = "Test".into();
    assert_eq!(result, ToolResult::Text("Test".to_string()));
}

// ===== ClientError Conversion Tests =====

#[test]
fn test_client_error_from_string() {
    let error: ClientError = String::from("Test error").into();
    assert_eq!(error.to_string(), "Test error");
    assert_eq!(error.kind(), ErrorKind::Service);
}

#[test]
fn test_client_error_from_str() {
    let error: ClientError = "Test error".into();
    assert_eq!(error.to_string(), "Test error");
}

#[test]
fn test_box_tools_macro_empty() {
    let tools: Vec<Box<dyn beanstalk_mcp_core::DynTool>> = box_tools![];
    assert!(tools.is_empty());
}
