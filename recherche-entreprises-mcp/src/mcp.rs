//! MCP (Model Context Protocol) server.
//!
//! Implements the JSON-RPC 2.0 message layer shared by the stdio and HTTP
//! transports: request parsing, method dispatch, and response framing.

mod handlers;
pub mod http;
pub mod stdio;
mod tools;

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use crate::service::SearchService;

pub const PROTOCOL_VERSION: &str = "2024-11-05";
pub const SERVER_NAME: &str = "recherche-entreprises-mcp";

// JSON-RPC error codes
pub const PARSE_ERROR: i32 = -32700;
pub const INVALID_REQUEST: i32 = -32600;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;

/// MCP server state
pub struct McpState {
    pub service: Arc<SearchService>,
}

impl McpState {
    pub fn new(service: Arc<SearchService>) -> Self {
        Self { service }
    }
}

/// Route one JSON-RPC message to its handler.
///
/// Returns `None` for notifications (messages without an `id`).
pub async fn dispatch(state: &McpState, request: McpRequest) -> Option<McpResponse> {
    let Some(id) = request.id else {
        debug!(method = %request.method, "MCP notification received");
        return None;
    };
    debug!(method = %request.method, id = %id, "MCP request received");

    let result = match request.method.as_str() {
        "initialize" => handlers::handle_initialize(state),
        "ping" => Ok(serde_json::json!({})),
        "tools/list" => handlers::handle_tools_list(state),
        "tools/call" => tools::handle_tool_call(state, request.params).await,
        _ => Err(McpError {
            code: METHOD_NOT_FOUND,
            message: format!("Method not found: {}", request.method),
        }),
    };

    Some(McpResponse::from_result(id, result))
}

/// Dispatch one raw JSON-RPC message, answering malformed input with an error response
pub async fn dispatch_bytes(state: &McpState, message: &[u8]) -> Option<McpResponse> {
    match McpRequest::parse_bytes(message) {
        Ok(request) => dispatch(state, request).await,
        Err(response) => Some(response),
    }
}

// MCP Protocol Types

#[derive(Debug, Serialize, Deserialize)]
pub struct McpRequest {
    pub jsonrpc: String,
    /// `None` only when the member is absent; `"id": null` is still a request
    #[serde(default, deserialize_with = "present_id")]
    pub id: Option<serde_json::Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<serde_json::Value>,
}

impl McpRequest {
    /// Interpret a JSON value as a request, or build the error reply for it
    pub fn from_value(message: serde_json::Value) -> Result<Self, McpResponse> {
        let id = message
            .get("id")
            .cloned()
            .unwrap_or(serde_json::Value::Null);
        serde_json::from_value(message).map_err(|e| {
            McpResponse::error(
                id,
                McpError {
                    code: INVALID_REQUEST,
                    message: format!("Invalid request: {}", e),
                },
            )
        })
    }

    /// Parse one line of text as a request
    pub fn parse(text: &str) -> Result<Self, McpResponse> {
        let message: serde_json::Value = serde_json::from_str(text).map_err(parse_error)?;
        Self::from_value(message)
    }

    /// Parse one raw message; bytes that are not UTF-8 are a parse error
    pub fn parse_bytes(bytes: &[u8]) -> Result<Self, McpResponse> {
        let text = std::str::from_utf8(bytes).map_err(parse_error)?;
        Self::parse(text)
    }
}

fn present_id<'de, D>(deserializer: D) -> Result<Option<serde_json::Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(Some)
}

fn parse_error(e: impl std::fmt::Display) -> McpResponse {
    McpResponse::error(
        serde_json::Value::Null,
        McpError {
            code: PARSE_ERROR,
            message: format!("Parse error: {}", e),
        },
    )
}

#[derive(Debug, Serialize, Deserialize)]
pub struct McpResponse {
    pub jsonrpc: String,
    pub id: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<McpError>,
}

impl McpResponse {
    fn from_result(id: serde_json::Value, result: Result<serde_json::Value, McpError>) -> Self {
        match result {
            Ok(data) => Self {
                jsonrpc: "2.0".to_string(),
                id,
                result: Some(data),
                error: None,
            },
            Err(error) => Self::error(id, error),
        }
    }

    fn error(id: serde_json::Value, error: McpError) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(error),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McpError {
    pub code: i32,
    pub message: String,
}
