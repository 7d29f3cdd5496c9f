//! MCP tool call handler.
//!
//! Tool failures never become JSON-RPC errors: they are reported as a normal
//! result whose text starts with a fixed error prefix.

use tracing::warn;

use crate::error::{ServiceError, ServiceResult};
use crate::recherche_entreprises::SearchRequest;
use crate::tools::{REGISTRY, ToolName};

use super::{INVALID_PARAMS, McpError, McpState};

/// Handle tools/call request
pub async fn handle_tool_call(
    state: &McpState,
    params: Option<serde_json::Value>,
) -> Result<serde_json::Value, McpError> {
    let params = params.ok_or_else(|| McpError {
        code: INVALID_PARAMS,
        message: "Missing params".to_string(),
    })?;

    let name = params
        .get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError {
            code: INVALID_PARAMS,
            message: "Missing tool name".to_string(),
        })?;

    let arguments = params
        .get("arguments")
        .filter(|v| !v.is_null())
        .cloned()
        .unwrap_or(serde_json::json!({}));

    match execute_tool(state, name, arguments).await {
        Ok(text) => Ok(text_content(text, false)),
        Err(e) => {
            warn!(tool = %name, code = e.error_code(), error = %e, "Tool call failed");
            Ok(text_content(
                format!("Erreur lors de l'exécution de l'outil {}: {}", name, e),
                true,
            ))
        }
    }
}

fn text_content(text: String, is_error: bool) -> serde_json::Value {
    serde_json::json!({
        "content": [{
            "type": "text",
            "text": text
        }],
        "isError": is_error
    })
}

async fn execute_tool(
    state: &McpState,
    name: &str,
    arguments: serde_json::Value,
) -> ServiceResult<String> {
    let tool = REGISTRY
        .get_by_str(name)
        .map(|t| t.name)
        .ok_or_else(|| ServiceError::UnknownTool {
            name: name.to_string(),
        })?;

    match tool {
        ToolName::SearchCompanies => execute_search_companies(state, arguments).await,
    }
}

async fn execute_search_companies(
    state: &McpState,
    arguments: serde_json::Value,
) -> ServiceResult<String> {
    let request: SearchRequest =
        serde_json::from_value(arguments).map_err(|e| ServiceError::InvalidArguments {
            message: e.to_string(),
        })?;

    let result = state.service.search(&request).await?;
    Ok(result.to_string())
}
