//! MCP message handlers.
//!
//! Handlers for initialize and tools/list requests.

use crate::tools::REGISTRY;

use super::{McpError, McpState, PROTOCOL_VERSION, SERVER_NAME};

/// Handle initialize request
pub fn handle_initialize(_state: &McpState) -> Result<serde_json::Value, McpError> {
    Ok(serde_json::json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": { "listChanged": false }
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION")
        },
        "instructions": "Serveur MCP de recherche d'entreprises françaises (SIREN, SIRET, dirigeants, adresses) via l'API recherche-entreprises.api.gouv.fr."
    }))
}

/// Handle tools/list request
pub fn handle_tools_list(_state: &McpState) -> Result<serde_json::Value, McpError> {
    Ok(serde_json::json!({ "tools": REGISTRY.mcp_definitions() }))
}
