//! Tool registry for the MCP server.
//!
//! Tool names are derived from enum variants via strum, so the name a client
//! calls and the name advertised in `tools/list` cannot drift apart.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::Serialize;
use strum::{Display, EnumIter, EnumString};

/// All tool names as an exhaustive enum.
///
/// Adding a new tool requires:
/// 1. Add variant here
/// 2. Register metadata in a `tool_defs` module
/// 3. Add a handler arm in `mcp::tools` (compile error if missing)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, Display)]
#[strum(serialize_all = "snake_case")]
pub enum ToolName {
    SearchCompanies,
}

/// Metadata for a tool definition.
#[derive(Debug, Clone)]
pub struct ToolMetadata {
    /// Tool identifier - string representation derived via strum Display
    pub name: ToolName,

    /// Tool description shown to MCP clients
    pub description: &'static str,

    /// JSON Schema for tool parameters (called lazily to avoid static initialization issues)
    pub parameters: fn() -> serde_json::Value,
}

/// Central registry of all tools.
pub struct ToolRegistry {
    tools: HashMap<ToolName, ToolMetadata>,
}

impl ToolRegistry {
    /// Build the registry from all registered tool definitions
    pub fn new() -> Self {
        let mut tools = HashMap::new();
        super::tool_defs::register_all_tools(&mut tools);
        Self { tools }
    }

    /// Get all tools as MCP tool definitions, ordered by name
    pub fn mcp_definitions(&self) -> Vec<McpToolDefinition> {
        let mut definitions: Vec<McpToolDefinition> = self
            .tools
            .values()
            .map(|t| McpToolDefinition {
                name: t.name.to_string(),
                description: t.description.to_string(),
                input_schema: (t.parameters)(),
            })
            .collect();
        definitions.sort_by(|a, b| a.name.cmp(&b.name));
        definitions
    }

    /// Get metadata by string name
    pub fn get_by_str(&self, name: &str) -> Option<&ToolMetadata> {
        ToolName::from_str(name)
            .ok()
            .and_then(|n| self.tools.get(&n))
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Global singleton registry instance
pub static REGISTRY: LazyLock<ToolRegistry> = LazyLock::new(ToolRegistry::new);

/// MCP tool definition structure (for `tools/list` output)
#[derive(Debug, Clone, Serialize)]
pub struct McpToolDefinition {
    pub name: String,
    pub description: String,
    #[serde(rename = "inputSchema")]
    pub input_schema: serde_json::Value,
}
