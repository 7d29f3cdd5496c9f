//! Tools exposed to MCP clients.

pub mod registry;
mod tool_defs;

pub use registry::{McpToolDefinition, REGISTRY, ToolName};
