//! Configuration read once at startup.

use serde::Deserialize;

use crate::recherche_entreprises::{DEFAULT_BASE_URL, FilterPresence};

/// Service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub transport: Transport,

    #[serde(default = "default_server")]
    pub server: ServerConfig,

    #[serde(default = "default_mcp")]
    pub mcp: McpConfig,

    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub search: SearchConfig,
}

/// Which transport carries MCP messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    /// Newline-delimited JSON-RPC over stdin/stdout
    #[default]
    Stdio,
    /// JSON-RPC over HTTP POST
    Http,
}

/// HTTP server configuration (http transport only)
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct McpConfig {
    #[serde(default = "default_mcp_path")]
    pub path: String,
}

/// Company registry API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL for the registry API
    #[serde(default = "default_upstream_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_upstream_timeout")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_upstream_url(),
            timeout_secs: default_upstream_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchConfig {
    /// Whether `false`/empty filters are dropped (truthy) or sent (explicit)
    #[serde(default)]
    pub filter_presence: FilterPresence,
}

// ==================== Default Value Functions ====================

pub(crate) fn default_server() -> ServerConfig {
    ServerConfig {
        host: default_host(),
        port: default_port(),
    }
}

pub(crate) fn default_host() -> String {
    "127.0.0.1".to_string()
}

pub(crate) fn default_port() -> u16 {
    8080
}

pub(crate) fn default_mcp() -> McpConfig {
    McpConfig {
        path: default_mcp_path(),
    }
}

pub(crate) fn default_mcp_path() -> String {
    "/mcp".to_string()
}

pub(crate) fn default_upstream_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

pub(crate) fn default_upstream_timeout() -> u64 {
    30
}

pub(crate) fn default_user_agent() -> String {
    format!("recherche-entreprises-mcp/{}", env!("CARGO_PKG_VERSION"))
}
