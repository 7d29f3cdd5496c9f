//! Service configuration.
//!
//! Values come from an optional `config.{toml,yaml,json}` file in the working
//! directory, overridden by `ENTREPRISES__*` environment variables.

mod loader;
mod static_config;

pub use loader::load_config;
pub use static_config::{
    McpConfig, SearchConfig, ServerConfig, ServiceConfig, Transport, UpstreamConfig,
};
