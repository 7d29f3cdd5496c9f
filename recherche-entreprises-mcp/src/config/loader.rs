//! Configuration loading from files and environment variables.

use config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};

use crate::error::{ServiceError, ServiceResult};

use super::static_config::ServiceConfig;

/// Prefix for environment overrides, e.g. `ENTREPRISES__UPSTREAM__BASE_URL`
const ENV_PREFIX: &str = "ENTREPRISES";

fn sources() -> ConfigBuilder<DefaultState> {
    Config::builder()
        .add_source(File::with_name("config").required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
}

/// Load configuration from `config.*` and `ENTREPRISES__*` env vars
pub fn load_config() -> ServiceResult<ServiceConfig> {
    build_config(sources())
}

pub(crate) fn build_config(builder: ConfigBuilder<DefaultState>) -> ServiceResult<ServiceConfig> {
    builder
        .build()
        .map_err(|e| ServiceError::Config {
            message: format!("Failed to build config: {}", e),
        })?
        .try_deserialize()
        .map_err(|e| ServiceError::Config {
            message: format!("Failed to deserialize config: {}", e),
        })
}
