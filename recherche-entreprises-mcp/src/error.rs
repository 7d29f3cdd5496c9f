use thiserror::Error;

use crate::recherche_entreprises::RechercheEntreprisesError;

/// Main service error type
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Outil inconnu: {name}")]
    UnknownTool { name: String },

    #[error("Invalid arguments: {message}")]
    InvalidArguments { message: String },

    #[error("{0}")]
    Upstream(#[from] RechercheEntreprisesError),

    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl ServiceError {
    /// Stable machine-readable code, used in logs
    pub fn error_code(&self) -> &'static str {
        match self {
            ServiceError::UnknownTool { .. } => "unknown_tool",
            ServiceError::InvalidArguments { .. } => "invalid_arguments",
            ServiceError::Upstream(RechercheEntreprisesError::Request(_)) => "upstream_request",
            ServiceError::Upstream(RechercheEntreprisesError::ApiError { .. }) => "upstream_status",
            ServiceError::Upstream(RechercheEntreprisesError::InvalidResponse(_)) => {
                "upstream_invalid_response"
            }
            ServiceError::Config { .. } => "config_error",
        }
    }
}

/// Result type alias for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
