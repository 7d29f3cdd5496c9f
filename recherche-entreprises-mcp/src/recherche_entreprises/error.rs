//! Error types for the company registry API.

#[derive(Debug, thiserror::Error)]
pub enum RechercheEntreprisesError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid response from API: {0}")]
    InvalidResponse(#[source] serde_json::Error),
}
