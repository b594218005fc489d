//! Error types for dashboard operations

use thiserror::Error;

/// Dashboard specific errors
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The analysis API answered with a non-success status
    #[error("API error ({status}): {detail}")]
    Api {
        status: u16,
        detail: String,
    },

    /// Network or HTTP error
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed API base or page URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Panel or page rendering failed
    #[error("Render error: {0}")]
    Render(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type alias for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;

impl From<minijinja::Error> for DashboardError {
    fn from(err: minijinja::Error) -> Self {
        DashboardError::Render(err.to_string())
    }
}
