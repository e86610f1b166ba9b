#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

impl DashboardError {
    /// The single human-readable message shown when a load fails.
    pub fn message(&self) -> String {
        match self {
            DashboardError::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// HTTP status of a normalized backend failure, if there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            DashboardError::Api { status, .. } => Some(*status),
            DashboardError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;
