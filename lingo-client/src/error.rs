use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid api url {0:?}")]
    InvalidBaseUrl(String),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response. `message` is the backend's `{"message": ..}` when it sent one.
    #[error("{message} ({status})")]
    Status { status: u16, message: String },
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Http(err) => err.status().map(|status| status.as_u16()),
            ApiError::InvalidBaseUrl(_) => None,
        }
    }
}
