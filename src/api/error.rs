//! Error handling for the foods API

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure, or a body that could not be decoded
    #[error("Reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The backend answered with a non-success status
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },
}

impl ApiError {
    pub async fn from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        ApiError::Http { status, message }
    }

    /// Status code reported by the backend, if it answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Reqwest(err) => err.status().map(|s| s.as_u16()),
            ApiError::Http { status, .. } => Some(*status),
        }
    }
}
