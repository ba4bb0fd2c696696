//! Client error model.

use thiserror::Error;

/// Result type for backend calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Error surfaced by a backend wrapper.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    ///
    /// `code`/`message` come from the backend's error envelope
    /// (`{"error": code, "message": ...}`) when the body carries one.
    #[error("api error ({status}): {code}: {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// A field the contract requires was absent from the response.
    ///
    /// Missing required fields are a caller-contract violation on the
    /// backend's side; they are reported, never guessed at.
    #[error("response missing required field '{0}'")]
    MissingField(&'static str),
}

impl ApiError {
    /// HTTP status, when the backend produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }
}
