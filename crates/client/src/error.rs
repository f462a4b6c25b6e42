//! Our custom error type.

use thiserror::Error;
use vocab_api::{response::DecodeError, UNKNOWN_FAILURE};
use vocab_core::ValidationError;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The input was rejected before anything was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The store could not be reached.
    #[error("Request failed: {0}")]
    Transport(String),
    /// The store answered with a non-2xx status.
    #[error("Request failed: HTTP {status} {}", .message.as_deref().unwrap_or(UNKNOWN_FAILURE))]
    Status { status: u16, message: Option<String> },
    /// The response body was not what we expected.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ClientError {
    /// The text of the notification shown to the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(err) => err.to_string(),
            Self::Status {
                message: Some(message),
                ..
            } => message.clone(),
            Self::Status { message: None, .. } => UNKNOWN_FAILURE.to_string(),
            Self::Transport(_) | Self::Decode(_) => self.to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_decode() {
            Self::Decode(value.to_string())
        } else {
            Self::Transport(value.to_string())
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value.to_string())
    }
}

impl From<DecodeError> for ClientError {
    fn from(value: DecodeError) -> Self {
        Self::Decode(value.to_string())
    }
}
