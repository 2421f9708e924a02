//! Client error types

use jobboard_core::{CoreError, SessionError};
use thiserror::Error;

/// Shown to users when no response was received
pub const GENERIC_FAILURE: &str = "An error occurred";

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network failure; no response received
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered 401
    #[error("Session expired: {0}")]
    SessionExpired(String),

    /// Server rejected the request
    #[error("Request rejected ({status}): {message}")]
    Request { status: u16, message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// The token could not be stored or cleared
    #[error("Token storage failed: {0}")]
    Storage(#[from] CoreError),

    /// The session guard stopped the call
    #[error(transparent)]
    Session(#[from] SessionError),

    /// The response arrived after the page was left
    #[error("Response discarded after navigation")]
    NavigatedAway,
}

impl ClientError {
    /// Create error from HTTP status code
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 => Self::SessionExpired(message),
            _ => Self::Request { status, message },
        }
    }

    /// HTTP status behind the error, if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::SessionExpired(_) => Some(401),
            Self::Request { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the session must be torn down
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired(_) | Self::Session(_))
    }

    /// Whether the error is part of leaving the page and needs no notice
    pub fn is_silent(&self) -> bool {
        matches!(self, Self::Session(_) | Self::NavigatedAway)
    }

    /// Text suitable for an alert
    pub fn user_message(&self) -> String {
        match self {
            Self::Request { message, .. } => message.clone(),
            Self::SessionExpired(_) | Self::Session(_) => {
                "Your session has expired. Please log in again.".to_string()
            }
            _ => GENERIC_FAILURE.to_string(),
        }
    }
}
