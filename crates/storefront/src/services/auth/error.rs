//! Authentication error types.

use thiserror::Error;

use crate::api::ApiError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] wonderland_core::EmailError),

    /// Password too weak or invalid.
    #[error("password validation failed: {0}")]
    WeakPassword(String),

    /// The Wonderland API rejected or failed the request.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Reading or writing session state failed.
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

impl AuthError {
    /// A message safe to render on login and register forms.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidEmail(e) => format!("Invalid email: {e}"),
            Self::WeakPassword(msg) => msg.clone(),
            Self::Api(e) => e.user_message(),
            Self::Session(_) => "Something went wrong. Please try again.".to_string(),
        }
    }
}
