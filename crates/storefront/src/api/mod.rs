//! Wonderland API client.
//!
//! # Architecture
//!
//! - Plain JSON-over-HTTP via `reqwest` - the Wonderland API is the source
//!   of truth, NO local persistence, direct API calls
//! - Bearer-token authorization for the endpoints that require a logged-in
//!   user; the token is the one the session stores per user
//! - Error responses carry a FastAPI-style `{"detail": "..."}` body; the
//!   client extracts that message so routes can show it to people verbatim
//!
//! # Example
//!
//! ```rust,ignore
//! use wonderland_storefront::api::ApiClient;
//!
//! let api = ApiClient::new(&config.api_base_url);
//!
//! // Browse the catalog
//! api.init_data().await?;
//! let products = api.products().await?;
//!
//! // Place an order for the logged-in user
//! let order = api.create_order(token, vec![OrderItem {
//!     product_id: products[0].id.clone(),
//!     quantity: 1,
//! }]).await?;
//! ```

mod client;
pub mod types;

pub use client::ApiClient;
pub use types::*;

use thiserror::Error;

/// Errors that can occur when talking to the Wonderland API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport failed (connection refused, DNS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the error body's `detail` field, or a
        /// generic fallback when the body carried none.
        message: String,
    },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ApiError {
    /// A human-readable message suitable for showing to the user.
    ///
    /// Transport and parse failures are collapsed into one generic message;
    /// status errors surface whatever the API said.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { message, .. } => message.clone(),
            Self::Http(_) | Self::Parse(_) => {
                "Unable to reach Wonderland Stores right now. Please try again.".to_string()
            }
        }
    }

    /// Whether the API rejected the request as a server-side failure (5xx).
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        matches!(self, Self::Status { status, .. } if *status >= 500)
    }
}
