//! Session-related types.
//!
//! Types stored in the session for authentication state.

use serde::{Deserialize, Serialize};

use wonderland_core::{Email, UserId};

/// Session-stored user identity.
///
/// Holds the profile shown in the header plus the bearer token used for
/// authenticated API calls. The token never appears in `Debug` output.
#[derive(Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// User's API-side ID.
    pub id: UserId,
    /// User's email address.
    pub email: Email,
    /// Display first name.
    pub first_name: String,
    /// Display last name.
    pub last_name: String,
    /// Bearer token for the Wonderland API.
    access_token: String,
}

impl CurrentUser {
    /// Build a session identity from a profile and its access token.
    #[must_use]
    pub fn new(
        id: UserId,
        email: Email,
        first_name: String,
        last_name: String,
        access_token: String,
    ) -> Self {
        Self {
            id,
            email,
            first_name,
            last_name,
            access_token,
        }
    }

    /// The bearer token for API calls made on this user's behalf.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.access_token
    }
}

impl std::fmt::Debug for CurrentUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurrentUser")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

/// Session keys for storefront data.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";

    /// Key for storing the shopping cart.
    pub const CART: &str = "cart";
}
