//! Business logic services.
//!
//! Services sit between the routes and the Wonderland API client, owning the
//! session reads and writes the routes would otherwise repeat.

pub mod auth;

pub use auth::{AuthError, AuthService};
