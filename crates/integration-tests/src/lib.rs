//! Integration tests for Wonderland Stores.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the Wonderland API, then the storefront:
//! cargo run -p wonderland-storefront
//!
//! # Run integration tests
//! cargo test -p wonderland-integration-tests -- --ignored
//! ```
//!
//! Tests drive the storefront over HTTP with a cookie-holding client, the
//! same way a browser does. They live in `tests/` and are `#[ignore]`d so a
//! plain `cargo test` stays self-contained.

/// Base URL for the storefront (configurable via environment).
#[must_use]
pub fn storefront_base_url() -> String {
    std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// Create an HTTP client that keeps session cookies like a browser.
///
/// # Panics
///
/// Panics if the client cannot be constructed.
#[must_use]
pub fn browser_client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()
        .expect("Failed to create HTTP client")
}

/// A unique email for test isolation; the API rejects duplicate accounts.
#[must_use]
pub fn unique_email() -> String {
    format!("it-{}@wonderland.test", uuid::Uuid::new_v4().simple())
}
