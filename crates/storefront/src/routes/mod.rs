//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (hero + featured products)
//!
//! # Products
//! GET  /products               - Product catalog
//! GET  /products/{id}          - Product detail
//!
//! # Cart
//! GET  /cart                   - Cart page
//! POST /cart/add               - Add a product (always a new line)
//! POST /cart/remove            - Remove a line by index
//! POST /cart/clear             - Empty the cart
//! POST /checkout               - Place an order (requires auth)
//!
//! # Auth
//! GET  /auth/login             - Login page
//! POST /auth/login             - Login action
//! GET  /auth/register          - Register page
//! POST /auth/register          - Register action
//! POST /auth/logout            - Logout action
//!
//! # Account (requires auth)
//! GET  /account                - Dashboard: profile and order history
//!
//! # Suggestions (requires auth)
//! GET  /suggestions            - Suggestion form and previous submissions
//! POST /suggestions            - Submit a suggestion
//! ```

pub mod account;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod home;
pub mod suggestions;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/register", get(auth::register_page).post(auth::register))
        .route("/logout", post(auth::logout))
}

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::index))
        .route("/{id}", get(catalog::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page
        .route("/", get(home::home))
        // Product routes
        .nest("/products", product_routes())
        // Cart routes
        .nest("/cart", cart_routes())
        // Checkout
        .route("/checkout", post(cart::checkout))
        // Account dashboard
        .route("/account", get(account::index))
        // Suggestions
        .route(
            "/suggestions",
            get(suggestions::index).post(suggestions::create),
        )
        // Auth routes
        .nest("/auth", auth_routes())
}
