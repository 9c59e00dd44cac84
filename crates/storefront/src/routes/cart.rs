//! Cart and checkout route handlers.
//!
//! The cart lives in the session. Every mutation is a plain form POST that
//! redirects back, so the cart page always renders from the session's
//! current state.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::add_breadcrumb;
use crate::filters;
use crate::middleware::{OptionalAuth, RequireAuth};
use crate::models::session::keys;
use crate::models::{Cart, CurrentUser};
use crate::state::AppState;

use wonderland_core::ProductId;

// =============================================================================
// Session Helpers
// =============================================================================

/// Load the cart from the session, defaulting to empty.
pub(crate) async fn load_cart(session: &Session) -> Cart {
    session
        .get::<Cart>(keys::CART)
        .await
        .ok()
        .flatten()
        .unwrap_or_default()
}

/// Persist the cart to the session.
async fn save_cart(session: &Session, cart: &Cart) -> Result<(), tower_sessions::session::Error> {
    session.insert(keys::CART, cart).await
}

/// Number of cart lines, for the header badge.
pub(crate) async fn cart_count(session: &Session) -> usize {
    load_cart(session).await.len()
}

// =============================================================================
// Form Types
// =============================================================================

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: String,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub index: usize,
}

/// Query parameters for error/success display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
    pub success: Option<String>,
}

// =============================================================================
// Templates
// =============================================================================

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub user: Option<CurrentUser>,
    pub cart_count: usize,
    pub cart: Cart,
    pub error: Option<String>,
    pub success: Option<String>,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the cart page.
#[instrument(skip(session, user))]
pub async fn show(
    OptionalAuth(user): OptionalAuth,
    session: Session,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    let cart = load_cart(&session).await;
    CartShowTemplate {
        user,
        cart_count: cart.len(),
        cart,
        error: query.error,
        success: query.success,
    }
}

/// Add a product to the cart.
///
/// Requires a logged-in user; a guest is redirected to the login form and
/// the cart is left untouched. Always appends a new line; adding the same
/// product twice gives two lines. The product is fetched from the API so
/// the cart snapshot carries a real name and price.
#[instrument(skip(state, session, user), fields(user_id = %user.id))]
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    RequireAuth(user): RequireAuth,
    Form(form): Form<AddToCartForm>,
) -> Response {
    let product_id = ProductId::from(form.product_id);

    let product = match state.api().product(&product_id).await {
        Ok(product) => product,
        Err(e) => {
            tracing::warn!("Failed to fetch product {product_id} for cart: {e}");
            let redirect_url = format!(
                "/products?error={}",
                urlencoding::encode(&e.user_message())
            );
            return Redirect::to(&redirect_url).into_response();
        }
    };

    let mut cart = load_cart(&session).await;
    cart.add(&product);
    add_breadcrumb(
        "cart",
        "Added product to cart",
        Some(&[("product_id", product.id.as_str())]),
    );

    if let Err(e) = save_cart(&session, &cart).await {
        tracing::error!("Failed to save cart to session: {e}");
        return Redirect::to("/cart?error=Something+went+wrong").into_response();
    }

    Redirect::to("/cart?success=Added+to+cart").into_response()
}

/// Remove a cart line by its position.
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<RemoveFromCartForm>) -> Response {
    let mut cart = load_cart(&session).await;
    cart.remove(form.index);

    if let Err(e) = save_cart(&session, &cart).await {
        tracing::error!("Failed to save cart to session: {e}");
    }

    Redirect::to("/cart").into_response()
}

/// Empty the cart.
#[instrument(skip(session))]
pub async fn clear(session: Session) -> Response {
    let mut cart = load_cart(&session).await;
    cart.clear();

    if let Err(e) = save_cart(&session, &cart).await {
        tracing::error!("Failed to save cart to session: {e}");
    }

    Redirect::to("/cart").into_response()
}

/// Place an order from the cart.
///
/// Requires a logged-in user with a freshly revalidated token. An empty
/// cart never reaches the API. On success the cart is cleared and the user
/// lands on their dashboard with the new order visible.
#[instrument(skip(state, session, user), fields(user_id = %user.id))]
pub async fn checkout(
    State(state): State<AppState>,
    session: Session,
    RequireAuth(user): RequireAuth,
) -> Response {
    let cart = load_cart(&session).await;
    if cart.is_empty() {
        return Redirect::to("/cart?error=Your+cart+is+empty").into_response();
    }

    add_breadcrumb("checkout", "Placing order", None);

    match state
        .api()
        .create_order(user.token(), cart.to_order_items())
        .await
    {
        Ok(order) => {
            tracing::info!(order_id = %order.id, total = %order.total_amount, "order placed");

            let mut cart = cart;
            cart.clear();
            if let Err(e) = save_cart(&session, &cart).await {
                tracing::error!("Failed to clear cart after checkout: {e}");
            }

            let redirect_url = format!(
                "/account?success={}",
                urlencoding::encode("Order placed! Thank you for shopping at Wonderland Stores.")
            );
            Redirect::to(&redirect_url).into_response()
        }
        Err(e) => {
            tracing::warn!("Checkout failed: {e}");
            let redirect_url =
                format!("/cart?error={}", urlencoding::encode(&e.user_message()));
            Redirect::to(&redirect_url).into_response()
        }
    }
}
