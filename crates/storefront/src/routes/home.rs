//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tower_sessions::Session;
use tracing::instrument;

use crate::api::Product;
use crate::filters;
use crate::middleware::OptionalAuth;
use crate::models::CurrentUser;
use crate::state::AppState;

/// Number of products featured on the home page.
const FEATURED_COUNT: usize = 3;

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub user: Option<CurrentUser>,
    pub cart_count: usize,
    pub featured: Vec<Product>,
}

/// Display the home page with a few featured overlays.
///
/// A failed catalog fetch degrades to an empty featured section rather than
/// an error page; the hero and navigation still render.
#[instrument(skip(state, session, user))]
pub async fn home(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    session: Session,
) -> impl IntoResponse {
    let featured = match fetch_catalog(&state).await {
        Ok(mut products) => {
            products.truncate(FEATURED_COUNT);
            products
        }
        Err(e) => {
            tracing::warn!("Failed to fetch featured products: {e}");
            Vec::new()
        }
    };

    let cart_count = super::cart::cart_count(&session).await;
    HomeTemplate {
        user,
        cart_count,
        featured,
    }
}

/// Seed sample data, then fetch the catalog.
///
/// The seed call is idempotent on the API side and guarantees a first visit
/// to a fresh backend still sees products.
pub(crate) async fn fetch_catalog(
    state: &AppState,
) -> Result<Vec<Product>, crate::api::ApiError> {
    state.api().init_data().await?;
    state.api().products().await
}
