//! Account dashboard route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::api::Order;
use crate::error::Result;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::models::CurrentUser;
use crate::state::AppState;

/// Query parameters for success display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub success: Option<String>,
}

/// Account dashboard template.
#[derive(Template, WebTemplate)]
#[template(path = "account/index.html")]
pub struct AccountTemplate {
    pub user: Option<CurrentUser>,
    pub cart_count: usize,
    pub orders: Vec<Order>,
    pub success: Option<String>,
}

/// Display the account dashboard: profile details and order history.
///
/// Orders come back from the API newest-first.
#[instrument(skip(state, session, user), fields(user_id = %user.id))]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    RequireAuth(user): RequireAuth,
    Query(query): Query<MessageQuery>,
) -> Result<impl IntoResponse> {
    let mut orders = state.api().orders(user.token()).await?;
    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let cart_count = super::cart::cart_count(&session).await;
    Ok(AccountTemplate {
        user: Some(user),
        cart_count,
        orders,
        success: query.success,
    })
}
