//! Custom-design suggestion route handlers.
//!
//! Logged-in users can ask for overlays that are not in the catalog. The
//! form posts to the API and the page lists what the user already sent.

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

use crate::api::{CreateSuggestionRequest, Suggestion};
use crate::error::Result;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::models::CurrentUser;
use crate::state::AppState;

/// Query parameters for error/success display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Suggestion form data.
#[derive(Debug, Deserialize)]
pub struct SuggestionForm {
    pub suggestion_text: String,
    pub category: Option<String>,
    pub budget_range: Option<String>,
}

/// Suggestions page template.
#[derive(Template, WebTemplate)]
#[template(path = "suggestions/index.html")]
pub struct SuggestionsTemplate {
    pub user: Option<CurrentUser>,
    pub cart_count: usize,
    pub suggestions: Vec<Suggestion>,
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Display the suggestion form and the user's previous submissions.
#[instrument(skip(state, session, user), fields(user_id = %user.id))]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    RequireAuth(user): RequireAuth,
    Query(query): Query<MessageQuery>,
) -> Result<impl IntoResponse> {
    let mut suggestions = state.api().suggestions(user.token()).await?;
    suggestions.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let cart_count = super::cart::cart_count(&session).await;
    Ok(SuggestionsTemplate {
        user: Some(user),
        cart_count,
        suggestions,
        error: query.error,
        success: query.success,
    })
}

/// Handle suggestion form submission.
#[instrument(skip(state, user, form), fields(user_id = %user.id))]
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Form(form): Form<SuggestionForm>,
) -> Response {
    let text = form.suggestion_text.trim();
    if text.is_empty() {
        return Redirect::to("/suggestions?error=Please+describe+your+idea").into_response();
    }

    let request = CreateSuggestionRequest {
        suggestion_text: text.to_string(),
        category: form.category.filter(|c| !c.trim().is_empty()),
        budget_range: form.budget_range.filter(|b| !b.trim().is_empty()),
    };

    match state.api().create_suggestion(user.token(), &request).await {
        Ok(suggestion) => {
            tracing::info!(suggestion_id = %suggestion.id, "suggestion submitted");
            Redirect::to("/suggestions?success=Thanks!+We+got+your+idea.").into_response()
        }
        Err(e) => {
            tracing::warn!("Suggestion submission failed: {e}");
            let redirect_url = format!(
                "/suggestions?error={}",
                urlencoding::encode(&e.user_message())
            );
            Redirect::to(&redirect_url).into_response()
        }
    }
}
