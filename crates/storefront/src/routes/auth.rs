//! Authentication route handlers.
//!
//! Handles login, registration, and logout against the Wonderland API's
//! token endpoints. Errors come back as redirect query parameters so the
//! forms can re-render with a message.

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

use crate::error::{clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::middleware::OptionalAuth;
use crate::models::CurrentUser;
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Registration form data.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub first_name: String,
    pub last_name: String,
}

// =============================================================================
// Query Types
// =============================================================================

/// Query parameters for error/success display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
    pub success: Option<String>,
    pub message: Option<String>,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub user: Option<CurrentUser>,
    pub cart_count: usize,
    pub error: Option<String>,
    pub success: Option<String>,
    pub message: Option<String>,
}

/// Register page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/register.html")]
pub struct RegisterTemplate {
    pub user: Option<CurrentUser>,
    pub cart_count: usize,
    pub error: Option<String>,
}

// =============================================================================
// Login Routes
// =============================================================================

/// Display the login page.
pub async fn login_page(
    OptionalAuth(user): OptionalAuth,
    session: Session,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    let cart_count = super::cart::cart_count(&session).await;
    LoginTemplate {
        user,
        cart_count,
        error: query.error,
        success: query.success,
        message: query.message,
    }
}

/// Handle login form submission.
///
/// On success the identity lands in the session and the user continues to
/// the account dashboard.
#[instrument(skip(state, session, form))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Response {
    match state.auth().login(&session, &form.email, &form.password).await {
        Ok(user) => {
            set_sentry_user(&user.id, Some(user.email.as_str()));
            Redirect::to("/account").into_response()
        }
        Err(e) => {
            tracing::warn!("Login failed: {e}");
            let redirect_url = format!(
                "/auth/login?error={}",
                urlencoding::encode(&e.user_message())
            );
            Redirect::to(&redirect_url).into_response()
        }
    }
}

// =============================================================================
// Registration Routes
// =============================================================================

/// Display the registration page.
pub async fn register_page(
    OptionalAuth(user): OptionalAuth,
    session: Session,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    let cart_count = super::cart::cart_count(&session).await;
    RegisterTemplate {
        user,
        cart_count,
        error: query.error,
    }
}

/// Handle registration form submission.
///
/// A new account is created but NOT logged in; the user lands on the login
/// form to authenticate with the credentials they just chose.
#[instrument(skip(state, form))]
pub async fn register(State(state): State<AppState>, Form(form): Form<RegisterForm>) -> Response {
    // Validate passwords match
    if form.password != form.password_confirm {
        return Redirect::to("/auth/register?error=Passwords+do+not+match").into_response();
    }

    match state
        .auth()
        .register(&form.email, &form.password, &form.first_name, &form.last_name)
        .await
    {
        Ok(profile) => {
            let redirect_url = format!(
                "/auth/login?success={}",
                urlencoding::encode(&format!(
                    "Account created for {}. Please log in.",
                    profile.email
                ))
            );
            Redirect::to(&redirect_url).into_response()
        }
        Err(e) => {
            tracing::warn!("Registration failed: {e}");
            let redirect_url = format!(
                "/auth/register?error={}",
                urlencoding::encode(&e.user_message())
            );
            Redirect::to(&redirect_url).into_response()
        }
    }
}

// =============================================================================
// Logout Route
// =============================================================================

/// Handle logout.
///
/// Purely local: the session is destroyed, the API is not told. The cart
/// goes with the session, matching a fresh visit.
#[instrument(skip(state, session))]
pub async fn logout(State(state): State<AppState>, session: Session) -> Response {
    if let Err(e) = state.auth().logout(&session).await {
        tracing::error!("Failed to flush session: {e}");
    }
    clear_sentry_user();

    Redirect::to("/").into_response()
}
