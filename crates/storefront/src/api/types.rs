//! Wire types for the Wonderland API.
//!
//! These mirror the JSON the API speaks. Unknown fields in responses are
//! ignored, so additive backend changes do not break the storefront.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use wonderland_core::{Complexity, Email, OrderId, OrderStatus, ProductId, SuggestionId, UserId};

// =============================================================================
// Auth
// =============================================================================

/// A user profile as returned by `/auth/me`, `/auth/login`, and `/auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    pub email: Email,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Response body for `POST /auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: UserProfile,
}

/// Request body for `POST /auth/register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

// =============================================================================
// Catalog
// =============================================================================

/// A stream-overlay product (read-only, server-owned).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image_url: String,
    pub category: String,
    #[serde(default)]
    pub complexity: Complexity,
}

// =============================================================================
// Orders
// =============================================================================

/// One line of an order: a product reference and a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// An order (read-only, server-owned).
#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub items: Vec<OrderItem>,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Request body for `POST /orders`.
#[derive(Debug, Serialize)]
pub struct CreateOrderRequest {
    pub items: Vec<OrderItem>,
}

// =============================================================================
// Suggestions
// =============================================================================

/// A custom-design suggestion submitted by an authenticated user.
#[derive(Debug, Clone, Deserialize)]
pub struct Suggestion {
    pub id: SuggestionId,
    pub suggestion_text: String,
    pub category: Option<String>,
    pub budget_range: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request body for `POST /suggestions`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateSuggestionRequest {
    pub suggestion_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_range: Option<String>,
}

// =============================================================================
// Service
// =============================================================================

/// Response body for `GET /health`.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Error body the API attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub detail: String,
}
