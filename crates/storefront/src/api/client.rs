//! Wonderland API client implementation.
//!
//! All calls go to `{base_url}/api/...`. Requests that act on behalf of a
//! user carry their bearer token in the `Authorization` header; nothing is
//! cached or retried here - failed calls surface to the caller, which decides
//! whether to show a message or degrade quietly.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::instrument;

use super::ApiError;
use super::types::{
    CreateOrderRequest, CreateSuggestionRequest, ErrorBody, HealthStatus, LoginRequest,
    LoginResponse, Order, OrderItem, Product, RegisterRequest, Suggestion, UserProfile,
};
use wonderland_core::ProductId;

/// Fallback message when an error response carries no `detail` body.
const GENERIC_ERROR: &str = "The Wonderland API returned an unexpected error";

/// Client for the Wonderland API.
///
/// Cheaply cloneable; the underlying `reqwest::Client` pools connections.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client for the given base URL (no trailing slash).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(ApiClientInner {
                client: reqwest::Client::new(),
                base_url: base_url.into(),
            }),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api{path}", self.inner.base_url)
    }

    /// Execute a request and decode the JSON response.
    ///
    /// Non-2xx responses are turned into [`ApiError::Status`] with the
    /// message taken from the body's `detail` field when present.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map_or_else(|_| GENERIC_ERROR.to_string(), |e| e.detail);
            tracing::warn!(
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "Wonderland API returned non-success status"
            );
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %body.chars().take(500).collect::<String>(),
                    "Failed to parse Wonderland API response"
                );
                Err(ApiError::Parse(e))
            }
        }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        let mut request = self.inner.client.get(self.url(path));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        self.execute(request).await
    }

    async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&B>,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        let mut request = self.inner.client.post(self.url(path));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        self.execute(request).await
    }

    // =========================================================================
    // Auth
    // =========================================================================

    /// Exchange credentials for an access token and profile.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] with the API's rejection message for bad
    /// credentials, or a transport error if the API is unreachable.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        self.post("/auth/login", Some(&LoginRequest { email, password }), None)
            .await
    }

    /// Create a new account. Does NOT log the user in.
    ///
    /// # Errors
    ///
    /// Returns an error if the email is already registered or the request fails.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: &RegisterRequest) -> Result<UserProfile, ApiError> {
        self.post("/auth/register", Some(request), None).await
    }

    /// Resolve the profile behind a bearer token.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is invalid, expired, or the request fails.
    #[instrument(skip_all)]
    pub async fn me(&self, token: &str) -> Result<UserProfile, ApiError> {
        self.get("/auth/me", Some(token)).await
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Trigger the idempotent sample-data seed.
    ///
    /// The API no-ops when products already exist, so this is safe to call
    /// before every catalog fetch.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn init_data(&self) -> Result<(), ApiError> {
        let _: serde_json::Value = self.post::<(), _>("/init-data", None, None).await?;
        Ok(())
    }

    /// Fetch the full product catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn products(&self) -> Result<Vec<Product>, ApiError> {
        self.get("/products", None).await
    }

    /// Fetch a single product by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the product does not exist or the request fails.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn product(&self, product_id: &ProductId) -> Result<Product, ApiError> {
        self.get(&format!("/products/{product_id}"), None).await
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Place an order for the authenticated user.
    ///
    /// The API computes the total from current product prices. No idempotency
    /// key is attached; callers submitting twice create two orders.
    ///
    /// # Errors
    ///
    /// Returns an error if any product is unknown, the token is invalid, or
    /// the request fails.
    #[instrument(skip(self, token), fields(lines = items.len()))]
    pub async fn create_order(
        &self,
        token: &str,
        items: Vec<OrderItem>,
    ) -> Result<Order, ApiError> {
        self.post("/orders", Some(&CreateOrderRequest { items }), Some(token))
            .await
    }

    /// Fetch the authenticated user's order history.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is invalid or the request fails.
    #[instrument(skip_all)]
    pub async fn orders(&self, token: &str) -> Result<Vec<Order>, ApiError> {
        self.get("/orders", Some(token)).await
    }

    // =========================================================================
    // Suggestions
    // =========================================================================

    /// Submit a custom-design suggestion for the authenticated user.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is invalid or the request fails.
    #[instrument(skip(self, token, request))]
    pub async fn create_suggestion(
        &self,
        token: &str,
        request: &CreateSuggestionRequest,
    ) -> Result<Suggestion, ApiError> {
        self.post("/suggestions", Some(request), Some(token)).await
    }

    /// Fetch the authenticated user's previous suggestions.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is invalid or the request fails.
    #[instrument(skip_all)]
    pub async fn suggestions(&self, token: &str) -> Result<Vec<Suggestion>, ApiError> {
        self.get("/suggestions", Some(token)).await
    }

    // =========================================================================
    // Service
    // =========================================================================

    /// Check the API's health endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the API is unreachable or unhealthy.
    #[instrument(skip(self))]
    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.get("/health", None).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn user_body() -> serde_json::Value {
        json!({
            "id": "u1",
            "email": "alice@wonderland.com",
            "first_name": "Alice",
            "last_name": "Liddell",
            "created_at": "2025-01-01T00:00:00Z"
        })
    }

    #[tokio::test]
    async fn login_success_returns_token_and_profile() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .and(body_json(json!({
                "email": "alice@wonderland.com",
                "password": "curiouser"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "tok-123",
                "token_type": "bearer",
                "user": user_body()
            })))
            .mount(&server)
            .await;

        let api = ApiClient::new(server.uri());
        let response = api.login("alice@wonderland.com", "curiouser").await.unwrap();
        assert_eq!(response.access_token, "tok-123");
        assert_eq!(response.user.first_name, "Alice");
    }

    #[tokio::test]
    async fn login_failure_extracts_detail_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/auth/login"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(json!({"detail": "Invalid email or password"})),
            )
            .mount(&server)
            .await;

        let api = ApiClient::new(server.uri());
        let err = api.login("alice@wonderland.com", "wrong").await.unwrap_err();
        match err {
            ApiError::Status { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid email or password");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn error_without_detail_falls_back_to_generic_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/products"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let api = ApiClient::new(server.uri());
        let err = api.products().await.unwrap_err();
        match err {
            ApiError::Status { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, GENERIC_ERROR);
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn me_sends_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/auth/me"))
            .and(header("Authorization", "Bearer tok-123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(user_body()))
            .mount(&server)
            .await;

        let api = ApiClient::new(server.uri());
        let profile = api.me("tok-123").await.unwrap();
        assert_eq!(profile.email.as_str(), "alice@wonderland.com");
    }

    #[tokio::test]
    async fn products_deserializes_catalog() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/products"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "id": "p1",
                    "name": "Floral Dream Overlay",
                    "description": "Cottage core overlay",
                    "price": 15.0,
                    "image_url": "https://img.example/p1.svg",
                    "category": "Cottage Core",
                    "complexity": "Standard"
                }
            ])))
            .mount(&server)
            .await;

        let api = ApiClient::new(server.uri());
        let products = api.products().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products.first().unwrap().name, "Floral Dream Overlay");
    }

    #[tokio::test]
    async fn create_order_posts_line_items() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/orders"))
            .and(header("Authorization", "Bearer tok-123"))
            .and(body_json(json!({
                "items": [
                    {"product_id": "p1", "quantity": 1},
                    {"product_id": "p1", "quantity": 1}
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "o1",
                "user_id": "u1",
                "items": [
                    {"product_id": "p1", "quantity": 1},
                    {"product_id": "p1", "quantity": 1}
                ],
                "total_amount": 30.0,
                "status": "pending",
                "created_at": "2025-01-02T00:00:00Z"
            })))
            .mount(&server)
            .await;

        let api = ApiClient::new(server.uri());
        let items = vec![
            OrderItem {
                product_id: ProductId::new("p1"),
                quantity: 1,
            },
            OrderItem {
                product_id: ProductId::new("p1"),
                quantity: 1,
            },
        ];
        let order = api.create_order("tok-123", items).await.unwrap();
        assert_eq!(order.items.len(), 2);
        assert_eq!(order.total_amount.to_string(), "30");
    }

    #[tokio::test]
    async fn init_data_accepts_message_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/init-data"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"message": "Sample data already exists"})),
            )
            .mount(&server)
            .await;

        let api = ApiClient::new(server.uri());
        api.init_data().await.unwrap();
    }
}
