//! Product catalog route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::api::{ApiError, Product};
use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::OptionalAuth;
use crate::models::CurrentUser;
use crate::state::AppState;

use wonderland_core::ProductId;

/// Query parameters for the catalog page.
#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    /// Filter to one category when present.
    pub category: Option<String>,
    pub error: Option<String>,
}

/// Catalog page template.
#[derive(Template, WebTemplate)]
#[template(path = "catalog/index.html")]
pub struct CatalogTemplate {
    pub user: Option<CurrentUser>,
    pub cart_count: usize,
    pub products: Vec<Product>,
    pub categories: Vec<String>,
    pub selected_category: Option<String>,
    pub error: Option<String>,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "catalog/show.html")]
pub struct ProductTemplate {
    pub user: Option<CurrentUser>,
    pub cart_count: usize,
    pub product: Product,
}

/// Display the product catalog, optionally filtered by category.
#[instrument(skip(state, session, user))]
pub async fn index(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    session: Session,
    Query(query): Query<CatalogQuery>,
) -> Result<impl IntoResponse> {
    let all_products = super::home::fetch_catalog(&state).await?;

    let mut categories: Vec<String> = all_products.iter().map(|p| p.category.clone()).collect();
    categories.sort();
    categories.dedup();

    let products = match &query.category {
        Some(category) => all_products
            .into_iter()
            .filter(|p| &p.category == category)
            .collect(),
        None => all_products,
    };

    let cart_count = super::cart::cart_count(&session).await;
    Ok(CatalogTemplate {
        user,
        cart_count,
        products,
        categories,
        selected_category: query.category,
        error: query.error,
    })
}

/// Display one product.
#[instrument(skip(state, session, user))]
pub async fn show(
    State(state): State<AppState>,
    OptionalAuth(user): OptionalAuth,
    session: Session,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let product_id = ProductId::from(id);
    let product = state
        .api()
        .product(&product_id)
        .await
        .map_err(|e| match e {
            ApiError::Status { status: 404, .. } => {
                AppError::NotFound(format!("product {product_id}"))
            }
            other => AppError::Api(other),
        })?;

    let cart_count = super::cart::cart_count(&session).await;
    Ok(ProductTemplate {
        user,
        cart_count,
        product,
    })
}
