//! End-to-end tests for the storefront shopping flow.
//!
//! These tests require:
//! - A running Wonderland API (`WONDERLAND_API_URL` for the storefront)
//! - The storefront running (cargo run -p wonderland-storefront)
//!
//! Run with: cargo test -p wonderland-integration-tests -- --ignored

use reqwest::{Client, StatusCode};

use wonderland_integration_tests::{browser_client, storefront_base_url, unique_email};

const PASSWORD: &str = "curiouser-and-curiouser";

/// Pull the first `product_id` hidden-input value out of catalog HTML.
fn extract_first_product_id(html: &str) -> Option<String> {
    let marker = "name=\"product_id\" value=\"";
    let start = html.find(marker)? + marker.len();
    let end = html[start..].find('"')? + start;
    Some(html[start..end].to_string())
}

/// Register an account and log in, leaving the session cookie on `client`.
async fn register_and_login(client: &Client, base_url: &str, email: &str) {
    let resp = client
        .post(format!("{base_url}/auth/register"))
        .form(&[
            ("email", email),
            ("password", PASSWORD),
            ("password_confirm", PASSWORD),
            ("first_name", "Alice"),
            ("last_name", "Liddell"),
        ])
        .send()
        .await
        .expect("Failed to register");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .post(format!("{base_url}/auth/login"))
        .form(&[("email", email), ("password", PASSWORD)])
        .send()
        .await
        .expect("Failed to log in");
    assert_eq!(resp.status(), StatusCode::OK);
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
#[ignore = "Requires running storefront and Wonderland API"]
async fn test_health_endpoints() {
    let client = browser_client();
    let base_url = storefront_base_url();

    let resp = client
        .get(format!("{base_url}/health"))
        .send()
        .await
        .expect("Failed to get /health");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .get(format!("{base_url}/health/ready"))
        .send()
        .await
        .expect("Failed to get /health/ready");
    assert_eq!(resp.status(), StatusCode::OK);
}

// ============================================================================
// Auth
// ============================================================================

#[tokio::test]
#[ignore = "Requires running storefront and Wonderland API"]
async fn test_register_does_not_log_in() {
    let client = browser_client();
    let base_url = storefront_base_url();
    let email = unique_email();

    let resp = client
        .post(format!("{base_url}/auth/register"))
        .form(&[
            ("email", email.as_str()),
            ("password", PASSWORD),
            ("password_confirm", PASSWORD),
            ("first_name", "Alice"),
            ("last_name", "Liddell"),
        ])
        .send()
        .await
        .expect("Failed to register");

    // Lands on the login form with a success flash
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("Please log in"));

    // The dashboard is still gated
    let resp = client
        .get(format!("{base_url}/account"))
        .send()
        .await
        .expect("Failed to get /account");
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("Log in"));
}

#[tokio::test]
#[ignore = "Requires running storefront and Wonderland API"]
async fn test_account_requires_login() {
    let client = browser_client();
    let base_url = storefront_base_url();

    let resp = client
        .get(format!("{base_url}/account"))
        .send()
        .await
        .expect("Failed to get /account");

    // Redirect chain ends on the login page
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("Please log in to continue"));
}

#[tokio::test]
#[ignore = "Requires running storefront and Wonderland API"]
async fn test_login_with_wrong_password_shows_api_message() {
    let client = browser_client();
    let base_url = storefront_base_url();
    let email = unique_email();
    register_and_login(&client, &base_url, &email).await;

    let fresh = browser_client();
    let resp = fresh
        .post(format!("{base_url}/auth/login"))
        .form(&[("email", email.as_str()), ("password", "wrong-password")])
        .send()
        .await
        .expect("Failed to log in");

    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("Invalid email or password"));
}

// ============================================================================
// Shopping Flow
// ============================================================================

#[tokio::test]
#[ignore = "Requires running storefront and Wonderland API"]
async fn test_guest_add_to_cart_prompts_login_and_leaves_cart_empty() {
    let client = browser_client();
    let base_url = storefront_base_url();

    let resp = client
        .get(format!("{base_url}/products"))
        .send()
        .await
        .expect("Failed to get catalog");
    let body = resp.text().await.expect("Failed to read response");
    let product_id = extract_first_product_id(&body).expect("Catalog has no products");

    let resp = client
        .post(format!("{base_url}/cart/add"))
        .form(&[("product_id", product_id.as_str())])
        .send()
        .await
        .expect("Failed to post add-to-cart");
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("Please log in to continue"));

    let resp = client
        .get(format!("{base_url}/cart"))
        .send()
        .await
        .expect("Failed to get cart");
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("Your cart is empty"));
}

#[tokio::test]
#[ignore = "Requires running storefront and Wonderland API"]
async fn test_full_shopping_flow_with_duplicate_lines() {
    let client = browser_client();
    let base_url = storefront_base_url();
    let email = unique_email();
    register_and_login(&client, &base_url, &email).await;

    // Browse the catalog and grab a product
    let resp = client
        .get(format!("{base_url}/products"))
        .send()
        .await
        .expect("Failed to get catalog");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");
    let product_id = extract_first_product_id(&body).expect("Catalog has no products");

    // Add the same product twice: two separate cart lines
    for _ in 0..2 {
        let resp = client
            .post(format!("{base_url}/cart/add"))
            .form(&[("product_id", product_id.as_str())])
            .send()
            .await
            .expect("Failed to add to cart");
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let resp = client
        .get(format!("{base_url}/cart"))
        .send()
        .await
        .expect("Failed to get cart");
    let body = resp.text().await.expect("Failed to read response");
    assert_eq!(body.matches("name=\"index\"").count(), 2);

    // Checkout lands on the dashboard with the order listed
    let resp = client
        .post(format!("{base_url}/checkout"))
        .send()
        .await
        .expect("Failed to checkout");
    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("Order placed"));
    assert!(body.contains("pending"));

    // Cart is empty again
    let resp = client
        .get(format!("{base_url}/cart"))
        .send()
        .await
        .expect("Failed to get cart");
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("Your cart is empty"));
}

#[tokio::test]
#[ignore = "Requires running storefront and Wonderland API"]
async fn test_checkout_with_empty_cart_is_rejected_locally() {
    let client = browser_client();
    let base_url = storefront_base_url();
    let email = unique_email();
    register_and_login(&client, &base_url, &email).await;

    let resp = client
        .post(format!("{base_url}/checkout"))
        .send()
        .await
        .expect("Failed to checkout");
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("Your cart is empty"));

    // No order was created
    let resp = client
        .get(format!("{base_url}/account"))
        .send()
        .await
        .expect("Failed to get /account");
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("No orders yet"));
}

// ============================================================================
// Suggestions
// ============================================================================

#[tokio::test]
#[ignore = "Requires running storefront and Wonderland API"]
async fn test_suggestion_submission_round_trip() {
    let client = browser_client();
    let base_url = storefront_base_url();
    let email = unique_email();
    register_and_login(&client, &base_url, &email).await;

    let idea = format!("A tea-party overlay {}", uuid::Uuid::new_v4().simple());
    let resp = client
        .post(format!("{base_url}/suggestions"))
        .form(&[
            ("suggestion_text", idea.as_str()),
            ("category", "Tea Party"),
            ("budget_range", ""),
        ])
        .send()
        .await
        .expect("Failed to submit suggestion");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .get(format!("{base_url}/suggestions"))
        .send()
        .await
        .expect("Failed to get suggestions");
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains(&idea));
    assert!(body.contains("Tea Party"));
}
