//! Checkout form, validation re-render, and order confirmation.

use ecobid_integration_tests::{browser, browser_no_redirect, extract_between, spawn_site};

async fn add_rug(site: &ecobid_integration_tests::TestSite, client: &reqwest::Client) {
    client
        .post(site.url("/cart/add"))
        .form(&[("product_id", "4")])
        .send()
        .await
        .expect("add request failed");
}

/// Everything the form requires when paying on delivery.
fn delivery_order() -> Vec<(&'static str, &'static str)> {
    vec![
        ("first_name", "Priya"),
        ("last_name", "Nair"),
        ("email", "priya@example.com"),
        ("phone", "+91 98765 43210"),
        ("address", "14 Lake View Road"),
        ("city", "Kochi"),
        ("postal_code", "682001"),
        ("state", "Kerala"),
        ("payment_method", "cod"),
    ]
}

#[tokio::test]
async fn test_checkout_requires_a_cart() {
    let site = spawn_site().await;
    let client = browser_no_redirect();

    let resp = client
        .get(site.url("/checkout"))
        .send()
        .await
        .expect("checkout request failed");

    assert_eq!(resp.status(), reqwest::StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get("location").and_then(|v| v.to_str().ok()),
        Some("/cart")
    );
}

#[tokio::test]
async fn test_success_page_requires_an_order() {
    let site = spawn_site().await;
    let client = browser_no_redirect();

    let resp = client
        .get(site.url("/checkout/success"))
        .send()
        .await
        .expect("success request failed");

    assert_eq!(resp.status(), reqwest::StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get("location").and_then(|v| v.to_str().ok()),
        Some("/cart")
    );
}

#[tokio::test]
async fn test_checkout_renders_form_and_summary() {
    let site = spawn_site().await;
    let client = browser();
    add_rug(&site, &client).await;

    let body = client
        .get(site.url("/checkout"))
        .send()
        .await
        .expect("checkout request failed")
        .text()
        .await
        .expect("body");

    assert!(body.contains("Personal Information"));
    assert!(body.contains("Shipping Address"));
    assert!(body.contains("Payment Information"));
    assert!(body.contains("Order Summary"));
    assert!(body.contains("Natural Fiber Rugs"));
    assert!(body.contains("Place Order"));
}

#[tokio::test]
async fn test_invalid_submission_rerenders_with_messages_and_values() {
    let site = spawn_site().await;
    let client = browser();
    add_rug(&site, &client).await;

    let body = client
        .post(site.url("/checkout"))
        .form(&[("first_name", "Priya"), ("payment_method", "cod")])
        .send()
        .await
        .expect("checkout post failed")
        .text()
        .await
        .expect("body");

    assert!(body.contains("Last name is required"));
    assert!(body.contains("Email is required"));
    assert!(body.contains("Address is required"));
    assert!(body.contains("State is required"));
    // Entered values survive the round trip
    assert!(body.contains("value=\"Priya\""));
    assert!(!body.contains("First name is required"));
    // Delivery payment never demands card details
    assert!(!body.contains("Card number is required"));
}

#[tokio::test]
async fn test_card_payment_requires_card_fields() {
    let site = spawn_site().await;
    let client = browser();
    add_rug(&site, &client).await;

    let mut form = delivery_order();
    form.retain(|(key, _)| *key != "payment_method");
    form.push(("payment_method", "card"));

    let body = client
        .post(site.url("/checkout"))
        .form(&form)
        .send()
        .await
        .expect("checkout post failed")
        .text()
        .await
        .expect("body");

    assert!(body.contains("Card number is required"));
    assert!(body.contains("Expiry date is required"));
    assert!(body.contains("CVV is required"));
}

#[tokio::test]
async fn test_placing_an_order_confirms_and_empties_the_cart() {
    let site = spawn_site().await;
    let client = browser();
    add_rug(&site, &client).await;

    let resp = client
        .post(site.url("/checkout"))
        .form(&delivery_order())
        .send()
        .await
        .expect("checkout post failed");
    assert_eq!(resp.status(), reqwest::StatusCode::OK);

    let body = resp.text().await.expect("body");
    assert!(body.contains("Order Placed Successfully!"));
    assert!(body.contains("priya@example.com"));
    // Rug at 75 plus 25 shipping
    assert!(body.contains("\u{20b9}100"));

    let suffix = extract_between(&body, "ECO-", "<");
    assert_eq!(suffix.len(), 9);
    assert!(
        suffix
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()),
        "unexpected order number suffix {suffix:?}"
    );

    // The order cleared the cart
    let cart = client
        .get(site.url("/cart"))
        .send()
        .await
        .expect("cart request failed")
        .text()
        .await
        .expect("body");
    assert!(cart.contains("Your cart is empty"));

    // The confirmation survives a refresh
    let again = client
        .get(site.url("/checkout/success"))
        .send()
        .await
        .expect("success request failed")
        .text()
        .await
        .expect("body");
    assert!(again.contains(suffix));
}

#[tokio::test]
async fn test_new_order_clears_the_confirmation() {
    let site = spawn_site().await;
    let client = browser();
    add_rug(&site, &client).await;

    client
        .post(site.url("/checkout"))
        .form(&delivery_order())
        .send()
        .await
        .expect("checkout post failed");

    let shop = client
        .post(site.url("/checkout/new-order"))
        .send()
        .await
        .expect("new-order post failed")
        .text()
        .await
        .expect("body");
    assert!(shop.contains("Eco Shop"));

    // With the confirmation gone, the success page bounces back to the cart
    let resp = client
        .get(site.url("/checkout/success"))
        .send()
        .await
        .expect("success request failed");
    assert_eq!(resp.url().path(), "/cart");
}
