use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use food_storefront::{
    cart::PricingPolicy,
    catalog::CatalogClient,
    feedback::Feedback,
    routes::build_app,
    state::AppState,
};
use serde_json::{Value, json};
use tower::ServiceExt;

// Flows through the HTTP surface: add -> merge -> update -> remove -> undo -> checkout.

fn setup() -> anyhow::Result<(AppState, Router)> {
    let client = CatalogClient::new(
        "http://127.0.0.1:9/api",
        Duration::from_secs(1),
        Duration::from_secs(1),
    )?;
    let state = AppState::from_parts(client, Feedback::default(), PricingPolicy::default());
    let app = build_app(state.clone());
    Ok((state, app))
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> anyhow::Result<(StatusCode, Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json)?))?,
        None => builder.body(Body::empty())?,
    };

    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        // Extractor rejections answer in plain text.
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    Ok((status, value))
}

fn burger() -> Value {
    json!({ "id": 1, "name": "Burger", "price": 10.0 })
}

fn chop_bar() -> Value {
    json!({
        "id": 3,
        "name": "Chop Bar",
        "delivery_fee": "4.00",
        "delivery_time": "30-45 min",
        "min_order": "15.00"
    })
}

#[tokio::test]
async fn empty_cart_offers_restaurant_navigation() -> anyhow::Result<()> {
    let (_, app) = setup()?;

    let (status, body) = send(&app, Method::GET, "/api/cart", None).await?;
    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["is_empty"], true);
    assert_eq!(data["item_count_label"], "0 items");
    assert!(data["summary"].is_null());
    assert_eq!(data["empty_state"]["title"], "Your cart is empty");
    assert_eq!(data["empty_state"]["actions"][0]["target"], "restaurants");
    assert_eq!(data["empty_state"]["actions"][1]["target"], "menu");
    Ok(())
}

#[tokio::test]
async fn adding_to_empty_cart_updates_totals() -> anyhow::Result<()> {
    let (state, app) = setup()?;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/cart",
        Some(json!({ "item": burger(), "quantity": 1 })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["item_count"], 1);
    assert_eq!(body["data"]["total"], 10.0);

    let cart = state.cart.lock().await;
    assert_eq!(cart.cart_item_count(), 1);
    assert_eq!(cart.cart_total(), 10.0);
    drop(cart);

    let notification = state.feedback.notifier().current().expect("notification");
    assert_eq!(notification.message, "1x Burger added to cart");
    Ok(())
}

#[tokio::test]
async fn adding_existing_item_merges_quantity() -> anyhow::Result<()> {
    let (state, app) = setup()?;
    let item = json!({ "id": 1, "name": "X", "price": "5.00" });

    send(&app, Method::POST, "/api/cart", Some(json!({ "item": item, "quantity": 2 }))).await?;
    let (_, body) = send(
        &app,
        Method::POST,
        "/api/cart",
        Some(json!({ "item": item, "quantity": 3 })),
    )
    .await?;
    assert_eq!(body["data"]["line"]["quantity"], 5);

    let cart = state.cart.lock().await;
    assert_eq!(cart.lines().len(), 1);
    assert_eq!(cart.cart_total(), 25.0);
    Ok(())
}

#[tokio::test]
async fn non_positive_add_quantity_is_rejected() -> anyhow::Result<()> {
    let (state, app) = setup()?;

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/cart",
        Some(json!({ "item": burger(), "quantity": 0 })),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(state.cart.lock().await.is_empty());
    Ok(())
}

#[tokio::test]
async fn invalid_restaurant_snapshot_is_rejected() -> anyhow::Result<()> {
    let (state, app) = setup()?;

    let mut negative_fee = chop_bar();
    negative_fee["delivery_fee"] = json!("-50");
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/cart",
        Some(json!({ "item": burger(), "restaurant": negative_fee })),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["data"]["error"],
        "Bad Request restaurant delivery_fee must be a non-negative number"
    );

    let mut nan_minimum = chop_bar();
    nan_minimum["min_order"] = json!("NaN");
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/cart",
        Some(json!({ "item": burger(), "restaurant": nan_minimum })),
    )
    .await?;
    assert!(status.is_client_error(), "unexpected status {status}");

    assert!(state.cart.lock().await.is_empty());
    let (_, body) = send(&app, Method::GET, "/api/checkout", None).await?;
    assert_eq!(body["data"]["subtotal"], 0.0);
    assert_eq!(body["data"]["delivery_fee"], 2.99);
    Ok(())
}

#[tokio::test]
async fn update_quantity_clamps_and_removes() -> anyhow::Result<()> {
    let (state, app) = setup()?;
    send(&app, Method::POST, "/api/cart", Some(json!({ "item": burger() }))).await?;

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/api/cart/1",
        Some(json!({ "quantity": 150 })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["line"]["quantity"], 99);

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/api/cart/1",
        Some(json!({ "quantity": -5 })),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Removed from cart");
    assert!(body["data"]["line"].is_null());
    assert!(state.cart.lock().await.is_empty());

    let (status, _) = send(
        &app,
        Method::PATCH,
        "/api/cart/1",
        Some(json!({ "quantity": 2 })),
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn remove_then_undo_restores_line() -> anyhow::Result<()> {
    let (state, app) = setup()?;
    send(
        &app,
        Method::POST,
        "/api/cart",
        Some(json!({ "item": burger(), "restaurant": chop_bar(), "quantity": 4 })),
    )
    .await?;

    let (status, body) = send(&app, Method::DELETE, "/api/cart/1", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["removed"]["quantity"], 4);
    let notification_id = body["data"]["notification_id"]
        .as_str()
        .expect("undo notification")
        .to_string();

    let (_, body) = send(&app, Method::GET, "/api/notifications", None).await?;
    assert_eq!(body["data"]["message"], "Burger removed from cart");
    assert_eq!(body["data"]["action_label"], "Undo");

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/notifications/{notification_id}/action"),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["outcome"], "restored");

    let cart = state.cart.lock().await;
    let line = cart.line(1).expect("restored line");
    assert_eq!(line.quantity, 4);
    assert_eq!(line.restaurant.as_ref().map(|r| r.id), Some(3));
    Ok(())
}

#[tokio::test]
async fn superseded_notification_cannot_be_actioned() -> anyhow::Result<()> {
    let (_, app) = setup()?;
    send(&app, Method::POST, "/api/cart", Some(json!({ "item": burger() }))).await?;

    let (_, body) = send(&app, Method::DELETE, "/api/cart/1", None).await?;
    let undo_id = body["data"]["notification_id"].as_str().unwrap_or_default().to_string();

    send(
        &app,
        Method::POST,
        "/api/cart",
        Some(json!({ "item": { "id": 2, "name": "Fries", "price": 3.0 } })),
    )
    .await?;

    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/api/notifications/{undo_id}/action"),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn view_cart_action_navigates_to_cart() -> anyhow::Result<()> {
    let (_, app) = setup()?;
    let (_, body) = send(&app, Method::POST, "/api/cart", Some(json!({ "item": burger() }))).await?;
    let id = body["data"]["notification_id"].as_str().unwrap_or_default().to_string();

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/notifications/{id}/action"),
        None,
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["outcome"], "navigate");
    assert_eq!(body["data"]["target"], "cart");

    let (_, body) = send(&app, Method::GET, "/api/notifications", None).await?;
    assert!(body["data"].is_null());
    Ok(())
}

#[tokio::test]
async fn checkout_total_is_subtotal_fee_and_tax() -> anyhow::Result<()> {
    let (state, app) = setup()?;
    send(
        &app,
        Method::POST,
        "/api/cart",
        Some(json!({ "item": burger(), "restaurant": chop_bar(), "quantity": 2 })),
    )
    .await?;

    let (status, body) = send(&app, Method::GET, "/api/checkout", None).await?;
    assert_eq!(status, StatusCode::OK);
    let summary = &body["data"];
    let subtotal = summary["subtotal"].as_f64().unwrap_or_default();
    let fee = summary["delivery_fee"].as_f64().unwrap_or_default();
    let tax = summary["tax"].as_f64().unwrap_or_default();
    let total = summary["total"].as_f64().unwrap_or_default();
    assert_eq!(subtotal, 20.0);
    assert_eq!(fee, 4.0);
    assert!((tax - 1.6).abs() < 1e-9);
    assert!((total - (subtotal + fee + tax)).abs() < 1e-9);
    assert_eq!(summary["labels"]["total"], "GHC 25.60");
    assert_eq!(summary["meets_min_order"], true);

    let (_, body) = send(&app, Method::GET, "/api/cart", None).await?;
    assert_eq!(body["data"]["is_empty"], false);
    assert_eq!(body["data"]["lines"][0]["line_total"], 20.0);
    assert_eq!(body["data"]["summary"]["total"].as_f64(), Some(total));

    let (status, body) = send(&app, Method::POST, "/api/checkout", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "Order Placed!");
    assert!(state.cart.lock().await.is_empty());

    let (status, _) = send(&app, Method::POST, "/api/checkout", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn selector_quantity_feeds_add() -> anyhow::Result<()> {
    let (_, app) = setup()?;

    let (_, body) = send(
        &app,
        Method::PUT,
        "/api/cart/selector/1",
        Some(json!({ "quantity": 3 })),
    )
    .await?;
    assert_eq!(body["data"]["quantity"], 3);

    let (_, body) = send(
        &app,
        Method::POST,
        "/api/cart",
        Some(json!({ "item": burger(), "use_selector": true })),
    )
    .await?;
    assert_eq!(body["data"]["line"]["quantity"], 3);

    let (_, body) = send(&app, Method::GET, "/api/cart/selector/1", None).await?;
    assert_eq!(body["data"]["quantity"], 1);

    let (_, body) = send(&app, Method::GET, "/api/cart/preview", None).await?;
    assert_eq!(body["data"]["visible"], true);
    assert_eq!(body["data"]["item_count"], 3);
    Ok(())
}

#[tokio::test]
async fn clear_cart_empties_without_notification() -> anyhow::Result<()> {
    let (state, app) = setup()?;
    send(&app, Method::POST, "/api/cart", Some(json!({ "item": burger() }))).await?;
    send(&app, Method::DELETE, "/api/notifications", None).await?;

    let (status, _) = send(&app, Method::DELETE, "/api/cart", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(state.cart.lock().await.is_empty());
    assert!(state.feedback.notifier().current().is_none());
    Ok(())
}

#[tokio::test]
async fn unknown_route_falls_back_to_not_found() -> anyhow::Result<()> {
    let (_, app) = setup()?;
    let (status, body) = send(&app, Method::GET, "/nope", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["data"]["path"], "/nope");
    Ok(())
}
