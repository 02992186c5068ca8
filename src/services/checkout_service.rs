use crate::{
    dto::checkout::{CheckoutSummary, PlacedOrder},
    error::{AppError, AppResult},
    response::ApiResponse,
    state::AppState,
};

pub async fn summary(state: &AppState) -> AppResult<ApiResponse<CheckoutSummary>> {
    let summary = state.cart.lock().await.summary(&state.pricing);
    Ok(ApiResponse::success(
        "Order summary",
        CheckoutSummary::from(summary),
        None,
    ))
}

/// Checkout placeholder: no payment is taken, the cart is simply emptied.
pub async fn place_order(state: &AppState) -> AppResult<ApiResponse<PlacedOrder>> {
    let mut cart = state.cart.lock().await;
    if cart.is_empty() {
        return Err(AppError::BadRequest("Cart is empty".into()));
    }

    let summary = cart.summary(&state.pricing);
    cart.clear_cart();
    tracing::info!(
        items = summary.item_count,
        total = summary.total,
        "order placed"
    );

    Ok(ApiResponse::success(
        "Order placed",
        PlacedOrder {
            title: "Order Placed!".to_string(),
            message: "Your order has been placed successfully.".to_string(),
            summary: CheckoutSummary::from(summary),
        },
        None,
    ))
}
