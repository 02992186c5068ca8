use axum::{Json, Router, extract::State, routing::get};

use crate::{
    dto::checkout::{CheckoutSummary, PlacedOrder},
    error::AppResult,
    response::ApiResponse,
    services::checkout_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(checkout_summary).post(place_order))
}

#[utoipa::path(
    get,
    path = "/api/checkout",
    responses(
        (status = 200, description = "Subtotal, delivery fee, tax and total", body = ApiResponse<CheckoutSummary>)
    ),
    tag = "Checkout"
)]
pub async fn checkout_summary(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<CheckoutSummary>>> {
    Ok(Json(checkout_service::summary(&state).await?))
}

#[utoipa::path(
    post,
    path = "/api/checkout",
    responses(
        (status = 200, description = "Order placed and cart emptied", body = ApiResponse<PlacedOrder>),
        (status = 400, description = "Cart is empty"),
    ),
    tag = "Checkout"
)]
pub async fn place_order(State(state): State<AppState>) -> AppResult<Json<ApiResponse<PlacedOrder>>> {
    Ok(Json(checkout_service::place_order(&state).await?))
}
