use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, patch},
};

use crate::{
    cart::CartPreview,
    dto::cart::{AddToCartRequest, CartMutation, CartView, SelectedQuantity, UpdateQuantityRequest},
    error::AppResult,
    models::ItemId,
    response::ApiResponse,
    services::cart_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(view_cart).post(add_to_cart).delete(clear_cart))
        .route("/preview", get(cart_preview).delete(hide_preview))
        .route(
            "/selector/{item_id}",
            get(selected_quantity).put(select_quantity),
        )
        .route(
            "/{item_id}",
            patch(update_quantity).delete(remove_from_cart),
        )
}

#[utoipa::path(
    get,
    path = "/api/cart",
    responses(
        (status = 200, description = "Cart lines with checkout summary, or the empty state", body = ApiResponse<CartView>)
    ),
    tag = "Cart"
)]
pub async fn view_cart(State(state): State<AppState>) -> AppResult<Json<ApiResponse<CartView>>> {
    Ok(Json(cart_service::view_cart(&state).await?))
}

#[utoipa::path(
    post,
    path = "/api/cart",
    request_body = AddToCartRequest,
    responses(
        (status = 200, description = "Item added or merged into its existing line", body = ApiResponse<CartMutation>),
        (status = 400, description = "Bad request"),
    ),
    tag = "Cart"
)]
pub async fn add_to_cart(
    State(state): State<AppState>,
    Json(payload): Json<AddToCartRequest>,
) -> AppResult<Json<ApiResponse<CartMutation>>> {
    Ok(Json(cart_service::add_to_cart(&state, payload).await?))
}

#[utoipa::path(
    patch,
    path = "/api/cart/{item_id}",
    params(
        ("item_id" = i64, Path, description = "Menu item ID")
    ),
    request_body = UpdateQuantityRequest,
    responses(
        (status = 200, description = "Quantity set (clamped to 1..=99); zero or less removes the line", body = ApiResponse<CartMutation>),
        (status = 404, description = "Item not in cart"),
    ),
    tag = "Cart"
)]
pub async fn update_quantity(
    State(state): State<AppState>,
    Path(item_id): Path<ItemId>,
    Json(payload): Json<UpdateQuantityRequest>,
) -> AppResult<Json<ApiResponse<CartMutation>>> {
    Ok(Json(
        cart_service::update_quantity(&state, item_id, payload).await?,
    ))
}

#[utoipa::path(
    delete,
    path = "/api/cart/{item_id}",
    params(
        ("item_id" = i64, Path, description = "Menu item ID")
    ),
    responses(
        (status = 200, description = "Removed; the notification offers an undo", body = ApiResponse<CartMutation>),
        (status = 404, description = "Item not in cart"),
    ),
    tag = "Cart"
)]
pub async fn remove_from_cart(
    State(state): State<AppState>,
    Path(item_id): Path<ItemId>,
) -> AppResult<Json<ApiResponse<CartMutation>>> {
    Ok(Json(cart_service::remove_from_cart(&state, item_id).await?))
}

#[utoipa::path(
    delete,
    path = "/api/cart",
    responses(
        (status = 200, description = "Cart emptied", body = ApiResponse<serde_json::Value>),
    ),
    tag = "Cart"
)]
pub async fn clear_cart(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    Ok(Json(cart_service::clear_cart(&state).await?))
}

#[utoipa::path(
    get,
    path = "/api/cart/preview",
    responses(
        (status = 200, description = "Item count, total and the first lines", body = ApiResponse<CartPreview>),
    ),
    tag = "Cart"
)]
pub async fn cart_preview(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<CartPreview>>> {
    Ok(Json(cart_service::preview(&state).await?))
}

#[utoipa::path(
    delete,
    path = "/api/cart/preview",
    responses(
        (status = 200, description = "Preview hidden", body = ApiResponse<CartPreview>),
    ),
    tag = "Cart"
)]
pub async fn hide_preview(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<CartPreview>>> {
    Ok(Json(cart_service::hide_preview(&state).await?))
}

#[utoipa::path(
    get,
    path = "/api/cart/selector/{item_id}",
    params(
        ("item_id" = i64, Path, description = "Menu item ID")
    ),
    responses(
        (status = 200, description = "Quantity picked for the item, default 1", body = ApiResponse<SelectedQuantity>),
    ),
    tag = "Cart"
)]
pub async fn selected_quantity(
    State(state): State<AppState>,
    Path(item_id): Path<ItemId>,
) -> AppResult<Json<ApiResponse<SelectedQuantity>>> {
    Ok(Json(cart_service::selected_quantity(&state, item_id).await?))
}

#[utoipa::path(
    put,
    path = "/api/cart/selector/{item_id}",
    params(
        ("item_id" = i64, Path, description = "Menu item ID")
    ),
    request_body = UpdateQuantityRequest,
    responses(
        (status = 200, description = "Quantity picked, clamped to 1..=99", body = ApiResponse<SelectedQuantity>),
    ),
    tag = "Cart"
)]
pub async fn select_quantity(
    State(state): State<AppState>,
    Path(item_id): Path<ItemId>,
    Json(payload): Json<UpdateQuantityRequest>,
) -> AppResult<Json<ApiResponse<SelectedQuantity>>> {
    Ok(Json(
        cart_service::select_quantity(&state, item_id, payload.quantity).await?,
    ))
}
