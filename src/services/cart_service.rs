use crate::{
    cart::{CartPreview, CartStore, QuantityUpdate, store::clamp_quantity},
    dto::{
        cart::{
            AddToCartRequest, CartLineView, CartMutation, CartView, EmptyState, SelectedQuantity,
            UpdateQuantityRequest,
        },
        checkout::CheckoutSummary,
    },
    error::{AppError, AppResult},
    format::item_count_label,
    models::{CartLine, ItemId, RestaurantSummary},
    response::{ApiResponse, Meta},
    state::AppState,
};

pub async fn view_cart(state: &AppState) -> AppResult<ApiResponse<CartView>> {
    let cart = state.cart.lock().await;
    let item_count = cart.cart_item_count();

    let view = if cart.is_empty() {
        CartView {
            is_empty: true,
            item_count,
            item_count_label: item_count_label(item_count),
            lines: Vec::new(),
            summary: None,
            empty_state: Some(EmptyState::empty_cart()),
        }
    } else {
        CartView {
            is_empty: false,
            item_count,
            item_count_label: item_count_label(item_count),
            lines: cart.lines().iter().map(CartLineView::from).collect(),
            summary: Some(CheckoutSummary::from(cart.summary(&state.pricing))),
            empty_state: None,
        }
    };

    let meta = Meta::new(1, cart.lines().len() as i64, cart.lines().len() as i64);
    Ok(ApiResponse::success("OK", view, Some(meta)))
}

pub async fn add_to_cart(
    state: &AppState,
    payload: AddToCartRequest,
) -> AppResult<ApiResponse<CartMutation>> {
    if let Some(quantity) = payload.quantity {
        if quantity <= 0 {
            return Err(AppError::BadRequest(
                "quantity must be greater than 0".to_string(),
            ));
        }
    }
    if payload.item.name.trim().is_empty() {
        return Err(AppError::BadRequest("item name is required".to_string()));
    }
    if !payload.item.price.is_finite() || payload.item.price < 0.0 {
        return Err(AppError::BadRequest(
            "price must be a non-negative number".to_string(),
        ));
    }

    if let Some(restaurant) = &payload.restaurant {
        validate_snapshot(restaurant)?;
    }

    let restaurant = resolve_restaurant(state, payload.restaurant, payload.restaurant_id).await?;

    let mut cart = state.cart.lock().await;
    let line = match payload.quantity {
        None if payload.use_selector => cart.add_selected(payload.item, restaurant),
        quantity => cart.add_to_cart(
            payload.item,
            restaurant,
            clamp_quantity(quantity.unwrap_or(1)),
        ),
    };

    Ok(ApiResponse::success(
        "Added to cart",
        mutation(state, &cart, Some(line), None),
        None,
    ))
}

pub async fn update_quantity(
    state: &AppState,
    item_id: ItemId,
    payload: UpdateQuantityRequest,
) -> AppResult<ApiResponse<CartMutation>> {
    let mut cart = state.cart.lock().await;
    let (message, data) = match cart.update_quantity(item_id, payload.quantity) {
        QuantityUpdate::Updated(line) => ("Quantity updated", mutation(state, &cart, Some(line), None)),
        QuantityUpdate::Removed(removed) => {
            ("Removed from cart", mutation(state, &cart, None, Some(removed)))
        }
        QuantityUpdate::Missing => return Err(AppError::NotFound),
    };

    Ok(ApiResponse::success(message, data, None))
}

pub async fn remove_from_cart(
    state: &AppState,
    item_id: ItemId,
) -> AppResult<ApiResponse<CartMutation>> {
    let mut cart = state.cart.lock().await;
    let removed = cart.remove_from_cart(item_id).ok_or(AppError::NotFound)?;

    Ok(ApiResponse::success(
        "Removed from cart",
        mutation(state, &cart, None, Some(removed)),
        Some(Meta::empty()),
    ))
}

pub async fn clear_cart(state: &AppState) -> AppResult<ApiResponse<serde_json::Value>> {
    state.cart.lock().await.clear_cart();
    Ok(ApiResponse::success(
        "Cart cleared",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub async fn preview(state: &AppState) -> AppResult<ApiResponse<CartPreview>> {
    let preview = state.cart.lock().await.preview();
    Ok(ApiResponse::success("OK", preview, None))
}

pub async fn hide_preview(state: &AppState) -> AppResult<ApiResponse<CartPreview>> {
    let mut cart = state.cart.lock().await;
    cart.hide_preview();
    Ok(ApiResponse::success("OK", cart.preview(), None))
}

pub async fn selected_quantity(
    state: &AppState,
    item_id: ItemId,
) -> AppResult<ApiResponse<SelectedQuantity>> {
    let quantity = state.cart.lock().await.selected_quantity(item_id);
    Ok(ApiResponse::success(
        "OK",
        SelectedQuantity {
            item_id,
            quantity: i64::from(quantity),
        },
        None,
    ))
}

pub async fn select_quantity(
    state: &AppState,
    item_id: ItemId,
    quantity: i64,
) -> AppResult<ApiResponse<SelectedQuantity>> {
    let quantity = state.cart.lock().await.select_quantity(item_id, quantity);
    Ok(ApiResponse::success(
        "OK",
        SelectedQuantity {
            item_id,
            quantity: i64::from(quantity),
        },
        None,
    ))
}

fn validate_snapshot(restaurant: &RestaurantSummary) -> AppResult<()> {
    let amounts = [
        ("delivery_fee", restaurant.delivery_fee),
        ("min_order", restaurant.min_order),
    ];
    for (field, value) in amounts {
        if !value.is_finite() || value < 0.0 {
            return Err(AppError::BadRequest(format!(
                "restaurant {field} must be a non-negative number"
            )));
        }
    }
    Ok(())
}

async fn resolve_restaurant(
    state: &AppState,
    restaurant: Option<RestaurantSummary>,
    restaurant_id: Option<i64>,
) -> AppResult<Option<RestaurantSummary>> {
    match (restaurant, restaurant_id) {
        (Some(restaurant), _) => Ok(Some(restaurant)),
        (None, Some(id)) => state
            .catalog
            .read()
            .await
            .restaurant(id)
            .map(|restaurant| Some(restaurant.summary()))
            .ok_or_else(|| AppError::BadRequest("restaurant not found".to_string())),
        (None, None) => Ok(None),
    }
}

fn mutation(
    state: &AppState,
    cart: &CartStore,
    line: Option<CartLine>,
    removed: Option<CartLine>,
) -> CartMutation {
    CartMutation {
        line,
        removed,
        item_count: cart.cart_item_count(),
        total: cart.cart_total(),
        notification_id: state
            .feedback
            .notifier()
            .current()
            .map(|notification| notification.id),
    }
}
