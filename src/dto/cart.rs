use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    dto::checkout::CheckoutSummary,
    format::format_currency,
    models::{CartItem, CartLine, ItemId, RestaurantId, RestaurantSummary},
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct AddToCartRequest {
    pub item: CartItem,
    /// Restaurant snapshot sent by the client.
    pub restaurant: Option<RestaurantSummary>,
    /// Alternative to `restaurant`: resolved from the loaded catalog.
    pub restaurant_id: Option<RestaurantId>,
    /// Defaults to 1, or to the selector quantity when `use_selector` is set.
    pub quantity: Option<i64>,
    #[serde(default)]
    pub use_selector: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateQuantityRequest {
    pub quantity: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SelectedQuantity {
    pub item_id: ItemId,
    pub quantity: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum NavigationTarget {
    Restaurants,
    Menu,
    Cart,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NavigationLink {
    pub label: String,
    pub target: NavigationTarget,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmptyState {
    pub title: String,
    pub subtitle: String,
    pub actions: Vec<NavigationLink>,
}

impl EmptyState {
    pub fn empty_cart() -> Self {
        Self {
            title: "Your cart is empty".to_string(),
            subtitle: "Add some delicious items to get started!".to_string(),
            actions: vec![
                NavigationLink {
                    label: "Browse Restaurants".to_string(),
                    target: NavigationTarget::Restaurants,
                },
                NavigationLink {
                    label: "View Menu".to_string(),
                    target: NavigationTarget::Menu,
                },
            ],
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CartLineView {
    #[serde(flatten)]
    pub line: CartLine,
    pub line_total: f64,
    pub price_label: String,
    pub line_total_label: String,
}

impl From<&CartLine> for CartLineView {
    fn from(line: &CartLine) -> Self {
        let line_total = line.line_total();
        Self {
            line: line.clone(),
            line_total,
            price_label: format_currency(line.price),
            line_total_label: format_currency(line_total),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CartView {
    pub is_empty: bool,
    pub item_count: u32,
    pub item_count_label: String,
    pub lines: Vec<CartLineView>,
    pub summary: Option<CheckoutSummary>,
    pub empty_state: Option<EmptyState>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CartMutation {
    /// The line after the mutation; absent when the line was removed.
    pub line: Option<CartLine>,
    pub removed: Option<CartLine>,
    pub item_count: u32,
    pub total: f64,
    pub notification_id: Option<Uuid>,
}
