use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    cart::{CartPreview, OrderSummary},
    catalog::{CatalogKind, LoadState},
    dto::{
        cart::{
            AddToCartRequest, CartLineView, CartMutation, CartView, EmptyState, NavigationLink,
            NavigationTarget, SelectedQuantity, UpdateQuantityRequest,
        },
        catalog::{CuisineList, MealPeriodList, MenuItemList, MenuItemQuery, RestaurantList},
        checkout::{CheckoutSummary, PlacedOrder, SummaryLabels},
        notifications::{ActionOutcome, NotificationView},
    },
    feedback::notification::{Notification, NotificationAction},
    models::{CartItem, CartLine, MealPeriod, MenuItem, PopularCuisine, Restaurant, RestaurantSummary},
    response::{ApiResponse, Meta},
    routes::{cart, catalog, checkout, health, notifications, params},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        cart::view_cart,
        cart::add_to_cart,
        cart::update_quantity,
        cart::remove_from_cart,
        cart::clear_cart,
        cart::cart_preview,
        cart::hide_preview,
        cart::selected_quantity,
        cart::select_quantity,
        checkout::checkout_summary,
        checkout::place_order,
        notifications::current_notification,
        notifications::dismiss_notification,
        notifications::invoke_action,
        catalog::list_restaurants,
        catalog::list_menu_items,
        catalog::list_popular_cuisines,
        catalog::list_meal_periods,
        catalog::reload_collection
    ),
    components(
        schemas(
            CartItem,
            CartLine,
            RestaurantSummary,
            Restaurant,
            MenuItem,
            PopularCuisine,
            MealPeriod,
            AddToCartRequest,
            UpdateQuantityRequest,
            SelectedQuantity,
            CartLineView,
            CartView,
            CartMutation,
            CartPreview,
            EmptyState,
            NavigationLink,
            NavigationTarget,
            OrderSummary,
            CheckoutSummary,
            SummaryLabels,
            PlacedOrder,
            Notification,
            NotificationAction,
            NotificationView,
            ActionOutcome,
            CatalogKind,
            LoadState,
            RestaurantList,
            MenuItemList,
            CuisineList,
            MealPeriodList,
            MenuItemQuery,
            params::Pagination,
            Meta,
            ApiResponse<CartView>,
            ApiResponse<CartMutation>,
            ApiResponse<CheckoutSummary>,
            ApiResponse<RestaurantList>,
            ApiResponse<MenuItemList>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Cart", description = "Cart endpoints"),
        (name = "Checkout", description = "Order summary and placeholder checkout"),
        (name = "Notifications", description = "Transient feedback slot"),
        (name = "Catalog", description = "Restaurants, menu items, cuisines and meal periods"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
