use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, post},
};

use crate::{
    catalog::{CatalogKind, LoadState},
    dto::catalog::{CuisineList, MealPeriodList, MenuItemList, MenuItemQuery, RestaurantList},
    error::AppResult,
    response::ApiResponse,
    routes::params::Pagination,
    services::catalog_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/restaurants", get(list_restaurants))
        .route("/menu-items", get(list_menu_items))
        .route("/popular-cuisines", get(list_popular_cuisines))
        .route("/meal-periods", get(list_meal_periods))
        .route("/{collection}/reload", post(reload_collection))
}

#[utoipa::path(
    get,
    path = "/api/catalog/restaurants",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20")
    ),
    responses(
        (status = 200, description = "Restaurants with their load state", body = ApiResponse<RestaurantList>)
    ),
    tag = "Catalog"
)]
pub async fn list_restaurants(
    State(state): State<AppState>,
    Query(pagination): Query<Pagination>,
) -> AppResult<Json<ApiResponse<RestaurantList>>> {
    Ok(Json(
        catalog_service::list_restaurants(&state, pagination).await?,
    ))
}

#[utoipa::path(
    get,
    path = "/api/catalog/menu-items",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
        ("restaurant" = Option<i64>, Query, description = "Restaurant ID"),
        ("q" = Option<String>, Query, description = "Name search")
    ),
    responses(
        (status = 200, description = "Menu items with their load state", body = ApiResponse<MenuItemList>)
    ),
    tag = "Catalog"
)]
pub async fn list_menu_items(
    State(state): State<AppState>,
    Query(query): Query<MenuItemQuery>,
) -> AppResult<Json<ApiResponse<MenuItemList>>> {
    Ok(Json(catalog_service::list_menu_items(&state, query).await?))
}

#[utoipa::path(
    get,
    path = "/api/catalog/popular-cuisines",
    responses(
        (status = 200, description = "Popular cuisines", body = ApiResponse<CuisineList>)
    ),
    tag = "Catalog"
)]
pub async fn list_popular_cuisines(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<CuisineList>>> {
    Ok(Json(catalog_service::list_popular_cuisines(&state).await?))
}

#[utoipa::path(
    get,
    path = "/api/catalog/meal-periods",
    responses(
        (status = 200, description = "Meal periods", body = ApiResponse<MealPeriodList>)
    ),
    tag = "Catalog"
)]
pub async fn list_meal_periods(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<MealPeriodList>>> {
    Ok(Json(catalog_service::list_meal_periods(&state).await?))
}

#[utoipa::path(
    post,
    path = "/api/catalog/{collection}/reload",
    params(
        ("collection" = CatalogKind, Path, description = "restaurants, menu-items, popular-cuisines or meal-periods")
    ),
    responses(
        (status = 200, description = "Load state after the retry", body = ApiResponse<LoadState>)
    ),
    tag = "Catalog"
)]
pub async fn reload_collection(
    State(state): State<AppState>,
    Path(collection): Path<CatalogKind>,
) -> AppResult<Json<ApiResponse<LoadState>>> {
    Ok(Json(
        catalog_service::reload_collection(&state, collection).await?,
    ))
}
