use crate::{
    catalog::{CatalogKind, LoadState},
    dto::catalog::{CuisineList, MealPeriodList, MenuItemList, MenuItemQuery, RestaurantList},
    error::AppResult,
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    state::AppState,
};

/// Fetches `kind` and applies the outcome to the catalog store.
///
/// The store lock is released while the request is in flight so reads and
/// the cart keep working during a slow fetch. When another reload starts in
/// the meantime, only the newest outcome is applied.
pub async fn reload(state: &AppState, kind: CatalogKind) -> LoadState {
    let generation = state.catalog.write().await.begin(kind);
    fetch_and_settle(state, kind, generation).await
}

/// Loads `kind` the first time it is viewed. Concurrent first views start a
/// single fetch; the others see the collection as loading.
pub async fn ensure_loaded(state: &AppState, kind: CatalogKind) {
    let claimed = state.catalog.write().await.begin_if_idle(kind);
    if let Some(generation) = claimed {
        fetch_and_settle(state, kind, generation).await;
    }
}

async fn fetch_and_settle(state: &AppState, kind: CatalogKind, generation: u64) -> LoadState {
    let fetched = state.client.fetch(kind).await;
    let mut catalog = state.catalog.write().await;
    catalog.settle(generation, fetched, state.client.base_url());
    catalog.state(kind).clone()
}

pub async fn reload_collection(
    state: &AppState,
    kind: CatalogKind,
) -> AppResult<ApiResponse<LoadState>> {
    let status = reload(state, kind).await;
    Ok(ApiResponse::success(
        format!("Reloaded {}", kind.noun()),
        status,
        None,
    ))
}

pub async fn list_restaurants(
    state: &AppState,
    pagination: Pagination,
) -> AppResult<ApiResponse<RestaurantList>> {
    ensure_loaded(state, CatalogKind::Restaurants).await;
    let catalog = state.catalog.read().await;
    let collection = catalog.restaurants();
    let (items, meta) = paginate(collection.items(), &pagination);

    Ok(ApiResponse::success(
        "Restaurants",
        RestaurantList {
            items,
            status: collection.state().clone(),
            error: catalog.error().map(str::to_string),
        },
        Some(meta),
    ))
}

pub async fn list_menu_items(
    state: &AppState,
    query: MenuItemQuery,
) -> AppResult<ApiResponse<MenuItemList>> {
    ensure_loaded(state, CatalogKind::MenuItems).await;
    let catalog = state.catalog.read().await;
    let matching = catalog.search_menu_items(query.restaurant, query.q.as_deref());
    let (items, meta) = paginate(&matching, &query.pagination());

    Ok(ApiResponse::success(
        "Menu items",
        MenuItemList {
            items,
            status: catalog.menu_items().state().clone(),
            error: catalog.error().map(str::to_string),
        },
        Some(meta),
    ))
}

pub async fn list_popular_cuisines(state: &AppState) -> AppResult<ApiResponse<CuisineList>> {
    ensure_loaded(state, CatalogKind::PopularCuisines).await;
    let catalog = state.catalog.read().await;
    let collection = catalog.popular_cuisines();
    let total = collection.items().len() as i64;

    Ok(ApiResponse::success(
        "Popular cuisines",
        CuisineList {
            items: collection.items().to_vec(),
            status: collection.state().clone(),
        },
        Some(Meta::new(1, total, total)),
    ))
}

pub async fn list_meal_periods(state: &AppState) -> AppResult<ApiResponse<MealPeriodList>> {
    ensure_loaded(state, CatalogKind::MealPeriods).await;
    let catalog = state.catalog.read().await;
    let collection = catalog.meal_periods();
    let total = collection.items().len() as i64;

    Ok(ApiResponse::success(
        "Meal periods",
        MealPeriodList {
            items: collection.items().to_vec(),
            status: collection.state().clone(),
        },
        Some(Meta::new(1, total, total)),
    ))
}

fn paginate<T: Clone>(items: &[T], pagination: &Pagination) -> (Vec<T>, Meta) {
    let (page, per_page, offset) = pagination.normalize();
    let page_items = items
        .iter()
        .skip(usize::try_from(offset).unwrap_or(usize::MAX))
        .take(per_page as usize)
        .cloned()
        .collect();
    (page_items, Meta::new(page, per_page, items.len() as i64))
}
