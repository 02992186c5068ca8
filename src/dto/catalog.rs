use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    catalog::LoadState,
    models::{MealPeriod, MenuItem, PopularCuisine, Restaurant, RestaurantId},
    routes::params::Pagination,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantList {
    pub items: Vec<Restaurant>,
    pub status: LoadState,
    pub error: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MenuItemList {
    pub items: Vec<MenuItem>,
    pub status: LoadState,
    pub error: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CuisineList {
    pub items: Vec<PopularCuisine>,
    pub status: LoadState,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MealPeriodList {
    pub items: Vec<MealPeriod>,
    pub status: LoadState,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct MenuItemQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    /// Only items of this restaurant.
    pub restaurant: Option<RestaurantId>,
    /// Case-insensitive name match.
    pub q: Option<String>,
}

impl MenuItemQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            per_page: self.per_page,
        }
    }
}
