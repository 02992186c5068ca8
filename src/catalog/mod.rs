use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

pub mod client;
pub mod store;

pub use client::CatalogClient;
pub use store::{CatalogStore, LoadState};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("server responded with status {0}")]
    Status(u16),

    #[error("cannot connect to {base_url}")]
    Unreachable {
        base_url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {0} timed out")]
    Timeout(String),

    #[error("malformed catalog payload")]
    Decode(#[from] serde_json::Error),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum CatalogKind {
    Restaurants,
    MenuItems,
    PopularCuisines,
    MealPeriods,
}

impl CatalogKind {
    /// Backend path relative to the API base URL.
    pub fn path(self) -> &'static str {
        match self {
            CatalogKind::Restaurants => "restaurants/",
            CatalogKind::MenuItems => "menu-items/",
            CatalogKind::PopularCuisines => "restaurants/popular-cuisines/",
            CatalogKind::MealPeriods => "menu-items/meal-periods/",
        }
    }

    pub fn noun(self) -> &'static str {
        match self {
            CatalogKind::Restaurants => "restaurants",
            CatalogKind::MenuItems => "menu items",
            CatalogKind::PopularCuisines => "cuisines",
            CatalogKind::MealPeriods => "meal periods",
        }
    }
}
