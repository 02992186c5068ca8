use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    catalog::{CatalogError, CatalogKind},
    feedback::{Feedback, haptics::HapticCue, haptics::NotificationKind},
    models::{MealPeriod, MenuItem, PopularCuisine, Restaurant, RestaurantId},
};

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    Empty { message: Option<String> },
    Failed { message: String },
}

#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
    state: LoadState,
    loaded_at: Option<DateTime<Utc>>,
    generation: u64,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            state: LoadState::Idle,
            loaded_at: None,
            generation: 0,
        }
    }
}

impl<T> Collection<T> {
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    /// Number of loads started so far; a fetch only lands if it is the latest.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Result of one catalog fetch, tagged with the collection it belongs to.
pub enum Fetched {
    Restaurants(Result<Vec<Restaurant>, CatalogError>),
    MenuItems(Result<Vec<MenuItem>, CatalogError>),
    PopularCuisines(Result<Vec<PopularCuisine>, CatalogError>),
    MealPeriods(Result<Vec<MealPeriod>, CatalogError>),
}

impl Fetched {
    pub fn kind(&self) -> CatalogKind {
        match self {
            Fetched::Restaurants(_) => CatalogKind::Restaurants,
            Fetched::MenuItems(_) => CatalogKind::MenuItems,
            Fetched::PopularCuisines(_) => CatalogKind::PopularCuisines,
            Fetched::MealPeriods(_) => CatalogKind::MealPeriods,
        }
    }
}

enum ErrorUpdate {
    Keep,
    Clear,
    Set(String),
}

/// Catalog snapshot fetched from the backend. Independent of the cart: a
/// failed or slow load only ever touches its own collection.
pub struct CatalogStore {
    restaurants: Collection<Restaurant>,
    menu_items: Collection<MenuItem>,
    popular_cuisines: Collection<PopularCuisine>,
    meal_periods: Collection<MealPeriod>,
    error: Option<String>,
    feedback: Feedback,
}

impl CatalogStore {
    pub fn new(feedback: Feedback) -> Self {
        Self {
            restaurants: Collection::default(),
            menu_items: Collection::default(),
            popular_cuisines: Collection::default(),
            meal_periods: Collection::default(),
            error: None,
            feedback,
        }
    }

    pub fn restaurants(&self) -> &Collection<Restaurant> {
        &self.restaurants
    }

    pub fn menu_items(&self) -> &Collection<MenuItem> {
        &self.menu_items
    }

    pub fn popular_cuisines(&self) -> &Collection<PopularCuisine> {
        &self.popular_cuisines
    }

    pub fn meal_periods(&self) -> &Collection<MealPeriod> {
        &self.meal_periods
    }

    /// Last user-facing catalog error, cleared by the next successful load.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn state(&self, kind: CatalogKind) -> &LoadState {
        match kind {
            CatalogKind::Restaurants => self.restaurants.state(),
            CatalogKind::MenuItems => self.menu_items.state(),
            CatalogKind::PopularCuisines => self.popular_cuisines.state(),
            CatalogKind::MealPeriods => self.meal_periods.state(),
        }
    }

    pub fn needs_load(&self, kind: CatalogKind) -> bool {
        matches!(self.state(kind), LoadState::Idle)
    }

    pub fn restaurant(&self, id: RestaurantId) -> Option<&Restaurant> {
        self.restaurants.items.iter().find(|restaurant| restaurant.id == id)
    }

    /// Menu items filtered by restaurant and a case-insensitive name match.
    pub fn search_menu_items(&self, restaurant: Option<RestaurantId>, query: Option<&str>) -> Vec<MenuItem> {
        let needle = query
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase);
        self.menu_items
            .items
            .iter()
            .filter(|item| restaurant.is_none_or(|id| item.restaurant == Some(id)))
            .filter(|item| {
                needle
                    .as_deref()
                    .is_none_or(|needle| item.name.to_lowercase().contains(needle))
            })
            .cloned()
            .collect()
    }

    /// Marks `kind` as loading and returns the generation its fetch must settle with.
    ///
    /// A later `begin` supersedes any fetch still in flight.
    pub fn begin(&mut self, kind: CatalogKind) -> u64 {
        tracing::info!(collection = kind.noun(), "loading catalog");
        let (state, generation) = self.load_slot(kind);
        *state = LoadState::Loading;
        *generation += 1;
        *generation
    }

    /// Starts the first load of `kind`, or returns `None` when one was already started.
    pub fn begin_if_idle(&mut self, kind: CatalogKind) -> Option<u64> {
        self.needs_load(kind).then(|| self.begin(kind))
    }

    /// Applies a fetch outcome. Returns `false` when a newer load has started
    /// since `generation` was issued; the outcome is then discarded.
    pub fn settle(&mut self, generation: u64, fetched: Fetched, base_url: &str) -> bool {
        let kind = fetched.kind();
        let current = *self.load_slot(kind).1;
        if generation != current {
            tracing::debug!(
                collection = kind.noun(),
                generation,
                current,
                "discarding superseded catalog fetch"
            );
            return false;
        }

        let update = match fetched {
            Fetched::Restaurants(result) => {
                settle(&mut self.restaurants, kind, result, base_url, &self.feedback)
            }
            Fetched::MenuItems(result) => {
                settle(&mut self.menu_items, kind, result, base_url, &self.feedback)
            }
            Fetched::PopularCuisines(result) => {
                settle(&mut self.popular_cuisines, kind, result, base_url, &self.feedback)
            }
            Fetched::MealPeriods(result) => {
                settle(&mut self.meal_periods, kind, result, base_url, &self.feedback)
            }
        };

        match update {
            ErrorUpdate::Keep => {}
            ErrorUpdate::Clear => self.error = None,
            ErrorUpdate::Set(message) => self.error = Some(message),
        }
        true
    }

    fn load_slot(&mut self, kind: CatalogKind) -> (&mut LoadState, &mut u64) {
        match kind {
            CatalogKind::Restaurants => (&mut self.restaurants.state, &mut self.restaurants.generation),
            CatalogKind::MenuItems => (&mut self.menu_items.state, &mut self.menu_items.generation),
            CatalogKind::PopularCuisines => (
                &mut self.popular_cuisines.state,
                &mut self.popular_cuisines.generation,
            ),
            CatalogKind::MealPeriods => (
                &mut self.meal_periods.state,
                &mut self.meal_periods.generation,
            ),
        }
    }
}

fn settle<T>(
    collection: &mut Collection<T>,
    kind: CatalogKind,
    result: Result<Vec<T>, CatalogError>,
    base_url: &str,
    feedback: &Feedback,
) -> ErrorUpdate {
    match result {
        Ok(items) if items.is_empty() => {
            let message = empty_message(kind);
            tracing::info!(collection = kind.noun(), "catalog returned no data");
            collection.items = Vec::new();
            collection.loaded_at = Some(Utc::now());
            collection.state = LoadState::Empty {
                message: message.clone(),
            };
            message.map_or(ErrorUpdate::Keep, ErrorUpdate::Set)
        }
        Ok(items) => {
            tracing::info!(collection = kind.noun(), count = items.len(), "catalog loaded");
            collection.items = items;
            collection.loaded_at = Some(Utc::now());
            collection.state = LoadState::Loaded;
            match kind {
                CatalogKind::Restaurants | CatalogKind::MenuItems => ErrorUpdate::Clear,
                _ => ErrorUpdate::Keep,
            }
        }
        Err(err) => {
            tracing::warn!(collection = kind.noun(), error = %err, "catalog load failed");
            let message = failure_message(kind, &err, base_url);
            collection.items = Vec::new();
            collection.state = LoadState::Failed {
                message: message.clone(),
            };
            feedback.haptic(HapticCue::Notification(NotificationKind::Error));
            feedback.notify(format!("Failed to load {}", kind.noun()), None);
            ErrorUpdate::Set(message)
        }
    }
}

fn empty_message(kind: CatalogKind) -> Option<String> {
    match kind {
        CatalogKind::Restaurants => Some("No restaurants available".to_string()),
        CatalogKind::MenuItems => Some("No menu items available".to_string()),
        CatalogKind::PopularCuisines | CatalogKind::MealPeriods => None,
    }
}

fn failure_message(kind: CatalogKind, err: &CatalogError, base_url: &str) -> String {
    match kind {
        CatalogKind::Restaurants => match err {
            CatalogError::Status(status) => format!("Server error: {status}"),
            CatalogError::Unreachable { .. } | CatalogError::Timeout(_) => format!(
                "Cannot connect to server at {base_url}. Please ensure the backend is running and accessible."
            ),
            other => format!("Request failed: {other}"),
        },
        CatalogKind::MenuItems => {
            "Failed to load menu items. Please check your connection.".to_string()
        }
        other => format!("Failed to load {}", other.noun()),
    }
}
