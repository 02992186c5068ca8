use std::time::Duration;

use reqwest::{Client, header};
use serde::{Deserialize, de::DeserializeOwned};

use crate::{
    catalog::{CatalogError, CatalogKind, store::Fetched},
    config::AppConfig,
    models::{MealPeriod, MenuItem, PopularCuisine, Restaurant},
};

/// List endpoints answer either with a paginated envelope or a bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum Listing<T> {
    Paged { results: Vec<T> },
    Plain(Vec<T>),
}

impl<T> Listing<T> {
    fn into_items(self) -> Vec<T> {
        match self {
            Listing::Paged { results } => results,
            Listing::Plain(items) => items,
        }
    }
}

#[derive(Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: String,
    restaurants_timeout: Duration,
    timeout: Duration,
}

impl CatalogClient {
    pub fn new(
        base_url: impl Into<String>,
        restaurants_timeout: Duration,
        timeout: Duration,
    ) -> Result<Self, CatalogError> {
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            restaurants_timeout,
            timeout,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, CatalogError> {
        Self::new(
            config.catalog_base_url.clone(),
            config.restaurants_timeout,
            config.catalog_timeout,
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout_for(&self, kind: CatalogKind) -> Duration {
        match kind {
            CatalogKind::Restaurants => self.restaurants_timeout,
            _ => self.timeout,
        }
    }

    pub async fn fetch(&self, kind: CatalogKind) -> Fetched {
        match kind {
            CatalogKind::Restaurants => Fetched::Restaurants(self.restaurants().await),
            CatalogKind::MenuItems => Fetched::MenuItems(self.menu_items().await),
            CatalogKind::PopularCuisines => Fetched::PopularCuisines(self.popular_cuisines().await),
            CatalogKind::MealPeriods => Fetched::MealPeriods(self.meal_periods().await),
        }
    }

    pub async fn restaurants(&self) -> Result<Vec<Restaurant>, CatalogError> {
        self.fetch_list(CatalogKind::Restaurants).await
    }

    pub async fn menu_items(&self) -> Result<Vec<MenuItem>, CatalogError> {
        self.fetch_list(CatalogKind::MenuItems).await
    }

    pub async fn popular_cuisines(&self) -> Result<Vec<PopularCuisine>, CatalogError> {
        self.fetch_list(CatalogKind::PopularCuisines).await
    }

    pub async fn meal_periods(&self) -> Result<Vec<MealPeriod>, CatalogError> {
        self.fetch_list(CatalogKind::MealPeriods).await
    }

    async fn fetch_list<T: DeserializeOwned>(
        &self,
        kind: CatalogKind,
    ) -> Result<Vec<T>, CatalogError> {
        let url = format!("{}/{}", self.base_url, kind.path());
        tracing::debug!(%url, "fetching catalog");

        let response = self
            .http
            .get(&url)
            .header(header::ACCEPT, "application/json")
            .timeout(self.timeout_for(kind))
            .send()
            .await
            .map_err(|err| self.classify(&url, err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| self.classify(&url, err))?;
        let listing: Listing<T> = serde_json::from_slice(&body)?;
        Ok(listing.into_items())
    }

    fn classify(&self, url: &str, err: reqwest::Error) -> CatalogError {
        if err.is_timeout() {
            CatalogError::Timeout(url.to_string())
        } else if err.is_connect() {
            CatalogError::Unreachable {
                base_url: self.base_url.clone(),
                source: err,
            }
        } else {
            CatalogError::Request(err)
        }
    }
}
