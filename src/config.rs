use std::{env, str::FromStr, time::Duration};

use anyhow::Context;

use crate::cart::summary::PricingPolicy;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub catalog_base_url: String,
    pub host: String,
    pub port: u16,
    pub tax_rate: f64,
    pub fallback_delivery_fee: f64,
    pub notification_duration: Duration,
    pub restaurants_timeout: Duration,
    pub catalog_timeout: Duration,
    pub haptics_enabled: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        let pricing = PricingPolicy::default();
        Self {
            catalog_base_url: "http://localhost:8000/api".to_string(),
            host: "127.0.0.1".to_string(),
            port: 3000,
            tax_rate: pricing.tax_rate,
            fallback_delivery_fee: pricing.fallback_delivery_fee,
            notification_duration: Duration::from_millis(2500),
            restaurants_timeout: Duration::from_secs(15),
            catalog_timeout: Duration::from_secs(10),
            haptics_enabled: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();
        let catalog_base_url =
            env::var("CATALOG_API_BASE_URL").unwrap_or(defaults.catalog_base_url);
        let host = env::var("APP_HOST").unwrap_or(defaults.host);
        let port = parse_var("APP_PORT", defaults.port)?;
        let tax_rate = parse_var("CART_TAX_RATE", defaults.tax_rate)?;
        if !(0.0..1.0).contains(&tax_rate) {
            anyhow::bail!("CART_TAX_RATE must be within [0, 1), got {tax_rate}");
        }
        let fallback_delivery_fee =
            parse_var("CART_FALLBACK_DELIVERY_FEE", defaults.fallback_delivery_fee)?;
        let notification_duration = Duration::from_millis(parse_var(
            "NOTIFICATION_DURATION_MS",
            defaults.notification_duration.as_millis() as u64,
        )?);
        let restaurants_timeout = Duration::from_secs(parse_var(
            "CATALOG_RESTAURANTS_TIMEOUT_SECS",
            defaults.restaurants_timeout.as_secs(),
        )?);
        let catalog_timeout = Duration::from_secs(parse_var(
            "CATALOG_TIMEOUT_SECS",
            defaults.catalog_timeout.as_secs(),
        )?);
        let haptics_enabled = parse_var("HAPTICS_ENABLED", defaults.haptics_enabled)?;

        Ok(Self {
            catalog_base_url,
            host,
            port,
            tax_rate,
            fallback_delivery_fee,
            notification_duration,
            restaurants_timeout,
            catalog_timeout,
            haptics_enabled,
        })
    }

    pub fn pricing(&self) -> PricingPolicy {
        PricingPolicy {
            tax_rate: self.tax_rate,
            fallback_delivery_fee: self.fallback_delivery_fee,
        }
    }
}

fn parse_var<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("invalid value for {key}: {raw:?}")),
        Err(_) => Ok(default),
    }
}
