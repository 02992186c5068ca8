use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::{
    cart::{CartStore, PricingPolicy},
    catalog::{CatalogClient, CatalogError, CatalogStore},
    config::AppConfig,
    feedback::{Feedback, haptics::NoHaptics, notification::Notifier},
};

#[derive(Clone)]
pub struct AppState {
    pub cart: Arc<Mutex<CartStore>>,
    pub catalog: Arc<RwLock<CatalogStore>>,
    pub client: CatalogClient,
    pub feedback: Feedback,
    pub pricing: PricingPolicy,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Result<Self, CatalogError> {
        let notifier = Notifier::new(config.notification_duration);
        let feedback = if config.haptics_enabled {
            Feedback::with_log_haptics(notifier)
        } else {
            Feedback::new(notifier, Arc::new(NoHaptics))
        };
        let client = CatalogClient::from_config(config)?;
        Ok(Self::from_parts(client, feedback, config.pricing()))
    }

    pub fn from_parts(client: CatalogClient, feedback: Feedback, pricing: PricingPolicy) -> Self {
        Self {
            cart: Arc::new(Mutex::new(CartStore::new(feedback.clone()))),
            catalog: Arc::new(RwLock::new(CatalogStore::new(feedback.clone()))),
            client,
            feedback,
            pricing,
        }
    }
}
