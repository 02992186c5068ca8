pub mod selector;
pub mod store;
pub mod summary;

pub use store::{CartPreview, CartStore, QuantityUpdate};
pub use summary::{OrderSummary, PricingPolicy};
