use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{cart::OrderSummary, format::format_currency};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SummaryLabels {
    pub subtotal: String,
    pub delivery_fee: String,
    pub tax: String,
    pub total: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CheckoutSummary {
    #[serde(flatten)]
    pub summary: OrderSummary,
    pub labels: SummaryLabels,
}

impl From<OrderSummary> for CheckoutSummary {
    fn from(summary: OrderSummary) -> Self {
        let labels = SummaryLabels {
            subtotal: format_currency(summary.subtotal),
            delivery_fee: format_currency(summary.delivery_fee),
            tax: format_currency(summary.tax),
            total: format_currency(summary.total),
        };
        Self { summary, labels }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PlacedOrder {
    pub title: String,
    pub message: String,
    pub summary: CheckoutSummary,
}
