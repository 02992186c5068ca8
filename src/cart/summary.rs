use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    cart::store::{lines_item_count, lines_total},
    models::CartLine,
};

pub const DEFAULT_TAX_RATE: f64 = 0.08;
pub const FALLBACK_DELIVERY_FEE: f64 = 2.99;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingPolicy {
    pub tax_rate: f64,
    pub fallback_delivery_fee: f64,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
            fallback_delivery_fee: FALLBACK_DELIVERY_FEE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OrderSummary {
    pub item_count: u32,
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub tax_rate: f64,
    pub tax: f64,
    pub total: f64,
    /// Minimum order of the restaurant captured on the first line, if any.
    pub min_order: Option<f64>,
    pub meets_min_order: bool,
    pub amount_to_min_order: f64,
}

impl OrderSummary {
    pub fn from_lines(lines: &[CartLine], policy: &PricingPolicy) -> Self {
        let subtotal = lines_total(lines);
        let restaurant = lines.first().and_then(|line| line.restaurant.as_ref());
        let delivery_fee = restaurant
            .map(|restaurant| restaurant.delivery_fee)
            .unwrap_or(policy.fallback_delivery_fee);
        let tax = subtotal * policy.tax_rate;
        let min_order = restaurant.map(|restaurant| restaurant.min_order);
        let amount_to_min_order = min_order
            .map(|min| (min - subtotal).max(0.0))
            .unwrap_or(0.0);

        Self {
            item_count: lines_item_count(lines),
            subtotal,
            delivery_fee,
            tax_rate: policy.tax_rate,
            tax,
            total: subtotal + delivery_fee + tax,
            min_order,
            meets_min_order: amount_to_min_order == 0.0,
            amount_to_min_order,
        }
    }
}
