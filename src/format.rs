//! Display helpers shared by the cart and checkout views.

pub const CURRENCY: &str = "GHC";

pub fn format_currency(amount: f64) -> String {
    format!("{CURRENCY} {amount:.2}")
}

pub fn item_count_label(count: u32) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{count} items")
    }
}
