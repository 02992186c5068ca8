use serde::{Deserialize, Deserializer, Serialize, de};
use utoipa::ToSchema;

pub type ItemId = i64;
pub type RestaurantId = i64;

/// Restaurant fields captured when an item is added to the cart.
///
/// The snapshot is never refreshed from the live restaurant record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RestaurantSummary {
    pub id: RestaurantId,
    pub name: String,
    #[serde(deserialize_with = "decimal")]
    pub delivery_fee: f64,
    #[serde(default = "default_delivery_time")]
    pub delivery_time: String,
    #[serde(default = "default_min_order", deserialize_with = "decimal")]
    pub min_order: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Restaurant {
    pub id: RestaurantId,
    #[serde(default)]
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cuisine_type: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "decimal")]
    pub rating: f64,
    #[serde(default)]
    pub price_range: Option<String>,
    #[serde(default = "default_delivery_fee", deserialize_with = "decimal")]
    pub delivery_fee: f64,
    #[serde(default = "default_delivery_time")]
    pub delivery_time: String,
    #[serde(default = "default_min_order", deserialize_with = "decimal")]
    pub min_order: f64,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub features: Vec<String>,
}

impl Restaurant {
    pub fn summary(&self) -> RestaurantSummary {
        RestaurantSummary {
            id: self.id,
            name: self.name.clone(),
            delivery_fee: self.delivery_fee,
            delivery_time: self.delivery_time.clone(),
            min_order: self.min_order,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MenuItem {
    pub id: ItemId,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub restaurant: Option<RestaurantId>,
    #[serde(default)]
    pub restaurant_name: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(deserialize_with = "decimal")]
    pub price: f64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(default)]
    pub is_vegetarian: bool,
    #[serde(default)]
    pub is_vegan: bool,
    #[serde(default)]
    pub is_gluten_free: bool,
    #[serde(default)]
    pub spice_level: u8,
    #[serde(default)]
    pub prep_time: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PopularCuisine {
    pub name: String,
    #[serde(default)]
    pub emoji: String,
    #[serde(default)]
    pub restaurant_count: u32,
    #[serde(default, deserialize_with = "decimal")]
    pub avg_rating: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MealPeriod {
    pub name: String,
    #[serde(default)]
    pub emoji: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

/// The item half of an add-to-cart call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CartItem {
    pub id: ItemId,
    pub name: String,
    #[serde(deserialize_with = "decimal")]
    pub price: f64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub restaurant_name: Option<String>,
}

impl From<&MenuItem> for CartItem {
    fn from(item: &MenuItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            price: item.price,
            image: item.image.clone(),
            restaurant_name: item.restaurant_name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CartLine {
    pub id: ItemId,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub image: Option<String>,
    pub restaurant_name: Option<String>,
    pub restaurant: Option<RestaurantSummary>,
}

impl CartLine {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    pub fn item(&self) -> CartItem {
        CartItem {
            id: self.id,
            name: self.name.clone(),
            price: self.price,
            image: self.image.clone(),
            restaurant_name: self.restaurant_name.clone(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_delivery_fee() -> f64 {
    2.99
}

fn default_delivery_time() -> String {
    "30-45 min".to_string()
}

fn default_min_order() -> f64 {
    15.0
}

// Decimal columns come over the wire as strings ("12.50"); older payloads use numbers.
fn decimal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
        Null(()),
    }

    let value = match Raw::deserialize(deserializer)? {
        Raw::Number(value) => value,
        Raw::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("invalid decimal {text:?}")))?,
        Raw::Null(()) => 0.0,
    };
    if !value.is_finite() {
        return Err(de::Error::custom(format!("decimal must be finite, got {value}")));
    }
    Ok(value)
}
