use serde::{Deserialize, Serialize};

use super::category::Category;
use super::object::{null_as_default, optional_relation, ImageRef, Object, Relation};

// ---------------------------------------------------------------------------
// Product
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductMetadata {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    /// Only meaningful when lower than `price`; the store does not enforce it.
    #[serde(default)]
    pub sale_price: Option<f64>,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub in_stock: bool,
    #[serde(default)]
    pub product_image: Option<ImageRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub gallery: Vec<ImageRef>,
    #[serde(default, deserialize_with = "optional_relation")]
    pub category: Option<Relation<Category>>,
}

pub type Product = Object<ProductMetadata>;
