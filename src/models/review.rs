use serde::{Deserialize, Serialize};

use super::object::{optional_relation, Object, Relation};
use super::product::Product;

// ---------------------------------------------------------------------------
// Rating: Select-dropdown value, e.g. {"key": "4", "value": "4 Stars"}
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub key: String,
    #[serde(default)]
    pub value: String,
}

impl Rating {
    /// Star count encoded in `key`, if it is a whole number from 1 to 5.
    pub fn score(&self) -> Option<u8> {
        self.key
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|n| (1..=5).contains(n))
    }
}

// ---------------------------------------------------------------------------
// Review
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewMetadata {
    pub reviewer_name: String,
    pub rating: Rating,
    #[serde(default)]
    pub review_text: String,
    /// Resolved one level deep; the product's own category stays unresolved.
    #[serde(default, deserialize_with = "optional_relation")]
    pub product: Option<Relation<Product>>,
    #[serde(default)]
    pub verified_purchase: Option<bool>,
}

pub type Review = Object<ReviewMetadata>;
