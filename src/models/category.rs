use serde::{Deserialize, Serialize};

use super::object::Object;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryMetadata {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Emoji or short glyph shown next to the name.
    #[serde(default)]
    pub icon: Option<String>,
}

pub type Category = Object<CategoryMetadata>;
