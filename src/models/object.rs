use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Object: Common envelope of every content item
// ---------------------------------------------------------------------------

/// A content item as returned by the store, generic over its metadata shape.
///
/// Only the requested properties are populated, so the type discriminator and
/// timestamps are optional here even though the store always has them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Object<M> {
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    pub metadata: M,
    #[serde(rename = "type", default)]
    pub type_field: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub modified_at: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

/// An object whose metadata is kept as a free-form JSON map.
pub type RawObject = Object<serde_json::Map<String, serde_json::Value>>;

// ---------------------------------------------------------------------------
// ImageRef: Stored media reference
// ---------------------------------------------------------------------------

/// A stored image. `imgix_url` accepts resize/crop query parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    pub url: String,
    pub imgix_url: String,
}

// ---------------------------------------------------------------------------
// Relation: One level of shallow join
// ---------------------------------------------------------------------------

/// A reference from one object's metadata to another object.
///
/// Queries resolve relations one level deep: a product's category arrives as
/// `Resolved`, but the category of a product embedded in a review arrives as
/// `Unresolved(id)`. Nothing in this crate follows an unresolved id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Relation<T> {
    Resolved(Box<T>),
    Unresolved(String),
}

impl<T> Relation<T> {
    /// The related object, when it was resolved inline.
    pub fn resolved(&self) -> Option<&T> {
        match self {
            Relation::Resolved(obj) => Some(obj),
            Relation::Unresolved(_) => None,
        }
    }
}

impl<M> Relation<Object<M>> {
    /// Id of the related object, resolved or not.
    pub fn id(&self) -> &str {
        match self {
            Relation::Resolved(obj) => &obj.id,
            Relation::Unresolved(id) => id,
        }
    }
}

/// Deserialize an optional relation; `null` and `""` both mean "no relation".
pub(crate) fn optional_relation<'de, D, T>(deserializer: D) -> Result<Option<Relation<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let rel = Option::<Relation<T>>::deserialize(deserializer)?;
    Ok(rel.filter(|r| !matches!(r, Relation::Unresolved(id) if id.is_empty())))
}

/// Deserialize a value, substituting `T::default()` for `null`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
