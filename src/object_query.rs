//! Object query builder for the content API's `objects` endpoint.
//!
//! Filters are collected into the JSON `query` parameter; property selection,
//! relation depth and limit become their own query-string parameters. Builder
//! methods return `&mut Self` for chaining.
//!
//! # Example
//!
//! ```rust
//! use cosmic_storefront::ObjectQuery;
//! let params = ObjectQuery::new("products")
//!     .where_metadata("category", "cat-1")
//!     .props(&["id", "slug", "metadata"])
//!     .depth(1)
//!     .build();
//! assert_eq!(params[1], ("props".to_string(), "id,slug,metadata".to_string()));
//! ```

use serde_json::{Map, Value};

/// Builds the query-string parameters for one object lookup.
///
/// Credentials are not part of the query; the connection appends them.
#[derive(Debug, Clone)]
pub struct ObjectQuery {
    object_type: String,
    filters: Vec<(String, String)>,
    props: Vec<String>,
    depth: Option<u8>,
    limit_val: Option<usize>,
}

impl ObjectQuery {
    /// Create a query over objects of the given type.
    pub fn new(object_type: &str) -> Self {
        Self {
            object_type: object_type.to_string(),
            filters: Vec::new(),
            props: Vec::new(),
            depth: None,
            limit_val: None,
        }
    }

    /// Add a top-level equality filter, e.g. `slug = "blue-mug"`.
    pub fn where_eq(&mut self, field: &str, value: &str) -> &mut Self {
        self.filters.push((field.to_string(), value.to_string()));
        self
    }

    /// Add an equality filter on a metadata field (`metadata.{field}`).
    ///
    /// For relation fields the value is the related object's id.
    pub fn where_metadata(&mut self, field: &str, value: &str) -> &mut Self {
        self.filters
            .push((format!("metadata.{}", field), value.to_string()));
        self
    }

    /// Set the properties to return (replaces any previous selection).
    pub fn props(&mut self, props: &[&str]) -> &mut Self {
        self.props = props.iter().map(|p| p.to_string()).collect();
        self
    }

    /// Set how many levels of object relations the store resolves inline.
    pub fn depth(&mut self, depth: u8) -> &mut Self {
        self.depth = Some(depth);
        self
    }

    /// Set the maximum number of objects to return.
    pub fn limit(&mut self, n: usize) -> &mut Self {
        self.limit_val = Some(n);
        self
    }

    /// The object type this query targets.
    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    /// The JSON filter document sent as the `query` parameter.
    pub fn filter(&self) -> Value {
        let mut map = Map::new();
        map.insert("type".to_string(), Value::String(self.object_type.clone()));
        for (field, value) in &self.filters {
            map.insert(field.clone(), Value::String(value.clone()));
        }
        Value::Object(map)
    }

    /// Build the final list of query-string parameters.
    ///
    /// The `query` parameter always comes first; optional parameters follow
    /// in the order `props`, `depth`, `limit`.
    pub fn build(&self) -> Vec<(String, String)> {
        let mut params = vec![("query".to_string(), self.filter().to_string())];

        if !self.props.is_empty() {
            params.push(("props".to_string(), self.props.join(",")));
        }

        if let Some(d) = self.depth {
            params.push(("depth".to_string(), d.to_string()));
        }

        if let Some(n) = self.limit_val {
            params.push(("limit".to_string(), n.to_string()));
        }

        params
    }
}
