//! Product queries.
//!
//! Products come back with their category resolved inline; the category's own
//! relations (if any) are not followed.

use tracing::warn;

use crate::config::{CATALOG_PROPS, RELATION_DEPTH, TYPE_PRODUCTS};
use crate::connection::{Connection, Fetched};
use crate::error::{Operation, Result, StorefrontError};
use crate::models::Product;
use crate::object_query::ObjectQuery;

// ---------------------------------------------------------------------------
// ProductQuery
// ---------------------------------------------------------------------------

/// Query interface for the `products` object type.
pub struct ProductQuery<'a> {
    conn: &'a Connection,
}

impl<'a> ProductQuery<'a> {
    /// Create a new `ProductQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn base() -> ObjectQuery {
        let mut qb = ObjectQuery::new(TYPE_PRODUCTS);
        qb.props(CATALOG_PROPS).depth(RELATION_DEPTH);
        qb
    }

    /// List every product in store order.
    pub async fn list(&self) -> Result<Vec<Product>> {
        let qb = Self::base();
        self.conn
            .find::<Product>(&qb)
            .await
            .map(Fetched::into_vec)
            .map_err(|e| StorefrontError::fetch(Operation::ListProducts, e))
    }

    /// List the products whose category relation points at `category_id`.
    ///
    /// The filter runs on the store, not here.
    pub async fn list_by_category(&self, category_id: &str) -> Result<Vec<Product>> {
        let mut qb = Self::base();
        qb.where_metadata("category", category_id);

        self.conn
            .find::<Product>(&qb)
            .await
            .map(Fetched::into_vec)
            .map_err(|e| StorefrontError::fetch(Operation::ListProductsByCategory, e))
    }

    /// Get a single product by slug.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<Product>> {
        let mut qb = Self::base();
        qb.where_eq("slug", slug);

        let fetched = self
            .conn
            .find_one::<Product>(&qb)
            .await
            .map_err(|e| StorefrontError::fetch(Operation::GetProductBySlug, e))?;

        if !fetched.is_found() {
            warn!(slug, "product not found");
        }
        Ok(fetched.into_option())
    }

    /// Slugs of every product, for pre-rendering product pages.
    pub async fn slugs(&self) -> Result<Vec<String>> {
        let products = self.list().await?;
        Ok(products.into_iter().map(|p| p.slug).collect())
    }
}
