//! Category queries.

use tracing::warn;

use crate::config::{CATALOG_PROPS, RELATION_DEPTH, TYPE_CATEGORIES};
use crate::connection::{Connection, Fetched};
use crate::error::{Operation, Result, StorefrontError};
use crate::models::Category;
use crate::object_query::ObjectQuery;

// ---------------------------------------------------------------------------
// CategoryQuery
// ---------------------------------------------------------------------------

/// Query interface for the `categories` object type.
pub struct CategoryQuery<'a> {
    conn: &'a Connection,
}

impl<'a> CategoryQuery<'a> {
    /// Create a new `CategoryQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn base() -> ObjectQuery {
        let mut qb = ObjectQuery::new(TYPE_CATEGORIES);
        qb.props(CATALOG_PROPS).depth(RELATION_DEPTH);
        qb
    }

    /// List every category in store order.
    pub async fn list(&self) -> Result<Vec<Category>> {
        let qb = Self::base();
        self.conn
            .find::<Category>(&qb)
            .await
            .map(Fetched::into_vec)
            .map_err(|e| StorefrontError::fetch(Operation::ListCategories, e))
    }

    /// Get a single category by slug.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<Category>> {
        let mut qb = Self::base();
        qb.where_eq("slug", slug);

        let fetched = self
            .conn
            .find_one::<Category>(&qb)
            .await
            .map_err(|e| StorefrontError::fetch(Operation::GetCategoryBySlug, e))?;

        if !fetched.is_found() {
            warn!(slug, "category not found");
        }
        Ok(fetched.into_option())
    }

    /// Slugs of every category, for pre-rendering category pages.
    pub async fn slugs(&self) -> Result<Vec<String>> {
        let categories = self.list().await?;
        Ok(categories.into_iter().map(|c| c.slug).collect())
    }
}
