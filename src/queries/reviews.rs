//! Review queries.
//!
//! Reviews come back with their product resolved one level deep, so the
//! embedded product's category is only an id.

use crate::config::{RELATION_DEPTH, REVIEW_PROPS, TYPE_REVIEWS};
use crate::connection::{Connection, Fetched};
use crate::error::{Operation, Result, StorefrontError};
use crate::models::Review;
use crate::object_query::ObjectQuery;

// ---------------------------------------------------------------------------
// ReviewQuery
// ---------------------------------------------------------------------------

/// Query interface for the `reviews` object type.
pub struct ReviewQuery<'a> {
    conn: &'a Connection,
}

impl<'a> ReviewQuery<'a> {
    /// Create a new `ReviewQuery` bound to the given connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    fn base() -> ObjectQuery {
        let mut qb = ObjectQuery::new(TYPE_REVIEWS);
        qb.props(REVIEW_PROPS).depth(RELATION_DEPTH);
        qb
    }

    /// List every review in store order.
    pub async fn list(&self) -> Result<Vec<Review>> {
        let qb = Self::base();
        self.conn
            .find::<Review>(&qb)
            .await
            .map(Fetched::into_vec)
            .map_err(|e| StorefrontError::fetch(Operation::ListAllReviews, e))
    }

    /// List the reviews attached to `product_id`.
    pub async fn list_by_product(&self, product_id: &str) -> Result<Vec<Review>> {
        let mut qb = Self::base();
        qb.where_metadata("product", product_id);

        self.conn
            .find::<Review>(&qb)
            .await
            .map(Fetched::into_vec)
            .map_err(|e| StorefrontError::fetch(Operation::ListReviewsByProduct, e))
    }
}
