//! Query modules for the storefront SDK.
//!
//! Each module provides a query struct that borrows from a
//! [`Connection`](crate::connection::Connection) and exposes one async method
//! per query shape. Every method asks the store to resolve relations exactly
//! one level deep and maps a not-found response to an empty or absent result.

pub mod categories;
pub mod products;
pub mod reviews;

pub use categories::CategoryQuery;
pub use products::ProductQuery;
pub use reviews::ReviewQuery;
