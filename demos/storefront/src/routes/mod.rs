pub mod categories;
pub mod home;
pub mod products;

use cosmic_storefront::pages::Missing;

use crate::error::AppError;

/// Fallback for unknown paths.
pub async fn not_found() -> AppError {
    AppError::NotFound(Missing::Page)
}
