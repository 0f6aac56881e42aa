/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// Storefront SDK bound to the configured bucket. Clones share one
    /// HTTP connection pool.
    pub sdk: cosmic_storefront::StorefrontSdk,
}
