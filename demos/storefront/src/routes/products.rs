use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::Html;
use cosmic_storefront::pages::{self, Missing, PageOutcome};
use cosmic_storefront::render;
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ProductParams {
    /// Index of the gallery image to show large.
    pub image: Option<usize>,
}

/// GET /products
///
/// Every product with the category sidebar.
pub async fn list_products(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, AppError> {
    let page = pages::products(&state.sdk).await?;
    Ok(Html(render::render_products(&page)))
}

/// GET /products/{slug}?image=1
///
/// Product detail with gallery, pricing and reviews.
pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    Query(params): Query<ProductParams>,
) -> Result<Html<String>, AppError> {
    let selected = params.image.unwrap_or(0);

    match pages::product(&state.sdk, &slug, selected).await? {
        PageOutcome::Found(page) => Ok(Html(render::render_product(&page))),
        PageOutcome::NotFound => Err(AppError::NotFound(Missing::Product)),
    }
}
