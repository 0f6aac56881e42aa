use std::sync::Arc;

use axum::extract::State;
use axum::response::Html;
use cosmic_storefront::{pages, render};

use crate::error::AppError;
use crate::state::AppState;

/// GET /
///
/// Hero, category grid, every product and the first three reviews.
pub async fn home(State(state): State<Arc<AppState>>) -> Result<Html<String>, AppError> {
    let page = pages::home(&state.sdk).await?;
    Ok(Html(render::render_home(&page)))
}
