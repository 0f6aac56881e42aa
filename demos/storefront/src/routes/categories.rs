use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Html;
use cosmic_storefront::pages::{self, Missing, PageOutcome};
use cosmic_storefront::render;

use crate::error::AppError;
use crate::state::AppState;

/// GET /categories/{slug}
///
/// Products in one category, with that category highlighted in the sidebar.
pub async fn get_category(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<Html<String>, AppError> {
    match pages::category(&state.sdk, &slug).await? {
        PageOutcome::Found(page) => Ok(Html(render::render_category(&page))),
        PageOutcome::NotFound => Err(AppError::NotFound(Missing::Category)),
    }
}
