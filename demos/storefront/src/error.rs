use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use cosmic_storefront::pages::Missing;
use cosmic_storefront::render;
use cosmic_storefront::StorefrontError;
use tracing::error;

/// Unified error type that renders as an HTML page with an appropriate HTTP
/// status code.
pub enum AppError {
    /// The requested entity does not exist.
    NotFound(Missing),
    /// A content fetch or configuration failure.
    Storefront(StorefrontError),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Storefront(StorefrontError::Fetch { .. }) => StatusCode::BAD_GATEWAY,
            AppError::Storefront(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            AppError::NotFound(missing) => {
                (status, Html(render::render_not_found(missing))).into_response()
            }
            AppError::Storefront(e) => {
                error!(error = %e, operation = ?e.operation(), "page failed");
                (status, Html(error_page(status))).into_response()
            }
        }
    }
}

impl From<StorefrontError> for AppError {
    fn from(e: StorefrontError) -> Self {
        AppError::Storefront(e)
    }
}

fn error_page(status: StatusCode) -> String {
    let meta = cosmic_storefront::pages::PageMeta {
        title: cosmic_storefront::view::page_title("Something Went Wrong"),
        description: "The store could not load this page.".to_string(),
    };
    let body = format!(
        r#"<div class="error-page">
    <h1>Something Went Wrong</h1>
    <p>We could not load this page ({}). Please try again shortly.</p>
    <a href="/" class="btn">Back to Home</a>
</div>"#,
        status.as_u16()
    );
    render::layout(&meta, &body)
}
