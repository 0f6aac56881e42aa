mod error;
mod routes;
mod state;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use state::AppState;

const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,cosmic_storefront=debug")),
        )
        .init();

    let sdk = match cosmic_storefront::StorefrontSdk::builder().from_env().build() {
        Ok(sdk) => sdk,
        Err(e) => {
            error!(error = %e, "storefront is not configured");
            std::process::exit(1);
        }
    };
    info!(%sdk, "SDK ready");

    let state = Arc::new(AppState { sdk });

    let app = Router::new()
        .route("/", get(routes::home::home))
        .route("/products", get(routes::products::list_products))
        .route("/products/{slug}", get(routes::products::get_product))
        .route("/categories/{slug}", get(routes::categories::get_category))
        .fallback(routes::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = std::env::var("STOREFRONT_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            error!(%addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };
    info!("Listening on http://{addr}");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server stopped");
    }
}
