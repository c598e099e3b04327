//! HTTP host for the screens
//!
//! Each module contributes its own `routes()`; they share one [`AppState`]
//! and one set of layers.

pub mod auth;
pub mod catalog;
pub mod error;
pub mod orders;
pub mod state;

pub use state::{AppState, SharedState};

use axum::{body::Body, extract::Request, middleware::Next, response::Response, Router};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

/// Builds the host router: catalog, auth and order routes behind request
/// logging and a permissive CORS policy.
pub fn create_app_router(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(catalog::routes())
        .merge(auth::routes())
        .merge(orders::routes())
        .layer(axum::middleware::from_fn(log_request))
        .layer(cors)
        .with_state(state)
}

async fn log_request(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    info!(%method, %uri, "request");

    let res = next.run(req).await;
    if !res.status().is_success() {
        warn!(%method, %uri, status = %res.status(), "request failed");
    }
    res
}
