use axum::{Router, routing::get};
use tower::limit::ConcurrencyLimitLayer;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    services::{ServeDir, ServeFile},
};

use crate::{
    middleware::{faults, security_headers},
    state::AppState,
};

pub mod admin;
pub mod auth;
pub mod doc;
pub mod health;
pub mod orders;
pub mod params;
pub mod products;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/auth", auth::router())
        .nest("/products", products::router())
        .nest("/orders", orders::route())
        .nest("/admin", admin::router())
}

/// The full application: API, docs, static fallback and the shared middleware
/// stack. Request tracing is layered on by the binary.
pub fn create_app(state: AppState) -> Router {
    let public_dir = state.config.public_dir.clone();
    let static_files =
        ServeDir::new(&public_dir).fallback(ServeFile::new(public_dir.join("index.html")));
    let expose_details = state.config.exposes_fault_details();

    let router = Router::new()
        .nest("/api", create_api_router())
        .merge(doc::scalar_docs())
        .fallback_service(static_files)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            faults::expose_fault_details,
        ))
        .layer(CatchPanicLayer::custom(faults::panic_response(expose_details)));

    security_headers::apply(router)
        .layer(CorsLayer::permissive())
        .layer(RequestBodyLimitLayer::new(1024 * 1024))
        .layer(ConcurrencyLimitLayer::new(100))
        .with_state(state)
}
