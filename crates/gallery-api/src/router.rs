//! Route definitions for the Lumen Gallery HTTP surface.
//!
//! The thumbnail endpoint and the small JSON API get explicit routes;
//! every other path falls through to slug-chain resolution, mirroring the
//! gallery's canonical URL scheme.

use axum::Router;
use axum::routing::get;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// Receives the fully-constructed `AppState` and threads it through every
/// route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/tree", get(handlers::gallery::tree))
        .route("/health", get(handlers::health::health_check))
        .route("/health/detailed", get(handlers::health::detailed_health));

    Router::new()
        .route("/", get(handlers::gallery::index))
        .route(
            "/thumbnails/{category_id}/{size}/{slug}",
            get(handlers::thumbnail::serve_thumbnail),
        )
        .nest("/api", api_routes)
        .fallback(handlers::gallery::page)
        .with_state(state)
}
