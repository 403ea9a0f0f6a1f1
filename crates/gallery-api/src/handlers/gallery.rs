//! Gallery browsing handlers: index, category pages, image pages.

use axum::Json;
use axum::extract::State;
use axum::http::Uri;

use gallery_core::error::AppError;
use gallery_core::types::paths::IMAGE_PAGE_SUFFIX;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /
pub async fn index(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    let categories = state.category_service.index().await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "data": { "categories": categories },
    })))
}

/// GET /api/tree
pub async fn tree(State(state): State<AppState>) -> Result<Json<serde_json::Value>, ApiError> {
    let tree = state.category_service.tree().await?;
    Ok(Json(serde_json::json!({ "success": true, "data": tree })))
}

/// Fallback handler resolving slug-chain URLs.
///
/// `/a/b/` is the category at that chain; `/a/b/slug.html` is an image
/// page. Everything unresolvable is a generic not-found.
pub async fn page(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Json<serde_json::Value>, ApiError> {
    let path = uri.path().trim_matches('/');
    if path.is_empty() {
        return index(State(state)).await;
    }

    if let Some(stripped) = path.strip_suffix(IMAGE_PAGE_SUFFIX) {
        let (category_path, slug) = match stripped.rsplit_once('/') {
            Some((category_path, slug)) => (category_path, slug),
            None => return Err(AppError::not_found("Image not found").into()),
        };
        let page = state.image_service.image_page(category_path, slug).await?;
        return Ok(Json(serde_json::json!({ "success": true, "data": page })));
    }

    let page = state.category_service.category_page(path).await?;
    Ok(Json(serde_json::json!({ "success": true, "data": page })))
}
