//! The binary thumbnail-serving endpoint.

use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::Response;

use gallery_core::error::AppError;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /thumbnails/{category_id}/{size}/{slug}
///
/// The three path segments form the canonical artifact key. A non-numeric
/// category segment is indistinguishable from any other miss.
pub async fn serve_thumbnail(
    State(state): State<AppState>,
    Path((category_id, size, slug)): Path<(String, String, String)>,
) -> Result<Response, ApiError> {
    let category_id: i64 = category_id
        .parse()
        .map_err(|_| AppError::not_found("Image not found"))?;

    let artifact = state
        .thumbnail_service
        .serve(category_id, &size, &slug)
        .await?;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, artifact.content_type)
        .header(header::CONTENT_LENGTH, artifact.data.len())
        .header(header::CACHE_CONTROL, "public, max-age=86400")
        .body(Body::from(artifact.data))
        .map_err(|e| AppError::internal(format!("Response build failed: {e}")))?;

    Ok(response)
}
