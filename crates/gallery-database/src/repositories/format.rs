//! Thumbnail format repository implementation.

use sqlx::PgPool;

use gallery_core::error::{AppError, ErrorKind};
use gallery_core::result::AppResult;
use gallery_entity::format::ThumbnailFormat;

/// Repository for registered thumbnail formats.
#[derive(Debug, Clone)]
pub struct FormatRepository {
    pool: PgPool,
}

impl FormatRepository {
    /// Create a new format repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a format by ID.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<ThumbnailFormat>> {
        sqlx::query_as::<_, ThumbnailFormat>("SELECT * FROM thumbnail_formats WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find format", e))
    }

    /// List all registered formats in canonical order.
    pub async fn find_all(&self) -> AppResult<Vec<ThumbnailFormat>> {
        sqlx::query_as::<_, ThumbnailFormat>(
            "SELECT * FROM thumbnail_formats ORDER BY width ASC, height ASC, crop ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list formats", e))
    }
}
