//! Image repository implementation.

use sqlx::PgPool;

use gallery_core::error::{AppError, ErrorKind};
use gallery_core::result::AppResult;
use gallery_entity::format::ThumbnailFormat;
use gallery_entity::image::Image;

/// Repository for image reads and the image view counter.
#[derive(Debug, Clone)]
pub struct ImageRepository {
    pool: PgPool,
}

impl ImageRepository {
    /// Create a new image repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an image by ID.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Image>> {
        sqlx::query_as::<_, Image>("SELECT * FROM images WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find image", e))
    }

    /// Find an image by owning category and slug.
    pub async fn find_by_slug(&self, category_id: i64, slug: &str) -> AppResult<Option<Image>> {
        sqlx::query_as::<_, Image>("SELECT * FROM images WHERE category_id = $1 AND slug = $2")
            .bind(category_id)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find image by slug", e)
            })
    }

    /// List a category's images in their defined order.
    pub async fn find_by_category(&self, category_id: i64) -> AppResult<Vec<Image>> {
        sqlx::query_as::<_, Image>(
            "SELECT * FROM images WHERE category_id = $1 \
             ORDER BY sequence ASC, created_at ASC",
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list category images", e)
        })
    }

    /// The formats directly permitted on an image, in insertion order.
    pub async fn display_formats(&self, image_id: i64) -> AppResult<Vec<ThumbnailFormat>> {
        sqlx::query_as::<_, ThumbnailFormat>(
            "SELECT f.id, f.width, f.height, f.crop FROM thumbnail_formats f \
             INNER JOIN image_display_formats idf ON idf.format_id = f.id \
             WHERE idf.image_id = $1 ORDER BY idf.position ASC",
        )
        .bind(image_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to list image display formats",
                e,
            )
        })
    }

    /// Record one more view of an image page.
    pub async fn increment_views(&self, image_id: i64) -> AppResult<()> {
        sqlx::query("UPDATE images SET views = views + 1 WHERE id = $1")
            .bind(image_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to increment image views", e)
            })?;
        Ok(())
    }
}
