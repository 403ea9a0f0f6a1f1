//! Category repository implementation.

use sqlx::PgPool;

use gallery_core::error::{AppError, ErrorKind};
use gallery_core::result::AppResult;
use gallery_entity::category::Category;
use gallery_entity::format::ThumbnailFormat;

/// Repository for category reads and the category view counter.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    pool: PgPool,
}

impl CategoryRepository {
    /// Create a new category repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a category by ID.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Category>> {
        sqlx::query_as::<_, Category>("SELECT * FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find category", e))
    }

    /// Find a category by parent and slug. A `None` parent addresses roots.
    pub async fn find_by_slug(
        &self,
        parent_id: Option<i64>,
        slug: &str,
    ) -> AppResult<Option<Category>> {
        sqlx::query_as::<_, Category>(
            "SELECT * FROM categories WHERE parent_id IS NOT DISTINCT FROM $1 AND slug = $2",
        )
        .bind(parent_id)
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find category by slug", e)
        })
    }

    /// List root categories in sibling order.
    pub async fn find_roots(&self) -> AppResult<Vec<Category>> {
        sqlx::query_as::<_, Category>(
            "SELECT * FROM categories WHERE parent_id IS NULL \
             ORDER BY sequence ASC, created_at ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list root categories", e)
        })
    }

    /// List direct children of a category in sibling order.
    pub async fn find_children(&self, parent_id: i64) -> AppResult<Vec<Category>> {
        sqlx::query_as::<_, Category>(
            "SELECT * FROM categories WHERE parent_id = $1 \
             ORDER BY sequence ASC, created_at ASC",
        )
        .bind(parent_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list children", e))
    }

    /// The formats directly permitted on a category, in insertion order.
    pub async fn display_formats(&self, category_id: i64) -> AppResult<Vec<ThumbnailFormat>> {
        sqlx::query_as::<_, ThumbnailFormat>(
            "SELECT f.id, f.width, f.height, f.crop FROM thumbnail_formats f \
             INNER JOIN category_display_formats cdf ON cdf.format_id = f.id \
             WHERE cdf.category_id = $1 ORDER BY cdf.position ASC",
        )
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                "Failed to list category display formats",
                e,
            )
        })
    }

    /// Record one more view of a category page.
    pub async fn increment_views(&self, category_id: i64) -> AppResult<()> {
        sqlx::query("UPDATE categories SET views = views + 1 WHERE id = $1")
            .bind(category_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to increment category views", e)
            })?;
        Ok(())
    }
}
