//! Database-backed [`GalleryStore`] implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use gallery_core::result::AppResult;
use gallery_entity::category::Category;
use gallery_entity::format::ThumbnailFormat;
use gallery_entity::image::Image;
use gallery_entity::store::GalleryStore;

use crate::repositories::{CategoryRepository, FormatRepository, ImageRepository};

/// [`GalleryStore`] over PostgreSQL, delegating to the per-entity
/// repositories.
#[derive(Debug, Clone)]
pub struct DbGalleryStore {
    categories: CategoryRepository,
    images: ImageRepository,
    formats: FormatRepository,
}

impl DbGalleryStore {
    /// Create a store over the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            categories: CategoryRepository::new(pool.clone()),
            images: ImageRepository::new(pool.clone()),
            formats: FormatRepository::new(pool),
        }
    }
}

#[async_trait]
impl GalleryStore for DbGalleryStore {
    async fn category_by_id(&self, id: i64) -> AppResult<Option<Category>> {
        self.categories.find_by_id(id).await
    }

    async fn category_by_slug(
        &self,
        parent_id: Option<i64>,
        slug: &str,
    ) -> AppResult<Option<Category>> {
        self.categories.find_by_slug(parent_id, slug).await
    }

    async fn root_categories(&self) -> AppResult<Vec<Category>> {
        self.categories.find_roots().await
    }

    async fn category_children(&self, category_id: i64) -> AppResult<Vec<Category>> {
        self.categories.find_children(category_id).await
    }

    async fn category_images(&self, category_id: i64) -> AppResult<Vec<Image>> {
        self.images.find_by_category(category_id).await
    }

    async fn image_by_id(&self, id: i64) -> AppResult<Option<Image>> {
        self.images.find_by_id(id).await
    }

    async fn image_by_slug(&self, category_id: i64, slug: &str) -> AppResult<Option<Image>> {
        self.images.find_by_slug(category_id, slug).await
    }

    async fn category_display_formats(&self, category_id: i64) -> AppResult<Vec<ThumbnailFormat>> {
        self.categories.display_formats(category_id).await
    }

    async fn image_display_formats(&self, image_id: i64) -> AppResult<Vec<ThumbnailFormat>> {
        self.images.display_formats(image_id).await
    }

    async fn format_by_id(&self, id: i64) -> AppResult<Option<ThumbnailFormat>> {
        self.formats.find_by_id(id).await
    }

    async fn increment_category_views(&self, category_id: i64) -> AppResult<()> {
        self.categories.increment_views(category_id).await
    }

    async fn increment_image_views(&self, image_id: i64) -> AppResult<()> {
        self.images.increment_views(image_id).await
    }
}
