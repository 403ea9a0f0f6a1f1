//! The entity-store contract.

use async_trait::async_trait;

use gallery_core::result::AppResult;

use crate::category::Category;
use crate::format::ThumbnailFormat;
use crate::image::Image;

/// Read access to the gallery's entity graph, plus the view-counter
/// increments — the only writes the serving path ever performs.
///
/// Implemented over PostgreSQL in `gallery-database`, and by an in-memory
/// store used by tests and demos. Ordered listings return siblings by
/// `sequence`, then creation time; display-format sets preserve their
/// insertion order.
#[async_trait]
pub trait GalleryStore: Send + Sync + std::fmt::Debug + 'static {
    /// Fetch a category by ID.
    async fn category_by_id(&self, id: i64) -> AppResult<Option<Category>>;

    /// Fetch a category by parent and slug. `parent_id` of `None` addresses
    /// root categories.
    async fn category_by_slug(
        &self,
        parent_id: Option<i64>,
        slug: &str,
    ) -> AppResult<Option<Category>>;

    /// List root categories in sibling order.
    async fn root_categories(&self) -> AppResult<Vec<Category>>;

    /// List a category's direct children in sibling order.
    async fn category_children(&self, category_id: i64) -> AppResult<Vec<Category>>;

    /// List a category's images in their defined order.
    async fn category_images(&self, category_id: i64) -> AppResult<Vec<Image>>;

    /// Fetch an image by ID.
    async fn image_by_id(&self, id: i64) -> AppResult<Option<Image>>;

    /// Fetch an image by owning category and slug.
    async fn image_by_slug(&self, category_id: i64, slug: &str) -> AppResult<Option<Image>>;

    /// The formats directly permitted on a category, in insertion order.
    async fn category_display_formats(&self, category_id: i64) -> AppResult<Vec<ThumbnailFormat>>;

    /// The formats directly permitted on an image, in insertion order.
    async fn image_display_formats(&self, image_id: i64) -> AppResult<Vec<ThumbnailFormat>>;

    /// Fetch a thumbnail format by ID.
    async fn format_by_id(&self, id: i64) -> AppResult<Option<ThumbnailFormat>>;

    /// Record one more view of a category page.
    async fn increment_category_views(&self, category_id: i64) -> AppResult<()>;

    /// Record one more view of an image page.
    async fn increment_image_views(&self, image_id: i64) -> AppResult<()>;
}
