//! In-memory [`GalleryStore`] implementation.
//!
//! Backs demos and tests that exercise the gallery without a PostgreSQL
//! instance. Ordering semantics match the database store: siblings sort by
//! (sequence, created_at, id) and display-format sets keep insertion order.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Utc;

use gallery_core::result::AppResult;
use gallery_entity::category::Category;
use gallery_entity::format::ThumbnailFormat;
use gallery_entity::image::Image;
use gallery_entity::store::GalleryStore;

#[derive(Debug, Default)]
struct Inner {
    categories: Vec<Category>,
    images: Vec<Image>,
    formats: Vec<ThumbnailFormat>,
    /// (category_id, format_id) pairs in insertion order.
    category_formats: Vec<(i64, i64)>,
    /// (image_id, format_id) pairs in insertion order.
    image_formats: Vec<(i64, i64)>,
    next_id: i64,
}

impl Inner {
    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

/// An in-memory entity store with a fluent seeding API.
#[derive(Debug, Default)]
pub struct MemoryGalleryStore {
    inner: RwLock<Inner>,
}

impl MemoryGalleryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a thumbnail format.
    pub fn add_format(&self, width: i32, height: i32, crop: bool) -> ThumbnailFormat {
        let mut inner = self.write();
        let format = ThumbnailFormat {
            id: inner.allocate_id(),
            width,
            height,
            crop,
        };
        inner.formats.push(format.clone());
        format
    }

    /// Add a category under the given parent.
    pub fn add_category(&self, parent_id: Option<i64>, title: &str, slug: &str) -> Category {
        let mut inner = self.write();
        let now = Utc::now();
        let category = Category {
            id: inner.allocate_id(),
            parent_id,
            title: title.to_string(),
            slug: slug.to_string(),
            description: String::new(),
            hidden: false,
            private: false,
            owner_id: None,
            views: 0,
            sequence: inner.categories.len() as i32,
            default_thumbnail_format_id: None,
            default_image_id: None,
            created_at: now,
            updated_at: now,
        };
        inner.categories.push(category.clone());
        category
    }

    /// Add an image to a category.
    pub fn add_image(
        &self,
        category_id: i64,
        title: &str,
        slug: &str,
        file_path: &str,
        (width, height): (i32, i32),
    ) -> Image {
        let mut inner = self.write();
        let now = Utc::now();
        let image = Image {
            id: inner.allocate_id(),
            category_id,
            title: title.to_string(),
            slug: slug.to_string(),
            file_path: file_path.to_string(),
            width,
            height,
            description: String::new(),
            views: 0,
            sequence: inner.images.len() as i32,
            created_at: now,
            updated_at: now,
        };
        inner.images.push(image.clone());
        image
    }

    /// Apply an in-place update to a category, e.g. to set default pointers
    /// or visibility flags.
    pub fn update_category(&self, category_id: i64, update: impl FnOnce(&mut Category)) {
        let mut inner = self.write();
        if let Some(category) = inner.categories.iter_mut().find(|c| c.id == category_id) {
            update(category);
            category.updated_at = Utc::now();
        }
    }

    /// Permit a format directly on a category.
    pub fn permit_category_format(&self, category_id: i64, format_id: i64) {
        self.write().category_formats.push((category_id, format_id));
    }

    /// Permit a format directly on an image.
    pub fn permit_image_format(&self, image_id: i64, format_id: i64) {
        self.write().image_formats.push((image_id, format_id));
    }

    fn formats_for(inner: &Inner, pairs: &[(i64, i64)], key: i64) -> Vec<ThumbnailFormat> {
        pairs
            .iter()
            .filter(|(owner, _)| *owner == key)
            .filter_map(|(_, format_id)| inner.formats.iter().find(|f| f.id == *format_id))
            .cloned()
            .collect()
    }

    fn sibling_sorted<T>(mut items: Vec<T>, key: impl Fn(&T) -> (i32, i64)) -> Vec<T> {
        items.sort_by_key(|item| key(item));
        items
    }
}

#[async_trait]
impl GalleryStore for MemoryGalleryStore {
    async fn category_by_id(&self, id: i64) -> AppResult<Option<Category>> {
        Ok(self.read().categories.iter().find(|c| c.id == id).cloned())
    }

    async fn category_by_slug(
        &self,
        parent_id: Option<i64>,
        slug: &str,
    ) -> AppResult<Option<Category>> {
        Ok(self
            .read()
            .categories
            .iter()
            .find(|c| c.parent_id == parent_id && c.slug == slug)
            .cloned())
    }

    async fn root_categories(&self) -> AppResult<Vec<Category>> {
        let roots: Vec<Category> = self
            .read()
            .categories
            .iter()
            .filter(|c| c.parent_id.is_none())
            .cloned()
            .collect();
        Ok(Self::sibling_sorted(roots, |c| (c.sequence, c.id)))
    }

    async fn category_children(&self, category_id: i64) -> AppResult<Vec<Category>> {
        let children: Vec<Category> = self
            .read()
            .categories
            .iter()
            .filter(|c| c.parent_id == Some(category_id))
            .cloned()
            .collect();
        Ok(Self::sibling_sorted(children, |c| (c.sequence, c.id)))
    }

    async fn category_images(&self, category_id: i64) -> AppResult<Vec<Image>> {
        let images: Vec<Image> = self
            .read()
            .images
            .iter()
            .filter(|i| i.category_id == category_id)
            .cloned()
            .collect();
        Ok(Self::sibling_sorted(images, |i| (i.sequence, i.id)))
    }

    async fn image_by_id(&self, id: i64) -> AppResult<Option<Image>> {
        Ok(self.read().images.iter().find(|i| i.id == id).cloned())
    }

    async fn image_by_slug(&self, category_id: i64, slug: &str) -> AppResult<Option<Image>> {
        Ok(self
            .read()
            .images
            .iter()
            .find(|i| i.category_id == category_id && i.slug == slug)
            .cloned())
    }

    async fn category_display_formats(&self, category_id: i64) -> AppResult<Vec<ThumbnailFormat>> {
        let inner = self.read();
        Ok(Self::formats_for(&inner, &inner.category_formats, category_id))
    }

    async fn image_display_formats(&self, image_id: i64) -> AppResult<Vec<ThumbnailFormat>> {
        let inner = self.read();
        Ok(Self::formats_for(&inner, &inner.image_formats, image_id))
    }

    async fn format_by_id(&self, id: i64) -> AppResult<Option<ThumbnailFormat>> {
        Ok(self.read().formats.iter().find(|f| f.id == id).cloned())
    }

    async fn increment_category_views(&self, category_id: i64) -> AppResult<()> {
        let mut inner = self.write();
        if let Some(category) = inner.categories.iter_mut().find(|c| c.id == category_id) {
            category.views += 1;
        }
        Ok(())
    }

    async fn increment_image_views(&self, image_id: i64) -> AppResult<()> {
        let mut inner = self.write();
        if let Some(image) = inner.images.iter_mut().find(|i| i.id == image_id) {
            image.views += 1;
        }
        Ok(())
    }
}
