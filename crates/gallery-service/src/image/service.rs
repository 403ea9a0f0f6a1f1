//! Image page assembly.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use gallery_core::error::AppError;
use gallery_core::result::AppResult;
use gallery_core::types::paths;
use gallery_entity::image::Image;
use gallery_entity::store::GalleryStore;

use crate::category::service::{category_url_of, resolve_slug_chain};
use crate::format::FormatResolver;

/// A renderable size of an image.
#[derive(Debug, Clone, Serialize)]
pub struct FormatLink {
    /// Canonical size token, e.g. `400x300-c`.
    pub token: String,
    /// Target width in pixels.
    pub width: u32,
    /// Target height in pixels.
    pub height: u32,
    /// Whether the thumbnail is center-cropped.
    pub crop: bool,
    /// Thumbnail URL at this size.
    pub url: String,
}

/// Everything an image page shows.
#[derive(Debug, Clone, Serialize)]
pub struct ImagePage {
    /// The image record.
    pub image: Image,
    /// Canonical page URL.
    pub url: String,
    /// Canonical URL of the owning category.
    pub category_url: String,
    /// The image's effective display formats with their thumbnail URLs.
    pub formats: Vec<FormatLink>,
}

/// Assembles image pages.
#[derive(Debug, Clone)]
pub struct ImageService {
    /// Entity store.
    store: Arc<dyn GalleryStore>,
    /// Format inheritance resolver.
    formats: FormatResolver,
}

impl ImageService {
    /// Create a new image service.
    pub fn new(store: Arc<dyn GalleryStore>, formats: FormatResolver) -> Self {
        Self { store, formats }
    }

    /// Assemble the page for the image at (`category_path`, `slug`),
    /// recording the view.
    pub async fn image_page(&self, category_path: &str, slug: &str) -> AppResult<ImagePage> {
        let category = resolve_slug_chain(&self.store, category_path)
            .await?
            .ok_or_else(|| AppError::not_found("Category not found"))?;

        let image = self
            .store
            .image_by_slug(category.id, slug)
            .await?
            .ok_or_else(|| AppError::not_found("Image not found"))?;

        let category_url = category_url_of(&self.store, &category).await?;
        let url = paths::image_url(&category_url, &image.slug);

        let formats = self
            .formats
            .effective_display_formats_for_image(&image)
            .await?
            .iter()
            .map(|format| {
                let token = format.token();
                FormatLink {
                    token: token.to_string(),
                    width: token.width,
                    height: token.height,
                    crop: token.crop,
                    url: paths::thumbnail_url(image.category_id, &token, &image.slug),
                }
            })
            .collect();

        self.store.increment_image_views(image.id).await?;
        debug!(image_id = image.id, slug, "Served image page");

        Ok(ImagePage {
            url,
            category_url,
            formats,
            image,
        })
    }
}
