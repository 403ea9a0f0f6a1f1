//! The thumbnail-serving orchestrator.
//!
//! Per request: cache lookup, then validate, then generate, then re-serve.
//! The artifact store is a permanent cache keyed by the request path — the
//! first request for a (category, size, slug) triple pays validation and
//! codec cost, every later request is a single storage read. Nothing here
//! evicts or invalidates artifacts.
//!
//! Concurrent first requests for the same triple may both generate; the
//! store's atomic whole-file replace makes that merely redundant work.

use std::sync::Arc;

use bytes::Bytes;
use tracing::debug;

use gallery_core::error::AppError;
use gallery_core::result::AppResult;
use gallery_core::traits::storage::StorageProvider;
use gallery_core::types::paths;
use gallery_core::types::SizeToken;
use gallery_entity::store::GalleryStore;
use gallery_storage::ThumbnailGenerator;

use crate::format::FormatResolver;

/// A served thumbnail.
#[derive(Debug)]
pub struct ThumbnailArtifact {
    /// Encoded image bytes.
    pub data: Bytes,
    /// MIME type of the artifact.
    pub content_type: &'static str,
}

/// Serves thumbnail artifacts, generating them on first request.
#[derive(Debug, Clone)]
pub struct ThumbnailService {
    /// Entity store.
    store: Arc<dyn GalleryStore>,
    /// Thumbnail artifact store.
    thumbnails: Arc<dyn StorageProvider>,
    /// Artifact generator (codec injected at construction).
    generator: ThumbnailGenerator,
    /// Format inheritance resolver.
    formats: FormatResolver,
}

impl ThumbnailService {
    /// Create a new thumbnail service.
    pub fn new(
        store: Arc<dyn GalleryStore>,
        thumbnails: Arc<dyn StorageProvider>,
        generator: ThumbnailGenerator,
        formats: FormatResolver,
    ) -> Self {
        Self {
            store,
            thumbnails,
            generator,
            formats,
        }
    }

    /// Serve the thumbnail for (`category_id`, `size_token`, `image_slug`).
    ///
    /// Every validation failure — unknown image, unparseable token, size
    /// outside the permitted set — is an indistinguishable `NotFound`, so
    /// the response never leaks which sizes exist. Generation failures are
    /// fatal and surface as server errors.
    pub async fn serve(
        &self,
        category_id: i64,
        size_token: &str,
        image_slug: &str,
    ) -> AppResult<ThumbnailArtifact> {
        let artifact_path = paths::artifact_path(category_id, size_token, image_slug);

        // Cache lookup. A hit needs no resolver or codec work.
        match self.thumbnails.read_bytes(&artifact_path).await {
            Ok(data) => {
                debug!(path = %artifact_path, "Thumbnail cache hit");
                return Ok(artifact(data));
            }
            Err(e) if e.is_not_found() => {}
            Err(e) => return Err(e),
        }

        // Validate.
        let image = self
            .store
            .image_by_slug(category_id, image_slug)
            .await?
            .ok_or_else(|| AppError::not_found("Image not found"))?;

        let token: SizeToken = size_token
            .parse()
            .map_err(|_| AppError::not_found("Unknown size"))?;

        let category = self
            .store
            .category_by_id(image.category_id)
            .await?
            .ok_or_else(|| AppError::not_found("Category not found"))?;

        // The permitted set is the union of the image's effective display
        // formats (first non-empty set up the chain) and every ancestor's
        // default format.
        let mut permitted = self
            .formats
            .effective_display_formats_for_image(&image)
            .await?;
        permitted.extend(self.formats.effective_default_formats(&category).await?);

        if !permitted.iter().any(|f| f.triple() == token.triple()) {
            return Err(AppError::not_found("Unknown size"));
        }

        // Generate, then re-serve the artifact just written.
        let size = token.size()?;
        self.generator
            .generate(&image.file_path, &artifact_path, size, token.crop)
            .await?;

        let data = self.thumbnails.read_bytes(&artifact_path).await?;
        Ok(artifact(data))
    }
}

fn artifact(data: Bytes) -> ThumbnailArtifact {
    ThumbnailArtifact {
        data,
        content_type: "image/jpeg",
    }
}
