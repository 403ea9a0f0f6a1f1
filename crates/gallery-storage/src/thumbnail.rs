//! Thumbnail generation over storage providers.

use std::sync::Arc;

use tracing::debug;

use gallery_core::error::{AppError, ErrorKind};
use gallery_core::result::AppResult;
use gallery_core::traits::codec::ImageCodec;
use gallery_core::traits::storage::StorageProvider;
use gallery_core::types::Size;

/// Materializes thumbnail artifacts: reads an original from the media
/// store, renders it through the codec, and writes the artifact to the
/// thumbnail store (which replaces whole files atomically).
#[derive(Debug, Clone)]
pub struct ThumbnailGenerator {
    /// Storage provider holding the original images.
    media: Arc<dyn StorageProvider>,
    /// Storage provider receiving generated thumbnails.
    thumbnails: Arc<dyn StorageProvider>,
    /// Raster codec.
    codec: Arc<dyn ImageCodec>,
}

impl ThumbnailGenerator {
    /// Create a new thumbnail generator.
    pub fn new(
        media: Arc<dyn StorageProvider>,
        thumbnails: Arc<dyn StorageProvider>,
        codec: Arc<dyn ImageCodec>,
    ) -> Self {
        Self {
            media,
            thumbnails,
            codec,
        }
    }

    /// Render `source_path` at `size` and write the artifact to
    /// `dest_path`.
    ///
    /// A missing or unreadable source is a `Decode` failure; write
    /// failures surface as `Storage`. Both are fatal to the request.
    pub async fn generate(
        &self,
        source_path: &str,
        dest_path: &str,
        size: Size,
        crop: bool,
    ) -> AppResult<()> {
        let source = self.media.read_bytes(source_path).await.map_err(|e| {
            if e.is_not_found() {
                AppError::new(
                    ErrorKind::Decode,
                    format!("Source image not readable: {source_path}"),
                )
            } else {
                e
            }
        })?;

        let codec = Arc::clone(&self.codec);
        let rendered = tokio::task::spawn_blocking(move || codec.render(&source, size, crop))
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Internal, "Thumbnail task panicked", e)
            })??;

        self.thumbnails.write(dest_path, rendered).await?;

        debug!(
            source = source_path,
            dest = dest_path,
            %size,
            crop,
            "Generated thumbnail"
        );
        Ok(())
    }

    /// Read the intrinsic pixel dimensions of a stored original.
    pub async fn probe_dimensions(&self, source_path: &str) -> AppResult<Size> {
        let source = self.media.read_bytes(source_path).await?;
        self.codec.dimensions(&source)
    }
}
