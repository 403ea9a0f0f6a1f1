//! # gallery-service
//!
//! Business logic for Lumen Gallery: category/format inheritance
//! resolution, default-image search, category and image page assembly,
//! and the thumbnail-serving orchestrator.

pub mod category;
pub mod format;
pub mod image;
pub mod thumbnail;

pub use category::{CategoryService, DefaultImageResolver};
pub use format::FormatResolver;
pub use image::ImageService;
pub use thumbnail::ThumbnailService;
