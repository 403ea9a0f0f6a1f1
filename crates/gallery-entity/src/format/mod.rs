//! Thumbnail format entity.

mod model;

pub use model::ThumbnailFormat;
