//! Category browsing and representative-image resolution.

mod default_image;
pub(crate) mod service;

pub use default_image::DefaultImageResolver;
pub use service::{CategoryItem, CategoryPage, CategoryService, ImageItem};
