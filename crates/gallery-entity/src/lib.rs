//! # gallery-entity
//!
//! Domain entity models for Lumen Gallery: categories, images, thumbnail
//! formats, and the [`GalleryStore`] trait describing the reads (and the
//! two view-counter writes) the rest of the system performs against the
//! entity store.

pub mod category;
pub mod format;
pub mod image;
pub mod store;

pub use category::{Category, CategoryNode};
pub use format::ThumbnailFormat;
pub use image::Image;
pub use store::GalleryStore;
