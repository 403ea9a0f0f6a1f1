//! # gallery-storage
//!
//! Blob storage for Lumen Gallery: the local filesystem provider backing
//! both the media tree and the thumbnail artifact tree, the raster codec
//! built on the `image` crate, and the [`ThumbnailGenerator`] composing
//! the two.

pub mod codec;
pub mod providers;
pub mod thumbnail;

pub use codec::RasterCodec;
pub use providers::local::LocalStorageProvider;
pub use thumbnail::ThumbnailGenerator;
