//! Thumbnail serving.

mod service;

pub use service::{ThumbnailArtifact, ThumbnailService};
