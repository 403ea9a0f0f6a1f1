//! Thumbnail format entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use gallery_core::types::SizeToken;

/// A registered thumbnail format.
///
/// Persisted with a surrogate id, but matched by value: two formats with
/// equal (width, height, crop) are the same format for permission checks.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ThumbnailFormat {
    /// Surrogate identifier.
    pub id: i64,
    /// Target width in pixels.
    pub width: i32,
    /// Target height in pixels.
    pub height: i32,
    /// Exact-box output (center-square crop before scaling) when true;
    /// bounding-box fit when false.
    pub crop: bool,
}

impl ThumbnailFormat {
    /// The (width, height, crop) triple defining this format's identity.
    pub fn triple(&self) -> (u32, u32, bool) {
        (self.width as u32, self.height as u32, self.crop)
    }

    /// The canonical size token for this format.
    pub fn token(&self) -> SizeToken {
        SizeToken::new(self.width as u32, self.height as u32, self.crop)
    }
}
