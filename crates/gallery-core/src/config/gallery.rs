//! Gallery rendering configuration.

use serde::{Deserialize, Serialize};

/// Settings governing thumbnail rendering and listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// JPEG encoding quality for generated thumbnails (1-100).
    #[serde(default = "default_jpeg_quality")]
    pub jpeg_quality: u8,
    /// Whether hidden categories appear in listings.
    #[serde(default)]
    pub list_hidden: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            jpeg_quality: default_jpeg_quality(),
            list_hidden: false,
        }
    }
}

fn default_jpeg_quality() -> u8 {
    86
}
