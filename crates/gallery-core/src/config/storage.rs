//! Media and thumbnail storage configuration.

use serde::{Deserialize, Serialize};

/// Storage locations for original media and generated thumbnails.
///
/// Both roots are served through the local storage provider. The thumbnail
/// root doubles as the artifact cache: once generated, a thumbnail is never
/// invalidated by the gallery itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Root directory holding the original uploaded images.
    #[serde(default = "default_media_root")]
    pub media_root: String,
    /// Root directory receiving generated thumbnails.
    #[serde(default = "default_thumbnails_root")]
    pub thumbnails_root: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            media_root: default_media_root(),
            thumbnails_root: default_thumbnails_root(),
        }
    }
}

fn default_media_root() -> String {
    "./data/media".to_string()
}

fn default_thumbnails_root() -> String {
    "./data/thumbnails".to_string()
}
