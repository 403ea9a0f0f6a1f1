//! Category entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A node in the gallery's category tree.
///
/// The parent chain is a strict tree: every chain terminates at a root
/// category, and slugs are unique among siblings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    /// Unique category identifier.
    pub id: i64,
    /// Parent category ID (null for root categories).
    pub parent_id: Option<i64>,
    /// Display title.
    pub title: String,
    /// URL slug, unique among siblings.
    pub slug: String,
    /// Free-form description.
    pub description: String,
    /// Hidden categories are omitted from listings.
    pub hidden: bool,
    /// Private categories are visible to their owner only.
    pub private: bool,
    /// Owning user (null for unowned categories).
    pub owner_id: Option<i64>,
    /// Number of times this category page has been served.
    pub views: i64,
    /// Manual ordering among siblings, independent of creation time.
    pub sequence: i32,
    /// Format used when a thumbnail size is not specified, if set.
    pub default_thumbnail_format_id: Option<i64>,
    /// Explicit representative image, if set.
    pub default_image_id: Option<i64>,
    /// When the category was created.
    pub created_at: DateTime<Utc>,
    /// When the category was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Category {
    /// Check if this is a root category (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Whether this category appears in public listings.
    pub fn is_listed(&self) -> bool {
        !self.hidden && !self.private
    }
}
