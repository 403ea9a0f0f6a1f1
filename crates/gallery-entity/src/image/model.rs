//! Image entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An image belonging to exactly one category.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Image {
    /// Unique image identifier.
    pub id: i64,
    /// Owning category.
    pub category_id: i64,
    /// Display title.
    pub title: String,
    /// URL slug, unique within the owning category.
    pub slug: String,
    /// Path of the stored original within the media store. Immutable once
    /// persisted; the slug derives from it.
    pub file_path: String,
    /// Intrinsic pixel width, captured at upload time.
    pub width: i32,
    /// Intrinsic pixel height, captured at upload time.
    pub height: i32,
    /// Free-form description.
    pub description: String,
    /// Number of times this image page has been served.
    pub views: i64,
    /// Manual ordering among siblings, independent of creation time.
    pub sequence: i32,
    /// When the image was created.
    pub created_at: DateTime<Utc>,
    /// When the image was last updated.
    pub updated_at: DateTime<Utc>,
}
