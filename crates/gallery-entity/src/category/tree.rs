//! Category tree structure for hierarchical display.

use serde::{Deserialize, Serialize};

/// A node in a rendered category tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryNode {
    /// Category ID.
    pub id: i64,
    /// Display title.
    pub title: String,
    /// URL slug.
    pub slug: String,
    /// Canonical category URL.
    pub url: String,
    /// Number of images directly in this category.
    pub image_count: u64,
    /// Child category nodes in sibling order.
    pub children: Vec<CategoryNode>,
}
