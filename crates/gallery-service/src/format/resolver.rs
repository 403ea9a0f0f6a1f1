//! Resolution of effective thumbnail formats through the category tree.
//!
//! Two different inheritance semantics live here. Display formats resolve
//! first-match-wins: the nearest node with a non-empty set entirely
//! shadows its ancestors. Default formats are collected from every
//! ancestor, because each level's default is independently meaningful for
//! permission checks.

use std::sync::Arc;

use tracing::warn;

use gallery_core::result::AppResult;
use gallery_entity::category::Category;
use gallery_entity::format::ThumbnailFormat;
use gallery_entity::image::Image;
use gallery_entity::store::GalleryStore;

/// Upper bound on ancestor-walk depth.
///
/// The tree invariant says parent chains terminate at a root; the cap
/// turns corrupt data into an empty result instead of an endless walk.
const MAX_ANCESTOR_DEPTH: usize = 64;

/// Resolves effective display formats and default formats.
#[derive(Debug, Clone)]
pub struct FormatResolver {
    /// Entity store.
    store: Arc<dyn GalleryStore>,
}

impl FormatResolver {
    /// Create a new format resolver.
    pub fn new(store: Arc<dyn GalleryStore>) -> Self {
        Self { store }
    }

    /// The format set governing which thumbnail sizes are valid for an
    /// image: its own set if non-empty, else the nearest non-empty set on
    /// the category chain.
    pub async fn effective_display_formats_for_image(
        &self,
        image: &Image,
    ) -> AppResult<Vec<ThumbnailFormat>> {
        let own = self.store.image_display_formats(image.id).await?;
        if !own.is_empty() {
            return Ok(own);
        }
        self.display_formats_from(image.category_id).await
    }

    /// The format set governing a category: the nearest non-empty set on
    /// the chain from the category to the root, or empty.
    pub async fn effective_display_formats_for_category(
        &self,
        category: &Category,
    ) -> AppResult<Vec<ThumbnailFormat>> {
        self.display_formats_from(category.id).await
    }

    async fn display_formats_from(&self, category_id: i64) -> AppResult<Vec<ThumbnailFormat>> {
        let mut current = Some(category_id);
        for _ in 0..MAX_ANCESTOR_DEPTH {
            let Some(id) = current else {
                return Ok(Vec::new());
            };
            let formats = self.store.category_display_formats(id).await?;
            if !formats.is_empty() {
                return Ok(formats);
            }
            current = match self.store.category_by_id(id).await? {
                Some(category) => category.parent_id,
                None => None,
            };
        }
        warn!(category_id, "Ancestor walk exceeded depth cap");
        Ok(Vec::new())
    }

    /// The nearest default format on the chain from `category` to the
    /// root, if any.
    pub async fn effective_default_format(
        &self,
        category: &Category,
    ) -> AppResult<Option<ThumbnailFormat>> {
        let mut current = Some(category.clone());
        for _ in 0..MAX_ANCESTOR_DEPTH {
            let Some(node) = current else {
                return Ok(None);
            };
            if let Some(format_id) = node.default_thumbnail_format_id {
                return self.store.format_by_id(format_id).await;
            }
            current = self.parent_of(&node).await?;
        }
        warn!(category_id = category.id, "Ancestor walk exceeded depth cap");
        Ok(None)
    }

    /// Every ancestor's own default format, child-to-root.
    ///
    /// Unlike the display-format walk this never terminates early: a size
    /// valid anywhere up the default chain is accepted by the permission
    /// check.
    pub async fn effective_default_formats(
        &self,
        category: &Category,
    ) -> AppResult<Vec<ThumbnailFormat>> {
        let mut formats = Vec::new();
        let mut current = Some(category.clone());
        for _ in 0..MAX_ANCESTOR_DEPTH {
            let Some(node) = current else {
                return Ok(formats);
            };
            if let Some(format_id) = node.default_thumbnail_format_id {
                if let Some(format) = self.store.format_by_id(format_id).await? {
                    formats.push(format);
                }
            }
            current = self.parent_of(&node).await?;
        }
        warn!(category_id = category.id, "Ancestor walk exceeded depth cap");
        Ok(formats)
    }

    async fn parent_of(&self, category: &Category) -> AppResult<Option<Category>> {
        match category.parent_id {
            Some(parent_id) => self.store.category_by_id(parent_id).await,
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use gallery_database::MemoryGalleryStore;

    fn resolver(store: &Arc<MemoryGalleryStore>) -> FormatResolver {
        FormatResolver::new(Arc::clone(store) as Arc<dyn GalleryStore>)
    }

    #[tokio::test]
    async fn test_nearest_non_empty_set_shadows_ancestors() {
        let store = Arc::new(MemoryGalleryStore::new());
        let parent = store.add_category(None, "Parent", "parent");
        let child = store.add_category(Some(parent.id), "Child", "child");
        let image = store.add_image(child.id, "Photo", "photo.jpg", "1/photo.jpg", (800, 600));

        let a = store.add_format(400, 300, false);
        let b = store.add_format(800, 600, false);
        store.permit_category_format(child.id, a.id);
        store.permit_category_format(parent.id, b.id);

        let formats = resolver(&store)
            .effective_display_formats_for_image(&image)
            .await
            .unwrap();
        let ids: Vec<_> = formats.iter().map(|f| f.id).collect();
        assert_eq!(ids, [a.id], "nearest non-empty set wins, B is never seen");
    }

    #[tokio::test]
    async fn test_image_own_formats_override_category() {
        let store = Arc::new(MemoryGalleryStore::new());
        let root = store.add_category(None, "Root", "root");
        let image = store.add_image(root.id, "Photo", "photo.jpg", "1/photo.jpg", (800, 600));

        let own = store.add_format(64, 64, true);
        let inherited = store.add_format(400, 300, false);
        store.permit_image_format(image.id, own.id);
        store.permit_category_format(root.id, inherited.id);

        let formats = resolver(&store)
            .effective_display_formats_for_image(&image)
            .await
            .unwrap();
        let ids: Vec<_> = formats.iter().map(|f| f.id).collect();
        assert_eq!(ids, [own.id]);
    }

    #[tokio::test]
    async fn test_no_formats_anywhere_is_empty() {
        let store = Arc::new(MemoryGalleryStore::new());
        let root = store.add_category(None, "Root", "root");
        let child = store.add_category(Some(root.id), "Child", "child");
        let image = store.add_image(child.id, "Photo", "photo.jpg", "2/photo.jpg", (800, 600));

        let formats = resolver(&store)
            .effective_display_formats_for_image(&image)
            .await
            .unwrap();
        assert!(formats.is_empty());
    }

    #[tokio::test]
    async fn test_default_format_nearest_wins() {
        let store = Arc::new(MemoryGalleryStore::new());
        let root = store.add_category(None, "Root", "root");
        let child = store.add_category(Some(root.id), "Child", "child");

        let root_default = store.add_format(200, 200, true);
        let child_default = store.add_format(100, 100, true);
        store.update_category(root.id, |c| {
            c.default_thumbnail_format_id = Some(root_default.id)
        });
        store.update_category(child.id, |c| {
            c.default_thumbnail_format_id = Some(child_default.id)
        });

        let child = store.category_by_id(child.id).await.unwrap().unwrap();
        let format = resolver(&store)
            .effective_default_format(&child)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(format.id, child_default.id);
    }

    #[tokio::test]
    async fn test_default_formats_collects_every_ancestor() {
        let store = Arc::new(MemoryGalleryStore::new());
        let root = store.add_category(None, "Root", "root");
        let mid = store.add_category(Some(root.id), "Mid", "mid");
        let leaf = store.add_category(Some(mid.id), "Leaf", "leaf");

        let root_default = store.add_format(200, 200, true);
        let leaf_default = store.add_format(100, 100, true);
        store.update_category(root.id, |c| {
            c.default_thumbnail_format_id = Some(root_default.id)
        });
        store.update_category(leaf.id, |c| {
            c.default_thumbnail_format_id = Some(leaf_default.id)
        });

        let leaf = store.category_by_id(leaf.id).await.unwrap().unwrap();
        let formats = resolver(&store)
            .effective_default_formats(&leaf)
            .await
            .unwrap();
        let ids: Vec<_> = formats.iter().map(|f| f.id).collect();
        assert_eq!(ids, [leaf_default.id, root_default.id], "child-to-root order");
    }

    #[tokio::test]
    async fn test_default_format_absent_everywhere() {
        let store = Arc::new(MemoryGalleryStore::new());
        let root = store.add_category(None, "Root", "root");

        let root = store.category_by_id(root.id).await.unwrap().unwrap();
        let resolver = resolver(&store);
        assert!(resolver.effective_default_format(&root).await.unwrap().is_none());
        assert!(resolver.effective_default_formats(&root).await.unwrap().is_empty());
    }
}
