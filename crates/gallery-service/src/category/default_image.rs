//! Representative-image search over a category subtree.

use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};

use gallery_core::result::AppResult;
use gallery_entity::category::Category;
use gallery_entity::image::Image;
use gallery_entity::store::GalleryStore;

/// Finds the image that represents a category in listings.
///
/// Two-phase depth-first search, first phase wins. The explicit-default
/// phase follows only `default_image` pointers through the subtree; the
/// first-image phase runs only when the whole subtree has no explicit
/// default, and takes each category's first image in sibling order.
#[derive(Debug, Clone)]
pub struct DefaultImageResolver {
    /// Entity store.
    store: Arc<dyn GalleryStore>,
}

impl DefaultImageResolver {
    /// Create a new default-image resolver.
    pub fn new(store: Arc<dyn GalleryStore>) -> Self {
        Self { store }
    }

    /// Resolve the representative image for `category`.
    ///
    /// Returns `None` only when the category and its entire subtree hold
    /// no images and no default-image pointers.
    pub async fn default_image(&self, category: &Category) -> AppResult<Option<Image>> {
        if let Some(image) = self.explicit_default(category).await? {
            return Ok(Some(image));
        }
        self.first_image(category).await
    }

    /// Phase 1: the category's own `default_image`, else the first explicit
    /// default found depth-first in its child subtrees.
    fn explicit_default<'a>(
        &'a self,
        category: &'a Category,
    ) -> BoxFuture<'a, AppResult<Option<Image>>> {
        async move {
            if let Some(image_id) = category.default_image_id {
                if let Some(image) = self.store.image_by_id(image_id).await? {
                    return Ok(Some(image));
                }
            }
            for child in self.store.category_children(category.id).await? {
                if let Some(image) = self.explicit_default(&child).await? {
                    return Ok(Some(image));
                }
            }
            Ok(None)
        }
        .boxed()
    }

    /// Phase 2: the category's own first image, else the first image found
    /// depth-first in its child subtrees.
    fn first_image<'a>(
        &'a self,
        category: &'a Category,
    ) -> BoxFuture<'a, AppResult<Option<Image>>> {
        async move {
            if let Some(image) = self.store.category_images(category.id).await?.into_iter().next()
            {
                return Ok(Some(image));
            }
            for child in self.store.category_children(category.id).await? {
                if let Some(image) = self.first_image(&child).await? {
                    return Ok(Some(image));
                }
            }
            Ok(None)
        }
        .boxed()
    }
}
