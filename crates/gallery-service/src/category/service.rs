//! Category page assembly and slug-chain resolution.

use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use gallery_core::error::AppError;
use gallery_core::result::AppResult;
use gallery_core::types::paths;
use gallery_entity::category::{Category, CategoryNode};
use gallery_entity::store::GalleryStore;

use crate::category::default_image::DefaultImageResolver;
use crate::format::FormatResolver;

/// Ancestor-walk depth cap for URL construction.
const MAX_ANCESTOR_DEPTH: usize = 64;

/// A linked item in a category listing.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryItem {
    /// Canonical URL.
    pub url: String,
    /// Display title.
    pub title: String,
    /// Representative thumbnail, when one resolves.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

/// A linked image in a category listing.
#[derive(Debug, Clone, Serialize)]
pub struct ImageItem {
    /// Canonical page URL.
    pub url: String,
    /// Display title.
    pub title: String,
    /// Thumbnail at the category's effective default format, when one
    /// resolves.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

/// Everything a category page shows.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryPage {
    /// The category record.
    pub category: Category,
    /// Canonical URL of this page.
    pub url: String,
    /// Link to the parent category, or to the index for roots.
    pub parent: CategoryItem,
    /// Child categories in sibling order.
    pub child_categories: Vec<CategoryItem>,
    /// Images in their defined order.
    pub images: Vec<ImageItem>,
}

/// Builds category listings and resolves slug-chain URLs.
#[derive(Debug, Clone)]
pub struct CategoryService {
    /// Entity store.
    store: Arc<dyn GalleryStore>,
    /// Format inheritance resolver.
    formats: FormatResolver,
    /// Representative-image resolver.
    default_images: DefaultImageResolver,
}

impl CategoryService {
    /// Create a new category service.
    pub fn new(
        store: Arc<dyn GalleryStore>,
        formats: FormatResolver,
        default_images: DefaultImageResolver,
    ) -> Self {
        Self {
            store,
            formats,
            default_images,
        }
    }

    /// The index listing: visible root categories.
    pub async fn index(&self) -> AppResult<Vec<CategoryItem>> {
        let roots = self.store.root_categories().await?;
        let mut items = Vec::with_capacity(roots.len());
        for root in roots.iter().filter(|c| c.is_listed()) {
            items.push(self.category_item(root).await?);
        }
        Ok(items)
    }

    /// Assemble the page for the category at `path` (a slug-chain URL),
    /// recording the view.
    pub async fn category_page(&self, path: &str) -> AppResult<CategoryPage> {
        let category = resolve_slug_chain(&self.store, path)
            .await?
            .ok_or_else(|| AppError::not_found("Category not found"))?;

        let url = category_url_of(&self.store, &category).await?;

        let parent = match category.parent_id {
            Some(parent_id) => {
                let parent = self
                    .store
                    .category_by_id(parent_id)
                    .await?
                    .ok_or_else(|| AppError::not_found("Category not found"))?;
                CategoryItem {
                    url: category_url_of(&self.store, &parent).await?,
                    title: parent.title,
                    thumbnail_url: None,
                }
            }
            None => CategoryItem {
                url: "/".to_string(),
                title: "index".to_string(),
                thumbnail_url: None,
            },
        };

        let mut child_categories = Vec::new();
        for child in self.store.category_children(category.id).await? {
            if !child.is_listed() {
                continue;
            }
            child_categories.push(self.category_item(&child).await?);
        }

        let default_format = self.formats.effective_default_format(&category).await?;
        let mut images = Vec::new();
        for image in self.store.category_images(category.id).await? {
            let thumbnail_url = default_format
                .as_ref()
                .map(|format| paths::thumbnail_url(image.category_id, &format.token(), &image.slug));
            images.push(ImageItem {
                url: paths::image_url(&url, &image.slug),
                title: image.title,
                thumbnail_url,
            });
        }

        self.store.increment_category_views(category.id).await?;
        debug!(category_id = category.id, path, "Served category page");

        Ok(CategoryPage {
            url,
            parent,
            child_categories,
            images,
            category,
        })
    }

    /// The nested tree of visible categories.
    pub async fn tree(&self) -> AppResult<Vec<CategoryNode>> {
        let roots = self.store.root_categories().await?;
        let mut nodes = Vec::new();
        for root in roots.iter().filter(|c| c.is_listed()) {
            nodes.push(self.build_node(root).await?);
        }
        Ok(nodes)
    }

    fn build_node<'a>(
        &'a self,
        category: &'a Category,
    ) -> futures::future::BoxFuture<'a, AppResult<CategoryNode>> {
        use futures::FutureExt;
        async move {
            let mut children = Vec::new();
            for child in self.store.category_children(category.id).await? {
                if !child.is_listed() {
                    continue;
                }
                children.push(self.build_node(&child).await?);
            }
            Ok(CategoryNode {
                id: category.id,
                title: category.title.clone(),
                slug: category.slug.clone(),
                url: category_url_of(&self.store, category).await?,
                image_count: self.store.category_images(category.id).await?.len() as u64,
                children,
            })
        }
        .boxed()
    }

    /// A listing item for a category, with its representative thumbnail
    /// when both a default image and a default format resolve.
    async fn category_item(&self, category: &Category) -> AppResult<CategoryItem> {
        let thumbnail_url = match (
            self.default_images.default_image(category).await?,
            self.formats.effective_default_format(category).await?,
        ) {
            (Some(image), Some(format)) => Some(paths::thumbnail_url(
                image.category_id,
                &format.token(),
                &image.slug,
            )),
            _ => None,
        };

        Ok(CategoryItem {
            url: category_url_of(&self.store, category).await?,
            title: category.title.clone(),
            thumbnail_url,
        })
    }
}

/// Resolve a slug-chain URL (`a/b/c`, slashes already trimmed or not) to a
/// category by walking one child level per segment.
pub(crate) async fn resolve_slug_chain(
    store: &Arc<dyn GalleryStore>,
    path: &str,
) -> AppResult<Option<Category>> {
    let path = path.trim_matches('/');
    if path.is_empty() {
        return Ok(None);
    }

    let mut current: Option<Category> = None;
    for segment in path.split('/') {
        let parent_id = current.as_ref().map(|c| c.id);
        current = store.category_by_slug(parent_id, segment).await?;
        if current.is_none() {
            return Ok(None);
        }
    }
    Ok(current)
}

/// Canonical URL of a category: root-to-node slug chain.
pub(crate) async fn category_url_of(
    store: &Arc<dyn GalleryStore>,
    category: &Category,
) -> AppResult<String> {
    let mut slugs = vec![category.slug.clone()];
    let mut parent_id = category.parent_id;
    for _ in 0..MAX_ANCESTOR_DEPTH {
        let Some(id) = parent_id else { break };
        match store.category_by_id(id).await? {
            Some(parent) => {
                slugs.push(parent.slug);
                parent_id = parent.parent_id;
            }
            None => break,
        }
    }
    slugs.reverse();
    Ok(paths::category_url(&slugs))
}
