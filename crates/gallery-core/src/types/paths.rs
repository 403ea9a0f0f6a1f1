//! Canonical identifier construction.
//!
//! The thumbnail artifact path doubles as the blob-store cache key and the
//! externally addressable URL tail; its format is a compatibility contract
//! and must not change.

use crate::types::size_token::SizeToken;

/// Fixed suffix appended to image page URLs.
pub const IMAGE_PAGE_SUFFIX: &str = ".html";

/// Mount point of the thumbnail-serving surface.
pub const THUMBNAILS_MOUNT: &str = "/thumbnails";

/// Artifact path from a raw size-token string: `{category_id}/{token}/{slug}`.
///
/// The raw request token is the cache key — serving reads it back before
/// the token is ever parsed.
pub fn artifact_path(category_id: i64, size_token: &str, image_slug: &str) -> String {
    format!("{category_id}/{size_token}/{image_slug}")
}

/// Canonical artifact path for a thumbnail: `{category_id}/{token}/{slug}`.
pub fn thumbnail_path(category_id: i64, token: &SizeToken, image_slug: &str) -> String {
    artifact_path(category_id, &token.to_string(), image_slug)
}

/// Externally addressable URL of a thumbnail artifact.
pub fn thumbnail_url(category_id: i64, token: &SizeToken, image_slug: &str) -> String {
    format!(
        "{THUMBNAILS_MOUNT}/{}",
        thumbnail_path(category_id, token, image_slug)
    )
}

/// Canonical URL for a category: root-to-node slug chain with leading and
/// trailing slashes, e.g. `/travel/norway/`.
pub fn category_url<S: AsRef<str>>(slug_chain: &[S]) -> String {
    if slug_chain.is_empty() {
        return "/".to_string();
    }
    let mut url = String::from("/");
    for slug in slug_chain {
        url.push_str(slug.as_ref());
        url.push('/');
    }
    url
}

/// Canonical URL for an image page: owning category URL + slug + suffix.
pub fn image_url(category_url: &str, image_slug: &str) -> String {
    format!("{category_url}{image_slug}{IMAGE_PAGE_SUFFIX}")
}
