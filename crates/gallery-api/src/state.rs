//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use gallery_core::config::AppConfig;
use gallery_entity::store::GalleryStore;
use gallery_service::{CategoryService, ImageService, ThumbnailService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL pool, absent when running over the in-memory store.
    pub db_pool: Option<PgPool>,
    /// Entity store.
    pub store: Arc<dyn GalleryStore>,
    /// Category browsing service.
    pub category_service: Arc<CategoryService>,
    /// Image page service.
    pub image_service: Arc<ImageService>,
    /// Thumbnail-serving orchestrator.
    pub thumbnail_service: Arc<ThumbnailService>,
}
