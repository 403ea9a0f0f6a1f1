//! Lumen Gallery server.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use gallery_api::{AppState, build_app, serve};
use gallery_core::config::AppConfig;
use gallery_core::error::AppError;
use gallery_core::traits::codec::ImageCodec;
use gallery_core::traits::storage::StorageProvider;
use gallery_database::{DatabasePool, DbGalleryStore, migration};
use gallery_entity::store::GalleryStore;
use gallery_service::{
    CategoryService, DefaultImageResolver, FormatResolver, ImageService, ThumbnailService,
};
use gallery_storage::{LocalStorageProvider, RasterCodec, ThumbnailGenerator};

#[tokio::main]
async fn main() {
    let env = std::env::var("GALLERY_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Lumen Gallery v{}", env!("CARGO_PKG_VERSION"));

    let db = DatabasePool::connect(&config.database).await?;
    migration::run_migrations(db.pool()).await?;

    let media = Arc::new(LocalStorageProvider::new(&config.storage.media_root).await?)
        as Arc<dyn StorageProvider>;
    let thumbnails = Arc::new(LocalStorageProvider::new(&config.storage.thumbnails_root).await?)
        as Arc<dyn StorageProvider>;
    let codec =
        Arc::new(RasterCodec::new(config.gallery.jpeg_quality)) as Arc<dyn ImageCodec>;

    let store = Arc::new(DbGalleryStore::new(db.pool().clone())) as Arc<dyn GalleryStore>;
    let formats = FormatResolver::new(Arc::clone(&store));
    let default_images = DefaultImageResolver::new(Arc::clone(&store));
    let generator =
        ThumbnailGenerator::new(Arc::clone(&media), Arc::clone(&thumbnails), codec);

    let category_service = Arc::new(CategoryService::new(
        Arc::clone(&store),
        formats.clone(),
        default_images,
    ));
    let image_service = Arc::new(ImageService::new(Arc::clone(&store), formats.clone()));
    let thumbnail_service = Arc::new(ThumbnailService::new(
        Arc::clone(&store),
        Arc::clone(&thumbnails),
        generator,
        formats,
    ));

    let state = AppState {
        config: Arc::new(config.clone()),
        db_pool: Some(db.pool().clone()),
        store,
        category_service,
        image_service,
        thumbnail_service,
    };

    let app = build_app(state);
    serve(app, &config.server).await
}
