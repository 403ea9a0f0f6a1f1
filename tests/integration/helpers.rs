//! Shared fixtures for integration tests: an assembled router over the
//! in-memory entity store, tempdir-backed storage providers, and a codec
//! wrapper that counts render invocations.

use std::io::Cursor;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use bytes::Bytes;
use tower::ServiceExt;

use gallery_api::{AppState, build_app};
use gallery_core::config::{AppConfig, DatabaseConfig};
use gallery_core::result::AppResult;
use gallery_core::traits::codec::ImageCodec;
use gallery_core::traits::storage::StorageProvider;
use gallery_core::types::Size;
use gallery_database::MemoryGalleryStore;
use gallery_entity::store::GalleryStore;
use gallery_service::{
    CategoryService, DefaultImageResolver, FormatResolver, ImageService, ThumbnailService,
};
use gallery_storage::{LocalStorageProvider, RasterCodec, ThumbnailGenerator};

/// Codec wrapper counting render invocations.
#[derive(Debug)]
struct CountingCodec {
    inner: RasterCodec,
    renders: Arc<AtomicUsize>,
}

impl ImageCodec for CountingCodec {
    fn render(&self, source: &[u8], size: Size, crop: bool) -> AppResult<Bytes> {
        self.renders.fetch_add(1, Ordering::SeqCst);
        self.inner.render(source, size, crop)
    }

    fn dimensions(&self, source: &[u8]) -> AppResult<Size> {
        self.inner.dimensions(source)
    }
}

/// A fully wired application over the in-memory store.
pub struct TestApp {
    pub app: Router,
    pub store: Arc<MemoryGalleryStore>,
    pub media_root: PathBuf,
    pub renders: Arc<AtomicUsize>,
    _media_dir: tempfile::TempDir,
    _thumbs_dir: tempfile::TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let media_dir = tempfile::tempdir().unwrap();
        let thumbs_dir = tempfile::tempdir().unwrap();

        let media = Arc::new(
            LocalStorageProvider::new(media_dir.path().to_str().unwrap())
                .await
                .unwrap(),
        ) as Arc<dyn StorageProvider>;
        let thumbnails = Arc::new(
            LocalStorageProvider::new(thumbs_dir.path().to_str().unwrap())
                .await
                .unwrap(),
        ) as Arc<dyn StorageProvider>;

        let renders = Arc::new(AtomicUsize::new(0));
        let codec = Arc::new(CountingCodec {
            inner: RasterCodec::default(),
            renders: Arc::clone(&renders),
        }) as Arc<dyn ImageCodec>;

        let store = Arc::new(MemoryGalleryStore::new());
        let dyn_store = Arc::clone(&store) as Arc<dyn GalleryStore>;

        let formats = FormatResolver::new(Arc::clone(&dyn_store));
        let default_images = DefaultImageResolver::new(Arc::clone(&dyn_store));
        let generator =
            ThumbnailGenerator::new(Arc::clone(&media), Arc::clone(&thumbnails), codec);

        let state = AppState {
            config: Arc::new(test_config()),
            db_pool: None,
            store: Arc::clone(&dyn_store),
            category_service: Arc::new(CategoryService::new(
                Arc::clone(&dyn_store),
                formats.clone(),
                default_images,
            )),
            image_service: Arc::new(ImageService::new(Arc::clone(&dyn_store), formats.clone())),
            thumbnail_service: Arc::new(ThumbnailService::new(
                dyn_store,
                thumbnails,
                generator,
                formats,
            )),
        };

        Self {
            app: build_app(state),
            store,
            media_root: media_dir.path().to_path_buf(),
            renders,
            _media_dir: media_dir,
            _thumbs_dir: thumbs_dir,
        }
    }

    /// Issue a GET request against the app.
    pub async fn get(&self, path: &str) -> (StatusCode, HeaderMap, Bytes) {
        let response = self
            .app
            .clone()
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, headers, body)
    }

    /// Issue a GET request and parse the JSON body.
    pub async fn get_json(&self, path: &str) -> (StatusCode, serde_json::Value) {
        let (status, _headers, body) = self.get(path).await;
        let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    /// Place an original image file into the media tree.
    pub fn write_media(&self, relative_path: &str, data: &[u8]) {
        let full = self.media_root.join(relative_path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, data).unwrap();
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        server: Default::default(),
        database: DatabaseConfig {
            url: String::new(),
            max_connections: 1,
            min_connections: 0,
            connect_timeout_seconds: 1,
            idle_timeout_seconds: 1,
        },
        storage: Default::default(),
        gallery: Default::default(),
        logging: Default::default(),
    }
}

/// A solid-color PNG of the given dimensions.
pub fn png_of(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([200, 100, 50]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}
