//! End-to-end tests for the thumbnail-serving flow.

mod helpers;

use std::sync::atomic::Ordering;

use axum::http::{StatusCode, header};
use image::GenericImageView;

use helpers::{TestApp, png_of};

#[tokio::test]
async fn test_first_request_generates_second_is_pure_read() {
    let app = TestApp::new().await;
    let category = app.store.add_category(None, "Sunsets", "sunsets");
    app.store.add_image(
        category.id,
        "Sunset",
        "sunset.jpg",
        "originals/sunset.png",
        (800, 600),
    );
    let format = app.store.add_format(400, 300, true);
    app.store.permit_category_format(category.id, format.id);
    app.write_media("originals/sunset.png", &png_of(800, 600));

    let url = format!("/thumbnails/{}/400x300-c/sunset.jpg", category.id);

    let (status, headers, first) = app.get(&url).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        headers.get(header::CONTENT_TYPE).unwrap(),
        "image/jpeg"
    );
    assert_eq!(&first[..2], &[0xFF, 0xD8], "JPEG magic");
    assert_eq!(app.renders.load(Ordering::SeqCst), 1);

    let (status, _headers, second) = app.get(&url).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(second, first);
    assert_eq!(
        app.renders.load(Ordering::SeqCst),
        1,
        "identical request must be served from the artifact store"
    );
}

#[tokio::test]
async fn test_cropped_and_uncropped_dimensions() {
    let app = TestApp::new().await;
    let category = app.store.add_category(None, "Shots", "shots");
    app.store.add_image(
        category.id,
        "Wide",
        "wide.jpg",
        "originals/wide.png",
        (800, 600),
    );
    let cropped = app.store.add_format(200, 200, true);
    let fitted = app.store.add_format(200, 200, false);
    app.store.permit_category_format(category.id, cropped.id);
    app.store.permit_category_format(category.id, fitted.id);
    app.write_media("originals/wide.png", &png_of(800, 600));

    let (status, _headers, body) = app
        .get(&format!("/thumbnails/{}/200x200-c/wide.jpg", category.id))
        .await;
    assert_eq!(status, StatusCode::OK);
    let img = image::load_from_memory(&body).unwrap();
    assert_eq!((img.width(), img.height()), (200, 200), "exact box when cropped");

    let (status, _headers, body) = app
        .get(&format!("/thumbnails/{}/200x200/wide.jpg", category.id))
        .await;
    assert_eq!(status, StatusCode::OK);
    let img = image::load_from_memory(&body).unwrap();
    assert_eq!(
        (img.width(), img.height()),
        (200, 150),
        "4:3 preserved within the box when uncropped"
    );
}

#[tokio::test]
async fn test_invalid_and_unpermitted_requests_are_plain_not_found() {
    let app = TestApp::new().await;
    let category = app.store.add_category(None, "Shots", "shots");
    app.store.add_image(
        category.id,
        "Photo",
        "photo.jpg",
        "originals/photo.png",
        (800, 600),
    );
    let format = app.store.add_format(400, 300, false);
    app.store.permit_category_format(category.id, format.id);

    let cases = [
        // Malformed size tokens.
        format!("/thumbnails/{}/0x10/photo.jpg", category.id),
        format!("/thumbnails/{}/10x0/photo.jpg", category.id),
        format!("/thumbnails/{}/abc/photo.jpg", category.id),
        format!("/thumbnails/{}/10x10x10/photo.jpg", category.id),
        format!("/thumbnails/{}/-c/photo.jpg", category.id),
        // Valid token, size not permitted.
        format!("/thumbnails/{}/999x999/photo.jpg", category.id),
        // Same size, wrong crop flag.
        format!("/thumbnails/{}/400x300-c/photo.jpg", category.id),
        // Unknown image.
        format!("/thumbnails/{}/400x300/other.jpg", category.id),
        // Unknown category.
        "/thumbnails/9999/400x300/photo.jpg".to_string(),
        // Non-numeric category.
        "/thumbnails/abc/400x300/photo.jpg".to_string(),
    ];

    for url in cases {
        let (status, json) = app.get_json(&url).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{url}");
        assert_eq!(
            json["message"], "Not found",
            "responses must not reveal why: {url}"
        );
    }
    assert_eq!(app.renders.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_ancestor_default_format_accepted() {
    let app = TestApp::new().await;
    let root = app.store.add_category(None, "Root", "root");
    let child = app.store.add_category(Some(root.id), "Child", "child");
    app.store.add_image(
        child.id,
        "Nested",
        "nested.jpg",
        "originals/nested.png",
        (640, 480),
    );
    let format = app.store.add_format(64, 64, true);
    app.store
        .update_category(root.id, |c| c.default_thumbnail_format_id = Some(format.id));
    app.write_media("originals/nested.png", &png_of(640, 480));

    let (status, _headers, body) = app
        .get(&format!("/thumbnails/{}/64x64-c/nested.jpg", child.id))
        .await;
    assert_eq!(status, StatusCode::OK);
    let img = image::load_from_memory(&body).unwrap();
    assert_eq!((img.width(), img.height()), (64, 64));
}

#[tokio::test]
async fn test_corrupt_source_is_server_error() {
    let app = TestApp::new().await;
    let category = app.store.add_category(None, "Broken", "broken");
    app.store.add_image(
        category.id,
        "Bad",
        "bad.jpg",
        "originals/bad.png",
        (800, 600),
    );
    let format = app.store.add_format(100, 100, false);
    app.store.permit_category_format(category.id, format.id);
    app.write_media("originals/bad.png", b"garbage, not a raster image");

    let (status, _json) = app
        .get_json(&format!("/thumbnails/{}/100x100/bad.jpg", category.id))
        .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
