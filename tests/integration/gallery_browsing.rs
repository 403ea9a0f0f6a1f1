//! Integration tests for the browsing surface: index, category pages,
//! image pages, the tree, and health.

mod helpers;

use axum::http::StatusCode;
use image::GenericImageView;

use gallery_entity::store::GalleryStore;
use helpers::{TestApp, png_of};

#[tokio::test]
async fn test_index_lists_visible_roots() {
    let app = TestApp::new().await;
    app.store.add_category(None, "Travel", "travel");
    let hidden = app.store.add_category(None, "Drafts", "drafts");
    app.store.update_category(hidden.id, |c| c.hidden = true);

    let (status, json) = app.get_json("/").await;
    assert_eq!(status, StatusCode::OK);
    let categories = json["data"]["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 1);
    assert_eq!(categories[0]["url"], "/travel/");
    assert_eq!(categories[0]["title"], "Travel");
}

#[tokio::test]
async fn test_category_page_structure() {
    let app = TestApp::new().await;
    let travel = app.store.add_category(None, "Travel", "travel");
    let norway = app.store.add_category(Some(travel.id), "Norway", "norway");
    app.store
        .add_image(norway.id, "Fjord", "fjord.jpg", "2/fjord.jpg", (800, 600));

    let (status, json) = app.get_json("/travel/norway/").await;
    assert_eq!(status, StatusCode::OK);
    let data = &json["data"];
    assert_eq!(data["url"], "/travel/norway/");
    assert_eq!(data["parent"]["url"], "/travel/");
    assert_eq!(data["images"][0]["url"], "/travel/norway/fjord.jpg.html");

    let (status, _json) = app.get_json("/travel/sweden/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_image_page_lists_formats_and_serves_them() {
    let app = TestApp::new().await;
    let travel = app.store.add_category(None, "Travel", "travel");
    let image = app.store.add_image(
        travel.id,
        "Fjord",
        "fjord.jpg",
        "originals/fjord.png",
        (800, 600),
    );
    let format = app.store.add_format(400, 300, false);
    app.store.permit_category_format(travel.id, format.id);
    app.write_media("originals/fjord.png", &png_of(800, 600));

    let (status, json) = app.get_json("/travel/fjord.jpg.html").await;
    assert_eq!(status, StatusCode::OK);
    let formats = json["data"]["formats"].as_array().unwrap();
    assert_eq!(formats.len(), 1);
    assert_eq!(formats[0]["token"], "400x300");
    let thumb_url = formats[0]["url"].as_str().unwrap().to_string();
    assert_eq!(
        thumb_url,
        format!("/thumbnails/{}/400x300/fjord.jpg", travel.id)
    );

    // The advertised URL actually serves.
    let (status, _headers, body) = app.get(&thumb_url).await;
    assert_eq!(status, StatusCode::OK);
    let decoded = image::load_from_memory(&body).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (400, 300));

    // The image page view was counted; the thumbnail request was not.
    let reloaded = app.store.image_by_id(image.id).await.unwrap().unwrap();
    assert_eq!(reloaded.views, 1);
}

#[tokio::test]
async fn test_category_listing_shows_representative_thumbnails() {
    let app = TestApp::new().await;
    let travel = app.store.add_category(None, "Travel", "travel");
    let norway = app.store.add_category(Some(travel.id), "Norway", "norway");
    app.store
        .add_image(norway.id, "Fjord", "fjord.jpg", "2/fjord.jpg", (800, 600));
    let format = app.store.add_format(200, 200, true);
    app.store
        .update_category(travel.id, |c| c.default_thumbnail_format_id = Some(format.id));

    let (status, json) = app.get_json("/").await;
    assert_eq!(status, StatusCode::OK);
    let categories = json["data"]["categories"].as_array().unwrap();
    assert_eq!(
        categories[0]["thumbnail_url"],
        format!("/thumbnails/{}/200x200-c/fjord.jpg", norway.id)
    );
}

#[tokio::test]
async fn test_tree_endpoint() {
    let app = TestApp::new().await;
    let travel = app.store.add_category(None, "Travel", "travel");
    let norway = app.store.add_category(Some(travel.id), "Norway", "norway");
    app.store
        .add_image(norway.id, "Fjord", "fjord.jpg", "2/fjord.jpg", (800, 600));

    let (status, json) = app.get_json("/api/tree").await;
    assert_eq!(status, StatusCode::OK);
    let roots = json["data"].as_array().unwrap();
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0]["slug"], "travel");
    assert_eq!(roots[0]["children"][0]["image_count"], 1);
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;

    let (status, json) = app.get_json("/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");

    let (status, json) = app.get_json("/api/health/detailed").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["database"], "in-memory");
}
