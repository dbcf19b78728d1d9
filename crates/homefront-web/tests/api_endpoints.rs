//! Integration tests for the JSON API and static fallback

use axum::body::Body;
use axum::http::{Request, StatusCode};
use homefront_core::SiteConfig;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

fn config_without_frontend(dist: &std::path::Path) -> SiteConfig {
    SiteConfig {
        dist_dir: dist.to_path_buf(),
        ..SiteConfig::default()
    }
}

async fn get(config: SiteConfig, uri: &str) -> (StatusCode, Vec<u8>) {
    let router = homefront_web::create_router(config);
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

#[tokio::test]
async fn test_health_reports_locales() {
    let dist = tempfile::tempdir().unwrap();
    let (status, body) = get(config_without_frontend(dist.path()), "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["site"], "Homefront");
    assert_eq!(json["locales"], serde_json::json!(["en", "ar"]));
    assert_eq!(json["frontend"], false);
}

#[tokio::test]
async fn test_config_is_camel_case() {
    let dist = tempfile::tempdir().unwrap();
    let config = SiteConfig {
        breakpoint_px: 768,
        ..config_without_frontend(dist.path())
    };
    let (status, body) = get(config, "/api/config").await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["breakpointPx"], 768);
    assert_eq!(json["navGapPx"], 30);
    assert_eq!(json["defaultLocale"], "en");
    assert!(json.get("distDir").is_none());
}

#[tokio::test]
async fn test_locale_dictionary() {
    let dist = tempfile::tempdir().unwrap();
    let (status, body) = get(config_without_frontend(dist.path()), "/api/locales/en").await;

    assert_eq!(status, StatusCode::OK);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["nav"]["buy"], "Buy");
    assert_eq!(json["nav"]["aboutUs"], "About Us");
}

#[tokio::test]
async fn test_unknown_locale_is_404() {
    let dist = tempfile::tempdir().unwrap();
    let (status, body) = get(config_without_frontend(dist.path()), "/api/locales/fr").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    let json: Value = serde_json::from_slice(&body).unwrap();
    assert!(json["error"].as_str().unwrap().contains("fr"));
}

#[tokio::test]
async fn test_root_without_build_explains_setup() {
    let dist = tempfile::tempdir().unwrap();
    let (status, body) = get(config_without_frontend(dist.path()), "/").await;

    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("trunk build"));
}

#[tokio::test]
async fn test_client_routes_fall_back_to_index() {
    let dist = tempfile::tempdir().unwrap();
    std::fs::write(
        dist.path().join("index.html"),
        "<!DOCTYPE html><html><body>homefront</body></html>",
    )
    .unwrap();

    let (status, body) = get(config_without_frontend(dist.path()), "/about").await;

    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(body).unwrap().contains("homefront"));
}
