//! Integration tests for the server-rendered screens
//!
//! Tests cover:
//! - Gateway focus and "Coming Soon" for closed platforms
//! - Dashboard grid, localization and lenient query parsing
//! - Activity sheet sections, extension ideas and the not-found page
//! - Serving a catalog loaded from disk

use std::io::Write;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use explore_common::{Catalog, ContentResolver};
use explore_web::{build_router, AppState};
use tower::util::ServiceExt; // for `oneshot` method

fn embedded_app() -> axum::Router {
    let catalog = Catalog::embedded().expect("embedded catalog must load");
    build_router(AppState::new(ContentResolver::new(Arc::new(catalog))))
}

/// Test helper: status and body text of a GET
async fn get_html(app: axum::Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body");
    (status, String::from_utf8(bytes.to_vec()).expect("Should be UTF-8"))
}

// =============================================================================
// Gateway
// =============================================================================

#[tokio::test]
async fn test_gateway_focuses_explore_by_default() {
    let (status, html) = get_html(embedded_app(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Startup Smartup"));
    assert!(html.contains("The K-12 Innovation Pathway"));
    assert!(html.contains("Project Explore"));
    assert!(html.contains("Project Pioneer"));
    assert!(html.contains("Project Launchpad"));
    // Only the focused panel shows its entry button
    assert!(html.contains(r#"href="/explore?season=1&amp;tier=1&amp;lang=en">Enter Platform"#));
    assert!(!html.contains("Coming Soon"));
}

#[tokio::test]
async fn test_gateway_closed_platform_is_coming_soon() {
    let (status, html) = get_html(embedded_app(), "/?platform=pioneer").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Coming Soon"));
    assert!(html.contains("Agile for Kids"));
    assert!(!html.contains("Enter Platform"));
}

#[tokio::test]
async fn test_gateway_unknown_platform_falls_back() {
    let (status, html) = get_html(embedded_app(), "/?platform=rocket").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Enter Platform"));
}

// =============================================================================
// Dashboard
// =============================================================================

#[tokio::test]
async fn test_dashboard_english_grid() {
    let (status, html) = get_html(embedded_app(), "/explore").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"<html lang="en">"#));
    assert!(html.contains("CH 1"));
    assert!(html.contains("Secret Garden"));
    assert!(html.contains("8:33"));
    assert!(html.contains("Thumbnails/Tier%201/Ch-01-t1.jpeg"));
    assert!(html.contains("Foundational vocabulary &amp; basic social concepts."));
    assert!(html.contains("Showing all 12 chapters for Tier 1 (Grades K-1)"));
    assert!(html.contains(
        r#"href="/explore/activity/1?season=1&amp;tier=1&amp;lang=en&amp;time=30&amp;budget=standard&amp;open=materials,steps,discussion""#
    ));
}

#[tokio::test]
async fn test_dashboard_spanish_tier_3() {
    let (status, html) = get_html(embedded_app(), "/explore?tier=3&lang=es").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"<html lang="es">"#));
    assert!(html.contains("CAP 11"));
    assert!(html.contains("El Jardín Generoso"));
    assert!(html.contains("7:07"));
    assert!(html.contains("Thumbnails-Spanish/Tier%203/Ch-11-t3.jpeg"));
    assert!(html.contains("Español"));
    assert!(html.contains("Mostrando los 12 capítulos para Tier 3 (Grados 3)"));
    assert!(html.contains(">Ver</button>") || html.contains("&#9654; Ver"));
}

#[tokio::test]
async fn test_dashboard_invalid_query_uses_defaults() {
    let (status, html) = get_html(embedded_app(), "/explore?tier=9&lang=fr&season=x").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(r#"<html lang="en">"#));
    assert!(html.contains("Showing all 12 chapters for Tier 1 (Grades K-1)"));
}

#[tokio::test]
async fn test_dashboard_inert_season() {
    let (status, html) = get_html(embedded_app(), "/explore?season=2").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("No chapters in this season yet."));
    assert!(!html.contains("chapter-card"));
    assert!(!html.contains("Showing all"));
    assert!(!html.contains("grid-footer"));
}

// =============================================================================
// Activity sheet
// =============================================================================

#[tokio::test]
async fn test_activity_sheet_default_sections() {
    let (status, html) = get_html(embedded_app(), "/explore/activity/1").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Seed Packet Budget"));
    assert!(html.contains("Chapter 1 &bull; Tier 1 (K-1)"));
    assert!(html.contains("Materials Needed"));
    assert!(html.contains("Step-by-Step Instructions"));
    assert!(html.contains("Discussion Questions"));
    assert!(html.contains("Tier 1 Adaptations (K-1)"));
    assert!(html.contains("Accommodations &amp; Differentiation"));
    assert!(html.contains("window.print()"));
    assert!(html.contains("Standard Classroom"));
    // 30 minute sheet: no extension ideas section
    assert!(!html.contains("Extension Ideas"));
    assert!(html.contains(r#"<section class="collapsible open" id="materials">"#));
    assert!(html.contains(r#"<section class="collapsible" id="tierAdaptations">"#));
}

#[tokio::test]
async fn test_activity_sheet_extended_variant() {
    let (status, html) = get_html(
        embedded_app(),
        "/explore/activity/2?tier=2&time=45&budget=premium&open=extensionIdeas",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Extension Ideas"));
    assert!(html.contains(r#"<section class="collapsible open" id="extensionIdeas">"#));
    assert!(html.contains(r#"<section class="collapsible" id="materials">"#));
    assert!(html.contains("Tier 2 Adaptations (Grade 2)"));
    assert!(html.contains("Premium ($4.00/student)"));
    assert!(html.contains("45 minutes"));
}

#[tokio::test]
async fn test_activity_sheet_spanish_title() {
    let (status, html) = get_html(embedded_app(), "/explore/activity/1?lang=es").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Presupuesto de Sobres de Semillas"));
    assert!(html.contains("El Jardín Secreto"));
}

#[tokio::test]
async fn test_activity_not_found_page() {
    let (status, html) = get_html(embedded_app(), "/explore/activity/13?tier=2").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Activity not found for Chapter 13"));
    assert!(html.contains(r#"href="/explore?season=1&amp;tier=2&amp;lang=en""#));
}

#[tokio::test]
async fn test_activity_non_numeric_chapter_is_not_found() {
    for (uri, label) in [
        ("/explore/activity/abc?lang=es", "abc"),
        ("/explore/activity/-1", "-1"),
        ("/explore/activity/99999999999", "99999999999"),
    ] {
        let (status, html) = get_html(embedded_app(), uri).await;

        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert!(html.contains(&format!("Activity not found for Chapter {}", label)), "{}", uri);
        assert!(html.contains("&larr; Back to Dashboard"), "{}", uri);
    }

    let (_, html) = get_html(embedded_app(), "/explore/activity/abc?lang=es").await;
    assert!(html.contains(r#"href="/explore?season=1&amp;tier=1&amp;lang=es""#));
}

#[tokio::test]
async fn test_stylesheet_served() {
    let request = Request::builder()
        .uri("/static/explore.css")
        .body(Body::empty())
        .unwrap();
    let response = embedded_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "text/css");
}

// =============================================================================
// Catalog from disk
// =============================================================================

#[tokio::test]
async fn test_catalog_file_without_activity() {
    // Drop chapter 2's activity; its card loses the worksheet link
    let mut document: serde_json::Value =
        serde_json::from_str(explore_common::catalog::EMBEDDED_CATALOG).unwrap();
    document["activities"]
        .as_array_mut()
        .unwrap()
        .retain(|a| a["chapterId"] != 2);

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(document.to_string().as_bytes()).unwrap();
    let catalog = Catalog::load(file.path()).unwrap();
    let app = build_router(AppState::new(ContentResolver::new(Arc::new(catalog))));

    let (status, html) = get_html(app.clone(), "/explore").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("/explore/activity/1?"));
    assert!(!html.contains("/explore/activity/2?"));

    let (status, html) = get_html(app, "/explore/activity/2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Activity not found for Chapter 2"));
}
