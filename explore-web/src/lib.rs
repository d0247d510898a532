//! explore-web library - Project Explore catalog service
//!
//! Server-rendered gateway, chapter dashboard and printable activity sheets,
//! plus a read-only JSON API over the content resolver.

use axum::Router;
use chrono::{DateTime, Utc};
use explore_common::ContentResolver;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod error;
pub mod pages;

pub use error::{ApiError, ApiResult};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Lookups over the shared read-only catalog
    pub resolver: ContentResolver,
    /// Service start time, for /health uptime
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    /// Create new application state
    pub fn new(resolver: ContentResolver) -> Self {
        Self {
            resolver,
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    // HTML screens
    let pages = Router::new()
        .route("/", get(pages::gateway::gateway_page))
        .route("/explore", get(pages::dashboard::dashboard_page))
        .route(
            "/explore/activity/:chapter_id",
            get(pages::activity::activity_page),
        )
        .route("/static/explore.css", get(api::serve_explore_css));

    // JSON API
    let api = Router::new()
        .route("/api/catalog/chapters", get(api::list_chapters))
        .route("/api/catalog/tiers", get(api::list_tiers))
        .route("/api/catalog/seasons", get(api::list_seasons))
        .route("/api/catalog/platforms", get(api::list_platforms))
        .route("/api/activity/:chapter_id", get(api::get_activity))
        .route("/api/duration/:chapter_id/:tier", get(api::get_duration))
        .route("/api/thumbnail/:chapter_id", get(api::get_thumbnail))
        .route("/api/buildinfo", get(api::get_build_info))
        .merge(api::health_routes());

    Router::new()
        .merge(pages)
        .merge(api)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
