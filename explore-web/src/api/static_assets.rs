//! Static asset handlers
//!
//! Embeds the stylesheet at compile time

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

const EXPLORE_CSS: &str = include_str!("../../static/explore.css");

/// GET /static/explore.css
pub async fn serve_explore_css() -> Response {
    (
        StatusCode::OK,
        [
            ("content-type", "text/css"),
            ("cache-control", "public, max-age=3600"),
        ],
        EXPLORE_CSS,
    )
        .into_response()
}
