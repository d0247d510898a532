//! HTTP API handlers for explore-web

pub mod activity;
pub mod buildinfo;
pub mod catalog;
pub mod health;
pub mod static_assets;

pub use activity::{get_activity, get_duration, get_thumbnail};
pub use buildinfo::get_build_info;
pub use catalog::{list_chapters, list_platforms, list_seasons, list_tiers};
pub use health::health_routes;
pub use static_assets::serve_explore_css;

use std::str::FromStr;

use serde::Deserialize;

use crate::ApiError;

/// Content-key query parameters shared by the JSON endpoints
///
/// Unlike the HTML screens, the API rejects values outside the closed sets
/// instead of falling back to defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct KeyQuery {
    pub season: Option<String>,
    pub tier: Option<String>,
    pub lang: Option<String>,
    pub time: Option<String>,
    pub budget: Option<String>,
}

/// Parse an optional key, using `default` when absent
fn parse_key<T>(raw: Option<&str>, default: T) -> Result<T, ApiError>
where
    T: FromStr<Err = explore_common::Error>,
{
    match raw {
        None => Ok(default),
        Some(value) => Ok(value.parse()?),
    }
}

fn parse_season(raw: Option<&str>) -> Result<u32, ApiError> {
    match raw {
        None => Ok(1),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ApiError::BadRequest(format!("Invalid season '{}'", value))),
    }
}
