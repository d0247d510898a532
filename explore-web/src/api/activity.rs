//! Resolver endpoints: activity sheet, video duration, thumbnail URL

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use explore_common::{
    ActivityLookup, BudgetVariant, Language, TierId, TimeVariant, DURATION_PLACEHOLDER,
};
use serde::Serialize;

use super::{parse_key, KeyQuery};
use crate::{ApiError, ApiResult, AppState};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DurationResponse {
    /// `null` when the path segment is not a number
    pub chapter_id: Option<u32>,
    pub tier: Option<u32>,
    pub duration: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailResponse {
    pub chapter_id: u32,
    pub url: String,
    /// For clients to swap in when `url` fails to load
    pub fallback_url: &'static str,
}

/// GET /api/activity/:chapter_id?tier=&time=&budget=
///
/// 404 when the chapter has no activity (including non-numeric ids); 400
/// for a tier, time or budget outside its closed set.
pub async fn get_activity(
    State(state): State<AppState>,
    Path(raw_chapter): Path<String>,
    Query(query): Query<KeyQuery>,
) -> ApiResult<Response> {
    let chapter_id = raw_chapter.parse::<u32>().map_err(|_| {
        ApiError::NotFound(format!("Activity not found for Chapter {}", raw_chapter))
    })?;
    let tier = parse_key(query.tier.as_deref(), TierId::default())?;
    let time = parse_key(query.time.as_deref(), TimeVariant::default())?;
    let budget = parse_key(query.budget.as_deref(), BudgetVariant::default())?;

    // The view borrows the catalog, so serialize it here
    let lookup = state.resolver.resolve_activity(chapter_id, tier, time, budget);
    match lookup {
        ActivityLookup::Found(view) => Ok(Json(view).into_response()),
        ActivityLookup::NotFound { chapter_id } => Err(ApiError::NotFound(format!(
            "Activity not found for Chapter {}",
            chapter_id
        ))),
    }
}

/// GET /api/duration/:chapter_id/:tier
///
/// Always 200; unknown chapters and tiers yield the placeholder.
pub async fn get_duration(
    State(state): State<AppState>,
    Path((raw_chapter, raw_tier)): Path<(String, String)>,
) -> Json<DurationResponse> {
    let chapter_id = raw_chapter.parse::<u32>().ok();
    let tier = raw_tier.parse::<u32>().ok();
    let duration = match (chapter_id, tier) {
        (Some(chapter_id), Some(tier)) => state.resolver.resolve_duration(chapter_id, tier),
        _ => DURATION_PLACEHOLDER,
    };

    Json(DurationResponse {
        chapter_id,
        tier,
        duration: duration.to_string(),
    })
}

/// GET /api/thumbnail/:chapter_id?tier=&lang=
pub async fn get_thumbnail(
    State(state): State<AppState>,
    Path(raw_chapter): Path<String>,
    Query(query): Query<KeyQuery>,
) -> ApiResult<Json<ThumbnailResponse>> {
    let chapter_id = raw_chapter
        .parse::<u32>()
        .map_err(|_| ApiError::BadRequest(format!("Invalid chapter id '{}'", raw_chapter)))?;
    let tier = parse_key(query.tier.as_deref(), TierId::default())?;
    let language = parse_key(query.lang.as_deref(), Language::default())?;

    Ok(Json(ThumbnailResponse {
        chapter_id,
        url: state.resolver.resolve_thumbnail_url(chapter_id, tier, language),
        fallback_url: state.resolver.fallback_image_url(),
    }))
}
