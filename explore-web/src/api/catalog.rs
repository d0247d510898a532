//! Catalog listing endpoints
//!
//! Read-only views of the reference tables: chapter cards for a season,
//! tiers, seasons and gateway platforms.

use axum::{
    extract::{Query, State},
    Json,
};
use explore_common::catalog::{Bilingual, Platform, Tier};
use explore_common::resolver::ChapterCard;
use explore_common::{Error, Language, TierId};
use serde::Serialize;
use tracing::debug;

use super::{parse_key, parse_season, KeyQuery};
use crate::{ApiResult, AppState};

/// Chapter grid for one season
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterListResponse {
    pub season: u32,
    pub tier: TierId,
    pub language: Language,
    pub fallback_image_url: &'static str,
    pub chapters: Vec<ChapterCard>,
}

/// Season with its chapter count (zero for inert seasons)
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonSummary {
    pub id: u32,
    pub title: Bilingual,
    pub chapter_count: usize,
}

/// GET /api/catalog/chapters?season=&tier=&lang=
///
/// Unknown seasons are 404; declared seasons without chapters return an
/// empty list.
pub async fn list_chapters(
    State(state): State<AppState>,
    Query(query): Query<KeyQuery>,
) -> ApiResult<Json<ChapterListResponse>> {
    let season = parse_season(query.season.as_deref())?;
    let tier = parse_key(query.tier.as_deref(), TierId::default())?;
    let language = parse_key(query.lang.as_deref(), Language::default())?;

    let resolver = &state.resolver;
    if resolver.season(season).is_none() {
        return Err(Error::LookupMiss(format!("season {}", season)).into());
    }

    let chapters = resolver.chapter_cards(season, tier, language);
    debug!(
        "Listing {} chapters for season {} tier {} ({})",
        chapters.len(),
        season,
        tier,
        language
    );

    Ok(Json(ChapterListResponse {
        season,
        tier,
        language,
        fallback_image_url: resolver.fallback_image_url(),
        chapters,
    }))
}

/// GET /api/catalog/tiers
pub async fn list_tiers(State(state): State<AppState>) -> Json<Vec<Tier>> {
    Json(state.resolver.catalog().tiers().to_vec())
}

/// GET /api/catalog/seasons
pub async fn list_seasons(State(state): State<AppState>) -> Json<Vec<SeasonSummary>> {
    let resolver = &state.resolver;
    let seasons = resolver
        .catalog()
        .seasons()
        .iter()
        .map(|season| SeasonSummary {
            id: season.id,
            title: season.title.clone(),
            chapter_count: resolver.chapters_for_season(season.id).len(),
        })
        .collect();
    Json(seasons)
}

/// GET /api/catalog/platforms
pub async fn list_platforms(State(state): State<AppState>) -> Json<Vec<Platform>> {
    Json(state.resolver.platforms().to_vec())
}
