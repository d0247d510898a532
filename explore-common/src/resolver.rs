//! Content resolver
//!
//! Maps (chapter, tier, language, time variant, budget variant) keys to
//! display content. Pure lookups over the shared read-only catalog: no I/O,
//! no mutation, no failure beyond "not found", which is always answered
//! with a placeholder or an explicit `NotFound` value.

use std::sync::Arc;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::catalog::{
    Accommodation, Bilingual, BudgetInfo, BudgetVariant, Catalog, Chapter, Language, Platform,
    PlatformId, Season, Step, Tier, TierDifferentiation, TierId, TimeVariant,
};

/// Shown when a video duration is unknown
pub const DURATION_PLACEHOLDER: &str = "—";

/// Public host for chapter thumbnails
pub const DEFAULT_THUMBNAIL_BASE: &str =
    "https://raw.githubusercontent.com/jghiglia2380/project-explore-thumbnails/main";

/// Generic image the browser swaps in when a thumbnail fails to load
pub const FALLBACK_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1634152962476-4b8a00e1915c?auto=format&fit=crop&w=800";

/// Activity content assembled for one selection
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityView<'a> {
    pub chapter_id: u32,
    pub tier: TierId,
    pub time: TimeVariant,
    pub budget: BudgetVariant,
    pub title: &'a Bilingual,
    pub chapter_title: &'a Bilingual,
    pub description: &'a Bilingual,
    pub activity_name: &'a str,
    pub best_for: &'a str,
    pub breakdown: &'a str,
    pub materials: &'a [String],
    pub steps: &'a [Step],
    pub discussion_questions: &'a [String],
    /// Only ever `Some` for the 45 minute variant
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension_ideas: Option<&'a [String]>,
    pub budget_info: &'a BudgetInfo,
    pub tier_differentiation: &'a TierDifferentiation,
    pub accommodations: &'a IndexMap<String, Accommodation>,
}

/// Result of an activity lookup
#[derive(Debug, Clone)]
pub enum ActivityLookup<'a> {
    Found(ActivityView<'a>),
    /// No activity for this chapter; render a fallback with a way back
    NotFound { chapter_id: u32 },
}

impl<'a> ActivityLookup<'a> {
    pub fn found(&self) -> Option<&ActivityView<'a>> {
        match self {
            ActivityLookup::Found(view) => Some(view),
            ActivityLookup::NotFound { .. } => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, ActivityLookup::Found(_))
    }
}

/// One card in the chapter grid
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterCard {
    pub id: u32,
    pub title: String,
    pub thumbnail_url: String,
    pub duration: String,
    pub has_activity: bool,
}

/// Stateless lookup layer over the shared catalog
#[derive(Debug, Clone)]
pub struct ContentResolver {
    catalog: Arc<Catalog>,
    thumbnail_base: String,
}

impl ContentResolver {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_thumbnail_base(catalog, DEFAULT_THUMBNAIL_BASE)
    }

    /// Resolver building thumbnail URLs under another host/prefix
    pub fn with_thumbnail_base(catalog: Arc<Catalog>, base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            catalog,
            thumbnail_base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Assemble the activity view for a chapter and variant selection
    pub fn resolve_activity(
        &self,
        chapter_id: u32,
        tier: TierId,
        time: TimeVariant,
        budget: BudgetVariant,
    ) -> ActivityLookup<'_> {
        let Some(activity) = self.catalog.activity(chapter_id) else {
            debug!("No activity for chapter {}", chapter_id);
            return ActivityLookup::NotFound { chapter_id };
        };

        let time_version = activity.time_versions.get(time);
        let extension_ideas = if time.allows_extensions() {
            time_version.extension_ideas.as_deref()
        } else {
            None
        };

        ActivityLookup::Found(ActivityView {
            chapter_id,
            tier,
            time,
            budget,
            title: &activity.title,
            chapter_title: &activity.chapter_title,
            description: &activity.description,
            activity_name: &time_version.activity_name,
            best_for: &time_version.best_for,
            breakdown: &time_version.breakdown,
            materials: &time_version.materials,
            steps: &time_version.steps,
            discussion_questions: &time_version.discussion_questions,
            extension_ideas,
            budget_info: activity.budget_tiers.get(budget),
            tier_differentiation: activity.tier_differentiation.get(tier),
            accommodations: &activity.accommodations,
        })
    }

    /// Video length for a chapter at a tier, or `DURATION_PLACEHOLDER`
    ///
    /// `tier_number` is the raw 1-based tier; anything outside 1..=4 and
    /// any chapter without a duration row degrade to the placeholder.
    pub fn resolve_duration(&self, chapter_id: u32, tier_number: u32) -> &str {
        let Ok(tier) = TierId::try_from(tier_number) else {
            return DURATION_PLACEHOLDER;
        };
        self.catalog
            .video_durations(chapter_id)
            .map(|row| row[tier.index()].as_str())
            .unwrap_or(DURATION_PLACEHOLDER)
    }

    /// Thumbnail URL for a chapter; reachability is the caller's problem
    pub fn resolve_thumbnail_url(&self, chapter_id: u32, tier: TierId, language: Language) -> String {
        let folder = match language {
            Language::En => "Thumbnails",
            Language::Es => "Thumbnails-Spanish",
        };
        let tier_folder = urlencoding::encode(&format!("Tier {}", tier.number())).into_owned();
        format!(
            "{}/{}/{}/Ch-{:02}-t{}.jpeg",
            self.thumbnail_base,
            folder,
            tier_folder,
            chapter_id,
            tier.number()
        )
    }

    pub fn fallback_image_url(&self) -> &'static str {
        FALLBACK_IMAGE_URL
    }

    /// Chapters of a season in id order; empty for inert seasons
    pub fn chapters_for_season(&self, season_id: u32) -> Vec<&Chapter> {
        self.catalog
            .chapters()
            .iter()
            .filter(|c| c.season == season_id)
            .collect()
    }

    /// Grid cards for a season at the given tier and language
    pub fn chapter_cards(&self, season_id: u32, tier: TierId, language: Language) -> Vec<ChapterCard> {
        self.chapters_for_season(season_id)
            .into_iter()
            .map(|chapter| ChapterCard {
                id: chapter.id,
                title: language.pick(&chapter.title).to_string(),
                thumbnail_url: self.resolve_thumbnail_url(chapter.id, tier, language),
                duration: self.resolve_duration(chapter.id, tier.number()).to_string(),
                has_activity: self.catalog.activity(chapter.id).is_some(),
            })
            .collect()
    }

    pub fn chapter(&self, chapter_id: u32) -> Option<&Chapter> {
        self.catalog.chapter(chapter_id)
    }

    pub fn tier(&self, tier: TierId) -> &Tier {
        self.catalog.tier(tier)
    }

    pub fn season(&self, season_id: u32) -> Option<&Season> {
        self.catalog.season(season_id)
    }

    pub fn platforms(&self) -> &[Platform] {
        self.catalog.platforms()
    }

    pub fn platform(&self, id: PlatformId) -> Option<&Platform> {
        self.catalog.platform(id)
    }
}
