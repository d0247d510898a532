//! Static catalog: chapters, tiers, seasons, platforms, video durations and
//! activities
//!
//! The catalog is parsed once at startup and never mutated. Structural
//! problems (duplicate ids, chapter ids out of range, a missing tier or
//! variant entry) are configuration errors. Cross-table disagreements (an
//! activity or duration row for a chapter that is not listed, or the other
//! way round) only make that chapter's content unavailable, so they are
//! logged and recorded as warnings.

mod keys;
mod model;

pub use keys::{BudgetVariant, Language, PlatformId, TierId, TimeVariant};
pub use model::{
    Accommodation, Activity, Bilingual, BudgetInfo, BudgetTiers, Chapter, Platform, Season, Step,
    Tier, TierDifferentiation, TierDifferentiations, TierTheme, TimeVersion, TimeVersions,
};

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::{Error, Result};

/// Catalog document compiled into the binary
pub const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Chapter ids are 1..=MAX_CHAPTER_ID
pub const MAX_CHAPTER_ID: u32 = 12;

/// On-disk layout of the catalog document
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogDocument {
    #[serde(default)]
    platforms: Vec<Platform>,
    seasons: Vec<Season>,
    tiers: Vec<Tier>,
    chapters: Vec<Chapter>,
    video_durations: BTreeMap<u32, [String; 4]>,
    #[serde(default)]
    activities: Vec<Activity>,
}

/// Validated, read-only catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    platforms: Vec<Platform>,
    seasons: Vec<Season>,
    tiers: Vec<Tier>,
    chapters: Vec<Chapter>,
    video_durations: BTreeMap<u32, [String; 4]>,
    activities: BTreeMap<u32, Activity>,
    warnings: Vec<String>,
}

impl Catalog {
    /// Parse the catalog compiled into the binary
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load a catalog document from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        info!("Loaded catalog from {}", path.display());
        Ok(catalog)
    }

    /// Parse and validate a catalog document
    pub fn from_json(json: &str) -> Result<Self> {
        let document: CatalogDocument = serde_json::from_str(json).map_err(|e| {
            if e.is_data() {
                // Missing tier/variant entries surface here
                Error::Config(format!("Invalid catalog document: {}", e))
            } else {
                Error::Parse(e)
            }
        })?;
        Self::from_document(document)
    }

    fn from_document(document: CatalogDocument) -> Result<Self> {
        let mut warnings = Vec::new();

        // Tiers: exactly one record per tier id, kept in tier order
        let mut tiers = document.tiers;
        tiers.sort_by_key(|t| t.id);
        for tier in TierId::ALL {
            let count = tiers.iter().filter(|t| t.id == tier).count();
            if count != 1 {
                return Err(Error::Config(format!(
                    "Catalog must define tier {} exactly once (found {})",
                    tier, count
                )));
            }
        }

        // Seasons
        let mut season_ids = BTreeSet::new();
        for season in &document.seasons {
            if !season_ids.insert(season.id) {
                return Err(Error::Config(format!("Duplicate season id {}", season.id)));
            }
        }

        // Chapters: unique ids within 1..=MAX_CHAPTER_ID
        let mut chapters = document.chapters;
        chapters.sort_by_key(|c| (c.season, c.id));
        let mut chapter_ids = BTreeSet::new();
        for chapter in &chapters {
            if chapter.id == 0 || chapter.id > MAX_CHAPTER_ID {
                return Err(Error::Config(format!(
                    "Chapter id {} outside 1..{}",
                    chapter.id, MAX_CHAPTER_ID
                )));
            }
            if !chapter_ids.insert(chapter.id) {
                return Err(Error::Config(format!("Duplicate chapter id {}", chapter.id)));
            }
            if !season_ids.contains(&chapter.season) {
                warnings.push(format!(
                    "Chapter {} belongs to undeclared season {}",
                    chapter.id, chapter.season
                ));
            }
        }

        // Dense, contiguous ids within each season
        for season_id in &season_ids {
            let ids: Vec<u32> = chapters
                .iter()
                .filter(|c| c.season == *season_id)
                .map(|c| c.id)
                .collect();
            if ids.windows(2).any(|w| w[1] != w[0] + 1) {
                warnings.push(format!(
                    "Season {} chapter ids are not contiguous: {:?}",
                    season_id, ids
                ));
            }
        }

        // Activities keyed by chapter id
        let mut activities = BTreeMap::new();
        for activity in document.activities {
            let chapter_id = activity.chapter_id;
            if activities.insert(chapter_id, activity).is_some() {
                return Err(Error::Config(format!(
                    "Duplicate activity for chapter {}",
                    chapter_id
                )));
            }
            if !chapter_ids.contains(&chapter_id) {
                warnings.push(format!("Activity for unlisted chapter {}", chapter_id));
            }
        }

        // Video durations must cover the same chapters
        for chapter_id in &chapter_ids {
            if !document.video_durations.contains_key(chapter_id) {
                warnings.push(format!("No video durations for chapter {}", chapter_id));
            }
        }
        for chapter_id in document.video_durations.keys() {
            if !chapter_ids.contains(chapter_id) {
                warnings.push(format!("Video durations for unlisted chapter {}", chapter_id));
            }
        }

        // Platforms: at most one record each
        let mut platform_ids = BTreeSet::new();
        for platform in &document.platforms {
            if !platform_ids.insert(platform.id.as_str()) {
                return Err(Error::Config(format!("Duplicate platform '{}'", platform.id)));
            }
        }

        for warning in &warnings {
            warn!("Catalog: {}", warning);
        }
        info!(
            "Catalog ready: {} chapters, {} activities, {} seasons",
            chapters.len(),
            activities.len(),
            document.seasons.len()
        );

        Ok(Self {
            platforms: document.platforms,
            seasons: document.seasons,
            tiers,
            chapters,
            video_durations: document.video_durations,
            activities,
            warnings,
        })
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn platform(&self, id: PlatformId) -> Option<&Platform> {
        self.platforms.iter().find(|p| p.id == id)
    }

    pub fn seasons(&self) -> &[Season] {
        &self.seasons
    }

    pub fn season(&self, id: u32) -> Option<&Season> {
        self.seasons.iter().find(|s| s.id == id)
    }

    /// All tiers in tier order (always four)
    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    /// Tier record; present for every `TierId` after validation
    pub fn tier(&self, id: TierId) -> &Tier {
        &self.tiers[id.index()]
    }

    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn chapter(&self, id: u32) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.id == id)
    }

    pub fn activity(&self, chapter_id: u32) -> Option<&Activity> {
        self.activities.get(&chapter_id)
    }

    pub fn activities(&self) -> impl Iterator<Item = &Activity> {
        self.activities.values()
    }

    pub fn video_durations(&self, chapter_id: u32) -> Option<&[String; 4]> {
        self.video_durations.get(&chapter_id)
    }

    /// Cross-table mismatches found during validation
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    //! Minimal catalog documents for unit tests

    use serde_json::{json, Value};

    pub fn time_version(name: &str, with_extensions: bool) -> Value {
        let mut tv = json!({
            "activityName": name,
            "bestFor": "Testing",
            "breakdown": "5 min intro, 10 min build",
            "materials": ["Paper", "Crayons"],
            "steps": [
                {"title": "Intro", "duration": "5 min", "description": "Talk about it"}
            ],
            "discussionQuestions": ["What did you notice?"]
        });
        if with_extensions {
            tv["extensionIdeas"] = json!(["Take it home"]);
        }
        tv
    }

    pub fn budget(label: &str) -> Value {
        json!({
            "label": label,
            "costPerStudent": "$1",
            "description": "Basic supplies",
            "items": ["Paper"]
        })
    }

    pub fn activity(chapter_id: u32, extensions_on_all: bool) -> Value {
        json!({
            "chapterId": chapter_id,
            "chapterTitle": {"en": "Secret Garden", "es": "El Jardín Secreto"},
            "title": {"en": "Garden Plan", "es": "Plan del Jardín"},
            "description": {"en": "Plan a garden.", "es": "Planea un jardín."},
            "timeVersions": {
                "20": time_version("Quick Plan", extensions_on_all),
                "30": time_version("Garden Plan", extensions_on_all),
                "45": time_version("Full Garden", true)
            },
            "budgetTiers": {
                "standard": budget("Standard Classroom"),
                "lowCost": budget("Low Cost"),
                "premium": budget("Premium")
            },
            "tierDifferentiation": {
                "1": {"gradeLevel": "K-1", "focus": ["Colors"]},
                "2": {"gradeLevel": "Grade 2", "focus": ["Counting"]},
                "3": {"gradeLevel": "Grade 3", "focus": ["Budgets"]},
                "4": {"gradeLevel": "Grade 4", "focus": ["Profit"]}
            },
            "accommodations": {
                "ell": {"label": "English Learners", "strategies": ["Picture cards"]}
            }
        })
    }

    pub fn tier(id: u32) -> Value {
        json!({
            "id": id,
            "label": format!("Tier {}", id),
            "grades": if id == 1 { "K-1".to_string() } else { id.to_string() },
            "description": "Tier description",
            "theme": {"primary": "#f59e0b", "accent": "#d97706"}
        })
    }

    pub fn document() -> Value {
        json!({
            "platforms": [],
            "seasons": [
                {"id": 1, "title": {"en": "Season 1", "es": "Temporada 1"}},
                {"id": 2, "title": {"en": "Season 2", "es": "Temporada 2"}}
            ],
            "tiers": [tier(1), tier(2), tier(3), tier(4)],
            "chapters": [
                {"id": 1, "title": {"en": "Secret Garden", "es": "El Jardín Secreto"}},
                {"id": 2, "title": {"en": "The Seed Library", "es": "La Biblioteca de Semillas"}}
            ],
            "videoDurations": {
                "1": ["8:33", "9:10", "9:45", "10:02"],
                "2": ["7:12", "7:50", "8:21", "8:59"]
            },
            "activities": [activity(1, false)]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::test_fixtures::*;
    use super::*;

    fn load(doc: serde_json::Value) -> Result<Catalog> {
        Catalog::from_json(&doc.to_string())
    }

    #[test]
    fn test_fixture_loads_cleanly() {
        let catalog = load(document()).unwrap();
        assert_eq!(catalog.tiers().len(), 4);
        assert_eq!(catalog.chapters().len(), 2);
        assert!(catalog.activity(1).is_some());
        assert!(catalog.activity(2).is_none());
        assert!(catalog.warnings().is_empty());
    }

    #[test]
    fn test_missing_tier_differentiation_is_config_error() {
        let mut doc = document();
        doc["activities"][0]["tierDifferentiation"]
            .as_object_mut()
            .unwrap()
            .remove("3");
        let err = load(doc).unwrap_err();
        assert!(matches!(err, Error::Config(_)), "got {:?}", err);
    }

    #[test]
    fn test_missing_time_version_is_config_error() {
        let mut doc = document();
        doc["activities"][0]["timeVersions"]
            .as_object_mut()
            .unwrap()
            .remove("45");
        assert!(matches!(load(doc), Err(Error::Config(_))));
    }

    #[test]
    fn test_missing_tier_record_is_config_error() {
        let mut doc = document();
        doc["tiers"].as_array_mut().unwrap().pop();
        assert!(matches!(load(doc), Err(Error::Config(_))));
    }

    #[test]
    fn test_duplicate_chapter_rejected() {
        let mut doc = document();
        doc["chapters"]
            .as_array_mut()
            .unwrap()
            .push(serde_json::json!({"id": 2, "title": {"en": "Dup", "es": "Dup"}}));
        assert!(matches!(load(doc), Err(Error::Config(_))));
    }

    #[test]
    fn test_chapter_out_of_range_rejected() {
        let mut doc = document();
        doc["chapters"]
            .as_array_mut()
            .unwrap()
            .push(serde_json::json!({"id": 13, "title": {"en": "Extra", "es": "Extra"}}));
        assert!(matches!(load(doc), Err(Error::Config(_))));
    }

    #[test]
    fn test_cross_table_mismatch_is_warning() {
        let mut doc = document();
        doc["videoDurations"].as_object_mut().unwrap().remove("2");
        doc["activities"]
            .as_array_mut()
            .unwrap()
            .push(activity(7, false));
        let catalog = load(doc).unwrap();
        assert_eq!(catalog.warnings().len(), 2);
        assert!(catalog.activity(7).is_some());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Catalog::from_json("{ not json").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = Catalog::load(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
