//! Catalog record types
//!
//! Mirrors the camelCase JSON layout of the catalog document. Per-variant
//! tables (time versions, budget tiers, tier differentiation) are structs
//! with one field per closed-set member, so a document missing any of them
//! fails to deserialize instead of leaving a hole to discover at runtime.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::keys::{BudgetVariant, PlatformId, TierId, TimeVariant};

/// Text in both supported languages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bilingual {
    pub en: String,
    pub es: String,
}

fn default_season() -> u32 {
    1
}

/// One video chapter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: u32,
    #[serde(default = "default_season")]
    pub season: u32,
    pub title: Bilingual,
}

/// Colours only; no meaning beyond presentation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierTheme {
    pub primary: String,
    pub accent: String,
}

/// Grade-band tier description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    pub id: TierId,
    pub label: String,
    pub grades: String,
    pub description: String,
    pub theme: TierTheme,
}

/// Top-level content grouping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    pub id: u32,
    pub title: Bilingual,
}

/// Landing-screen platform panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Platform {
    pub id: PlatformId,
    pub grade: String,
    pub title: String,
    pub tagline: String,
    pub description: String,
    pub features: Vec<String>,
    pub image: String,
    pub accent: String,
    /// Only open platforms can be entered; the rest show "Coming Soon"
    #[serde(default)]
    pub open: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub title: String,
    pub duration: String,
    pub description: String,
}

/// Content for one duration preset of an activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeVersion {
    pub activity_name: String,
    #[serde(default)]
    pub best_for: String,
    pub breakdown: String,
    pub materials: Vec<String>,
    pub steps: Vec<Step>,
    pub discussion_questions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension_ideas: Option<Vec<String>>,
}

/// The three duration presets, all required
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeVersions {
    #[serde(rename = "20")]
    pub short: TimeVersion,
    #[serde(rename = "30")]
    pub standard: TimeVersion,
    #[serde(rename = "45")]
    pub extended: TimeVersion,
}

impl TimeVersions {
    pub fn get(&self, variant: TimeVariant) -> &TimeVersion {
        match variant {
            TimeVariant::Short => &self.short,
            TimeVariant::Standard => &self.standard,
            TimeVariant::Extended => &self.extended,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetInfo {
    pub label: String,
    pub cost_per_student: String,
    pub description: String,
    pub items: Vec<String>,
}

/// The three cost tiers, all required
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetTiers {
    pub standard: BudgetInfo,
    pub low_cost: BudgetInfo,
    pub premium: BudgetInfo,
}

impl BudgetTiers {
    pub fn get(&self, variant: BudgetVariant) -> &BudgetInfo {
        match variant {
            BudgetVariant::Standard => &self.standard,
            BudgetVariant::LowCost => &self.low_cost,
            BudgetVariant::Premium => &self.premium,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierDifferentiation {
    pub grade_level: String,
    pub focus: Vec<String>,
}

/// Per-tier adaptations; one entry per tier, all required
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierDifferentiations {
    #[serde(rename = "1")]
    pub tier1: TierDifferentiation,
    #[serde(rename = "2")]
    pub tier2: TierDifferentiation,
    #[serde(rename = "3")]
    pub tier3: TierDifferentiation,
    #[serde(rename = "4")]
    pub tier4: TierDifferentiation,
}

impl TierDifferentiations {
    pub fn get(&self, tier: TierId) -> &TierDifferentiation {
        match tier {
            TierId::One => &self.tier1,
            TierId::Two => &self.tier2,
            TierId::Three => &self.tier3,
            TierId::Four => &self.tier4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accommodation {
    pub label: String,
    pub strategies: Vec<String>,
}

/// Printable hands-on activity attached to a chapter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub chapter_id: u32,
    pub chapter_title: Bilingual,
    pub title: Bilingual,
    pub description: Bilingual,
    pub time_versions: TimeVersions,
    pub budget_tiers: BudgetTiers,
    pub tier_differentiation: TierDifferentiations,
    /// Keyed by category (e.g. "ell", "iep", "advanced"); shown in document order
    #[serde(default)]
    pub accommodations: IndexMap<String, Accommodation>,
}
