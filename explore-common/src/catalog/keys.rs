//! Closed-set lookup keys
//!
//! Tier, time variant, budget variant, language and platform are closed
//! enumerations. Values outside the set are rejected where they enter the
//! system (query strings, JSON, TOML) with `Error::IndexOutOfRange`, so the
//! resolver never sees a key it cannot match.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

// ========================================
// Tier
// ========================================

/// Grade-band tier (K-1, 2, 3, 4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum TierId {
    #[default]
    One,
    Two,
    Three,
    Four,
}

impl TierId {
    pub const ALL: [TierId; 4] = [TierId::One, TierId::Two, TierId::Three, TierId::Four];

    /// Tier number as shown to users (1..=4)
    pub fn number(self) -> u32 {
        match self {
            TierId::One => 1,
            TierId::Two => 2,
            TierId::Three => 3,
            TierId::Four => 4,
        }
    }

    /// Zero-based position, used to index per-tier sequences
    pub fn index(self) -> usize {
        self.number() as usize - 1
    }
}

impl TryFrom<u32> for TierId {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        match value {
            1 => Ok(TierId::One),
            2 => Ok(TierId::Two),
            3 => Ok(TierId::Three),
            4 => Ok(TierId::Four),
            other => Err(Error::IndexOutOfRange(format!(
                "tier {} (expected 1..4)",
                other
            ))),
        }
    }
}

impl From<TierId> for u32 {
    fn from(tier: TierId) -> Self {
        tier.number()
    }
}

impl FromStr for TierId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let n: u32 = s
            .trim()
            .parse()
            .map_err(|_| Error::IndexOutOfRange(format!("tier '{}' (expected 1..4)", s)))?;
        TierId::try_from(n)
    }
}

impl fmt::Display for TierId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

// ========================================
// Time variant
// ========================================

/// Activity duration preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TimeVariant {
    #[serde(rename = "20")]
    Short,
    #[default]
    #[serde(rename = "30")]
    Standard,
    #[serde(rename = "45")]
    Extended,
}

impl TimeVariant {
    pub const ALL: [TimeVariant; 3] = [TimeVariant::Short, TimeVariant::Standard, TimeVariant::Extended];

    pub fn minutes(self) -> u32 {
        match self {
            TimeVariant::Short => 20,
            TimeVariant::Standard => 30,
            TimeVariant::Extended => 45,
        }
    }

    /// Key used in the catalog document and query strings
    pub fn as_str(self) -> &'static str {
        match self {
            TimeVariant::Short => "20",
            TimeVariant::Standard => "30",
            TimeVariant::Extended => "45",
        }
    }

    /// Extension ideas belong to the longest preset only
    pub fn allows_extensions(self) -> bool {
        self == TimeVariant::Extended
    }
}

impl FromStr for TimeVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "20" => Ok(TimeVariant::Short),
            "30" => Ok(TimeVariant::Standard),
            "45" => Ok(TimeVariant::Extended),
            other => Err(Error::IndexOutOfRange(format!(
                "time variant '{}' (expected 20, 30 or 45)",
                other
            ))),
        }
    }
}

impl fmt::Display for TimeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ========================================
// Budget variant
// ========================================

/// Material cost tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BudgetVariant {
    #[default]
    Standard,
    LowCost,
    Premium,
}

impl BudgetVariant {
    pub const ALL: [BudgetVariant; 3] = [BudgetVariant::Standard, BudgetVariant::LowCost, BudgetVariant::Premium];

    pub fn as_str(self) -> &'static str {
        match self {
            BudgetVariant::Standard => "standard",
            BudgetVariant::LowCost => "lowCost",
            BudgetVariant::Premium => "premium",
        }
    }

    /// Short label for selector buttons
    pub fn short_label(self) -> &'static str {
        match self {
            BudgetVariant::Standard => "Standard",
            BudgetVariant::LowCost => "Low Cost",
            BudgetVariant::Premium => "Premium",
        }
    }

    /// Long label for the printed sheet header
    pub fn print_label(self) -> &'static str {
        match self {
            BudgetVariant::Standard => "Standard Classroom",
            BudgetVariant::LowCost => "Low Cost",
            BudgetVariant::Premium => "Premium",
        }
    }
}

impl FromStr for BudgetVariant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "standard" => Ok(BudgetVariant::Standard),
            "lowCost" => Ok(BudgetVariant::LowCost),
            "premium" => Ok(BudgetVariant::Premium),
            other => Err(Error::IndexOutOfRange(format!(
                "budget variant '{}' (expected standard, lowCost or premium)",
                other
            ))),
        }
    }
}

impl fmt::Display for BudgetVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ========================================
// Language
// ========================================

/// Display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Es];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }

    /// Language name written in that language
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Language::En => Language::Es,
            Language::Es => Language::En,
        }
    }

    /// Pick the text for this language out of a bilingual pair
    pub fn pick(self, text: &super::Bilingual) -> &str {
        match self {
            Language::En => &text.en,
            Language::Es => &text.es,
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "en" => Ok(Language::En),
            "es" => Ok(Language::Es),
            other => Err(Error::IndexOutOfRange(format!(
                "language '{}' (expected en or es)",
                other
            ))),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ========================================
// Gateway platform
// ========================================

/// Gateway entry on the landing screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformId {
    #[default]
    Explore,
    Pioneer,
    Launchpad,
}

impl PlatformId {
    pub const ALL: [PlatformId; 3] = [PlatformId::Explore, PlatformId::Pioneer, PlatformId::Launchpad];

    pub fn as_str(self) -> &'static str {
        match self {
            PlatformId::Explore => "explore",
            PlatformId::Pioneer => "pioneer",
            PlatformId::Launchpad => "launchpad",
        }
    }
}

impl FromStr for PlatformId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "explore" => Ok(PlatformId::Explore),
            "pioneer" => Ok(PlatformId::Pioneer),
            "launchpad" => Ok(PlatformId::Launchpad),
            other => Err(Error::IndexOutOfRange(format!("platform '{}'", other))),
        }
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
