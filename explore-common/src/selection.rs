//! View state for the catalog screens
//!
//! Everything the user can change (focused platform, season, tier,
//! language, time and budget variants, expanded panels, open chapter) lives
//! in one `Selection` value owned by the request handler. All changes go
//! through `Selection::apply`. The state is carried in query strings and is
//! never persisted; every combination of fields is valid.

use serde::Deserialize;
use tracing::warn;

use crate::catalog::{BudgetVariant, Language, PlatformId, TierId, TimeVariant};

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Gateway,
    Dashboard,
    Activity,
}

/// Collapsible sections of the activity sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Materials,
    Steps,
    Discussion,
    TierAdaptations,
    Accommodations,
    ExtensionIdeas,
}

impl Panel {
    pub const ALL: [Panel; 6] = [
        Panel::Materials,
        Panel::Steps,
        Panel::Discussion,
        Panel::TierAdaptations,
        Panel::Accommodations,
        Panel::ExtensionIdeas,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Panel::Materials => "materials",
            Panel::Steps => "steps",
            Panel::Discussion => "discussion",
            Panel::TierAdaptations => "tierAdaptations",
            Panel::Accommodations => "accommodations",
            Panel::ExtensionIdeas => "extensionIdeas",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Panel::ALL.into_iter().find(|p| p.key() == key)
    }
}

/// Expanded/collapsed flag per panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panels {
    materials: bool,
    steps: bool,
    discussion: bool,
    tier_adaptations: bool,
    accommodations: bool,
    extension_ideas: bool,
}

impl Default for Panels {
    fn default() -> Self {
        Self {
            materials: true,
            steps: true,
            discussion: true,
            tier_adaptations: false,
            accommodations: false,
            extension_ideas: false,
        }
    }
}

impl Panels {
    /// All panels collapsed
    pub fn none() -> Self {
        Self {
            materials: false,
            steps: false,
            discussion: false,
            tier_adaptations: false,
            accommodations: false,
            extension_ideas: false,
        }
    }

    fn slot(&mut self, panel: Panel) -> &mut bool {
        match panel {
            Panel::Materials => &mut self.materials,
            Panel::Steps => &mut self.steps,
            Panel::Discussion => &mut self.discussion,
            Panel::TierAdaptations => &mut self.tier_adaptations,
            Panel::Accommodations => &mut self.accommodations,
            Panel::ExtensionIdeas => &mut self.extension_ideas,
        }
    }

    pub fn is_open(&self, panel: Panel) -> bool {
        match panel {
            Panel::Materials => self.materials,
            Panel::Steps => self.steps,
            Panel::Discussion => self.discussion,
            Panel::TierAdaptations => self.tier_adaptations,
            Panel::Accommodations => self.accommodations,
            Panel::ExtensionIdeas => self.extension_ideas,
        }
    }

    pub fn set(&mut self, panel: Panel, open: bool) {
        *self.slot(panel) = open;
    }

    pub fn toggle(&mut self, panel: Panel) {
        let slot = self.slot(panel);
        *slot = !*slot;
    }

    /// Comma-separated keys of the open panels
    pub fn to_param(&self) -> String {
        Panel::ALL
            .into_iter()
            .filter(|p| self.is_open(*p))
            .map(Panel::key)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Parse the `open` query value; unknown keys are skipped
    pub fn from_param(param: &str) -> Self {
        let mut panels = Panels::none();
        for key in param.split(',').map(str::trim).filter(|k| !k.is_empty()) {
            match Panel::from_key(key) {
                Some(panel) => panels.set(panel, true),
                None => warn!("Ignoring unknown panel '{}'", key),
            }
        }
        panels
    }
}

/// The single set of changes a user can make
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionUpdate {
    /// Expand a platform panel on the gateway
    FocusPlatform(PlatformId),
    /// Enter the focused platform; only Explore has a dashboard
    EnterPlatform,
    SelectSeason(u32),
    SelectTier(TierId),
    SetLanguage(Language),
    ToggleLanguage,
    SelectTime(TimeVariant),
    SelectBudget(BudgetVariant),
    TogglePanel(Panel),
    /// Open the activity sheet for a chapter
    OpenActivity(u32),
    /// Activity -> Dashboard -> Gateway
    Back,
}

/// Current selection across all screens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub view: View,
    pub platform: PlatformId,
    pub season: u32,
    pub tier: TierId,
    pub language: Language,
    pub time: TimeVariant,
    pub budget: BudgetVariant,
    pub chapter: Option<u32>,
    pub panels: Panels,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            view: View::Gateway,
            platform: PlatformId::Explore,
            season: 1,
            tier: TierId::One,
            language: Language::En,
            time: TimeVariant::Standard,
            budget: BudgetVariant::Standard,
            chapter: None,
            panels: Panels::default(),
        }
    }
}

impl Selection {
    /// Apply one user change
    pub fn apply(&mut self, update: SelectionUpdate) {
        match update {
            SelectionUpdate::FocusPlatform(platform) => self.platform = platform,
            SelectionUpdate::EnterPlatform => {
                if self.view == View::Gateway && self.platform == PlatformId::Explore {
                    self.view = View::Dashboard;
                }
            }
            SelectionUpdate::SelectSeason(season) => self.season = season,
            SelectionUpdate::SelectTier(tier) => self.tier = tier,
            SelectionUpdate::SetLanguage(language) => self.language = language,
            SelectionUpdate::ToggleLanguage => self.language = self.language.toggle(),
            SelectionUpdate::SelectTime(time) => self.time = time,
            SelectionUpdate::SelectBudget(budget) => self.budget = budget,
            SelectionUpdate::TogglePanel(panel) => self.panels.toggle(panel),
            SelectionUpdate::OpenActivity(chapter_id) => {
                self.chapter = Some(chapter_id);
                self.view = View::Activity;
                // A fresh sheet starts at the default variants and panels
                self.time = TimeVariant::default();
                self.budget = BudgetVariant::default();
                self.panels = Panels::default();
            }
            SelectionUpdate::Back => match self.view {
                View::Activity => {
                    self.view = View::Dashboard;
                    self.chapter = None;
                }
                View::Dashboard => self.view = View::Gateway,
                View::Gateway => {}
            },
        }
    }

    /// Copy of this selection with one change applied (used to build links)
    pub fn with(&self, update: SelectionUpdate) -> Self {
        let mut next = self.clone();
        next.apply(update);
        next
    }

    /// Build a selection from query parameters for the given screen
    ///
    /// Unknown or out-of-range values fall back to defaults with a warning.
    pub fn from_query(view: View, chapter: Option<u32>, query: &SelectionQuery) -> Self {
        let defaults = Selection::default();

        Self {
            view,
            platform: parse_or_default("platform", query.platform.as_deref(), defaults.platform),
            season: match query.season.as_deref() {
                None => defaults.season,
                Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                    warn!("Invalid season '{}', using {}", raw, defaults.season);
                    defaults.season
                }),
            },
            tier: parse_or_default("tier", query.tier.as_deref(), defaults.tier),
            language: parse_or_default("lang", query.lang.as_deref(), defaults.language),
            time: parse_or_default("time", query.time.as_deref(), defaults.time),
            budget: parse_or_default("budget", query.budget.as_deref(), defaults.budget),
            chapter,
            panels: query
                .open
                .as_deref()
                .map(Panels::from_param)
                .unwrap_or_default(),
        }
    }

    /// Query string (without `?`) that reproduces this selection
    pub fn query_string(&self) -> String {
        match self.view {
            View::Gateway => format!("platform={}", self.platform),
            View::Dashboard => format!(
                "season={}&tier={}&lang={}",
                self.season, self.tier, self.language
            ),
            View::Activity => format!(
                "season={}&tier={}&lang={}&time={}&budget={}&open={}",
                self.season,
                self.tier,
                self.language,
                self.time,
                self.budget,
                self.panels.to_param()
            ),
        }
    }

    /// Path and query for the screen this selection points at
    pub fn href(&self) -> String {
        match (self.view, self.chapter) {
            (View::Gateway, _) => format!("/?{}", self.query_string()),
            (View::Dashboard, _) | (View::Activity, None) => {
                let mut dashboard = self.clone();
                dashboard.view = View::Dashboard;
                format!("/explore?{}", dashboard.query_string())
            }
            (View::Activity, Some(chapter_id)) => {
                format!("/explore/activity/{}?{}", chapter_id, self.query_string())
            }
        }
    }
}

fn parse_or_default<T>(name: &str, raw: Option<&str>, default: T) -> T
where
    T: std::str::FromStr<Err = crate::Error> + Copy + std::fmt::Display,
{
    match raw {
        None => default,
        Some(value) => value.parse().unwrap_or_else(|e| {
            warn!("Invalid {} parameter: {}; using {}", name, e, default);
            default
        }),
    }
}

/// Raw query parameters; parsed leniently by `Selection::from_query`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SelectionQuery {
    pub platform: Option<String>,
    pub season: Option<String>,
    pub tier: Option<String>,
    pub lang: Option<String>,
    pub time: Option<String>,
    pub budget: Option<String>,
    pub open: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dashboard() -> Selection {
        Selection {
            view: View::Dashboard,
            ..Selection::default()
        }
    }

    #[test]
    fn test_default_panels() {
        let panels = Panels::default();
        assert!(panels.is_open(Panel::Materials));
        assert!(panels.is_open(Panel::Steps));
        assert!(panels.is_open(Panel::Discussion));
        assert!(!panels.is_open(Panel::TierAdaptations));
        assert!(!panels.is_open(Panel::Accommodations));
        assert!(!panels.is_open(Panel::ExtensionIdeas));
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut sel = dashboard();
        sel.apply(SelectionUpdate::SelectTier(TierId::Three));
        let once = sel.clone();
        sel.apply(SelectionUpdate::SelectTier(TierId::Three));
        assert_eq!(sel, once);

        sel.apply(SelectionUpdate::SetLanguage(Language::Es));
        let once = sel.clone();
        sel.apply(SelectionUpdate::SetLanguage(Language::Es));
        assert_eq!(sel, once);
    }

    #[test]
    fn test_toggles_are_self_inverse() {
        let start = dashboard();
        let mut sel = start.clone();
        sel.apply(SelectionUpdate::ToggleLanguage);
        assert_eq!(sel.language, Language::Es);
        sel.apply(SelectionUpdate::ToggleLanguage);
        assert_eq!(sel, start);

        for panel in Panel::ALL {
            let mut sel = start.clone();
            sel.apply(SelectionUpdate::TogglePanel(panel));
            assert_ne!(sel.panels.is_open(panel), start.panels.is_open(panel));
            sel.apply(SelectionUpdate::TogglePanel(panel));
            assert_eq!(sel, start);
        }
    }

    #[test]
    fn test_toggles_are_orthogonal() {
        let mut sel = dashboard();
        sel.apply(SelectionUpdate::SelectTier(TierId::Four));
        sel.apply(SelectionUpdate::ToggleLanguage);
        sel.apply(SelectionUpdate::TogglePanel(Panel::Accommodations));
        assert_eq!(sel.tier, TierId::Four);
        assert_eq!(sel.language, Language::Es);
        assert!(sel.panels.is_open(Panel::Accommodations));
        assert_eq!(sel.view, View::Dashboard);
    }

    #[test]
    fn test_enter_platform_only_for_explore() {
        let mut sel = Selection::default();
        sel.apply(SelectionUpdate::FocusPlatform(PlatformId::Pioneer));
        sel.apply(SelectionUpdate::EnterPlatform);
        assert_eq!(sel.view, View::Gateway);

        sel.apply(SelectionUpdate::FocusPlatform(PlatformId::Explore));
        sel.apply(SelectionUpdate::EnterPlatform);
        assert_eq!(sel.view, View::Dashboard);
    }

    #[test]
    fn test_open_activity_and_back() {
        let mut sel = dashboard();
        sel.apply(SelectionUpdate::SelectTier(TierId::Two));
        sel.apply(SelectionUpdate::OpenActivity(5));
        assert_eq!(sel.view, View::Activity);
        assert_eq!(sel.chapter, Some(5));
        assert_eq!(sel.tier, TierId::Two);

        sel.apply(SelectionUpdate::Back);
        assert_eq!(sel.view, View::Dashboard);
        assert_eq!(sel.chapter, None);
        sel.apply(SelectionUpdate::Back);
        assert_eq!(sel.view, View::Gateway);
        sel.apply(SelectionUpdate::Back);
        assert_eq!(sel.view, View::Gateway);
    }

    #[test]
    fn test_from_query_falls_back_on_bad_values() {
        let query = SelectionQuery {
            tier: Some("7".into()),
            lang: Some("fr".into()),
            time: Some("25".into()),
            budget: Some("luxury".into()),
            season: Some("x".into()),
            ..SelectionQuery::default()
        };
        let sel = Selection::from_query(View::Activity, Some(1), &query);
        assert_eq!(sel.tier, TierId::One);
        assert_eq!(sel.language, Language::En);
        assert_eq!(sel.time, TimeVariant::Standard);
        assert_eq!(sel.budget, BudgetVariant::Standard);
        assert_eq!(sel.season, 1);
        assert_eq!(sel.panels, Panels::default());
    }

    #[test]
    fn test_query_round_trip_for_activity() {
        let mut sel = dashboard();
        sel.apply(SelectionUpdate::SelectTier(TierId::Three));
        sel.apply(SelectionUpdate::OpenActivity(4));
        sel.apply(SelectionUpdate::SelectTime(TimeVariant::Extended));
        sel.apply(SelectionUpdate::SelectBudget(BudgetVariant::LowCost));
        sel.apply(SelectionUpdate::TogglePanel(Panel::Steps));

        let qs = sel.query_string();
        assert_eq!(
            qs,
            "season=1&tier=3&lang=en&time=45&budget=lowCost&open=materials,discussion"
        );

        let query = SelectionQuery {
            season: Some("1".into()),
            tier: Some("3".into()),
            lang: Some("en".into()),
            time: Some("45".into()),
            budget: Some("lowCost".into()),
            open: Some("materials,discussion".into()),
            ..SelectionQuery::default()
        };
        assert_eq!(Selection::from_query(View::Activity, Some(4), &query), sel);
    }

    #[test]
    fn test_empty_open_param_collapses_all() {
        let panels = Panels::from_param("");
        assert_eq!(panels, Panels::none());
        assert_eq!(Panels::from_param("steps,bogus").to_param(), "steps");
    }

    #[test]
    fn test_href() {
        let sel = dashboard().with(SelectionUpdate::SelectTier(TierId::Two));
        assert_eq!(sel.href(), "/explore?season=1&tier=2&lang=en");
        let act = sel.with(SelectionUpdate::OpenActivity(9));
        assert!(act.href().starts_with("/explore/activity/9?season=1&tier=2"));
        assert_eq!(act.with(SelectionUpdate::Back).href(), sel.href());
        assert_eq!(Selection::default().href(), "/?platform=explore");
    }
}
