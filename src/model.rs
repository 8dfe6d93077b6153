//! Input records and derived item types.
//!
//! Input shapes mirror the materialized snapshot produced by the external
//! fetch layer (camelCase on the wire). Derived items are created fresh per
//! run and are immutable after construction except for the `trending` flag,
//! which is set once by [`crate::metrics::mark_trending`].

use std::collections::BTreeMap;

/// repo name -> manifest filename -> manifest text.
pub type ManifestMap = BTreeMap<String, BTreeMap<String, String>>;

/// repo name -> AI-derived domain tags. Best effort, may be empty.
pub type DomainMap = BTreeMap<String, Vec<String>>;

// ── Input records ───────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RepoRecord {
    pub name: String,
    pub description: Option<String>,
    pub url: String,
    pub stargazer_count: u64,
    /// Disk usage in kilobytes.
    pub disk_usage: u64,
    pub primary_language: Option<LanguageRef>,
    pub is_archived: bool,
    pub is_fork: bool,
    pub topics: Vec<String>,
    pub languages: LanguageBreakdown,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguageRef {
    pub name: String,
    pub color: Option<String>,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguageBreakdown {
    pub total_size: u64,
    pub edges: Vec<LanguageEdge>,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguageEdge {
    pub name: String,
    pub color: Option<String>,
    pub size: u64,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContributionTotals {
    pub total_commits: u64,
    pub total_pull_requests: u64,
    pub total_reviews: u64,
    pub total_issues: u64,
    pub repos_contributed_to: u64,
}

/// Contribution count for one repository within the lookback window.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RepoContributions {
    pub name_with_owner: String,
    pub count: u64,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExternalRepo {
    pub name_with_owner: String,
    pub url: String,
    pub stargazer_count: u64,
    pub description: Option<String>,
    pub primary_language: Option<String>,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalendarDay {
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    pub count: u64,
    pub weekday: u8,
    pub color: Option<String>,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalendarWeek {
    pub days: Vec<CalendarDay>,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContributionCalendar {
    pub total_contributions: u64,
    pub weeks: Vec<CalendarWeek>,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContributionData {
    pub totals: ContributionTotals,
    pub by_repo: Vec<RepoContributions>,
    pub external_repos: Vec<ExternalRepo>,
    pub calendar: ContributionCalendar,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialAccount {
    pub provider: String,
    pub url: String,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub name: String,
    pub website_url: Option<String>,
    pub twitter_username: Option<String>,
    pub social_accounts: Vec<SocialAccount>,
    pub bio: Option<String>,
}

/// AI-curated expertise group. `score` is untrusted and clamped to [0,100]
/// at render time.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TechHighlight {
    pub category: String,
    pub items: Vec<String>,
    pub score: i64,
}

/// The fully materialized input document: everything the excluded fetch,
/// parse, and AI collaborators produce, resolved before the run starts.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetricsSnapshot {
    pub user: UserProfile,
    pub repos: Vec<RepoRecord>,
    pub manifests: ManifestMap,
    pub contributions: ContributionData,
    pub domain_map: DomainMap,
    pub tech_highlights: Vec<TechHighlight>,
}

impl MetricsSnapshot {
    pub fn from_json(raw: &str) -> crate::error::OctoglyphResult<Self> {
        serde_json::from_str(raw)
            .map_err(|e| crate::error::OctoglyphError::snapshot(e.to_string()))
    }
}

// ── Derived items ───────────────────────────────────────────────────────────

/// The universal renderer contract: `height` equals the vertical extent
/// actually consumed by `markup` at the y-offset it was rendered for.
#[derive(Clone, Debug, Default)]
pub struct RenderResult {
    pub markup: String,
    pub height: f64,
}

impl RenderResult {
    pub fn empty() -> Self {
        Self::default()
    }
}

/// One row in a ranked bar visualization. `percent` is a precomputed display
/// string, not derived at render time.
#[derive(Clone, Debug)]
pub struct BarItem {
    pub name: String,
    pub value: u64,
    pub percent: Option<String>,
    pub color: Option<String>,
    pub trending: bool,
}

#[derive(Clone, Debug)]
pub struct LanguageItem {
    pub name: String,
    /// Aggregated bytes of code.
    pub value: u64,
    /// One-decimal display percentage, e.g. "75.0".
    pub percent: String,
    pub color: String,
    pub trending: bool,
}

#[derive(Clone, Debug)]
pub struct TechItem {
    pub name: String,
    /// Count of distinct repositories referencing the name.
    pub value: u64,
    pub trending: bool,
}

#[derive(Clone, Debug)]
pub struct ComplexityItem {
    pub name: String,
    pub url: String,
    pub description: String,
    /// Rounded composite complexity score.
    pub value: u64,
    pub trending: bool,
}

#[derive(Clone, Debug)]
pub struct DomainItem {
    pub name: String,
    pub count: u64,
    /// Repositories the tag was applied to; `count == repos.len()`.
    pub repos: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct ProjectItem {
    pub name: String,
    pub url: String,
    pub description: String,
    pub stars: u64,
}

#[derive(Clone, Debug)]
pub struct StatItem {
    pub label: String,
    pub value: String,
}

#[derive(Clone, Debug)]
pub struct ContributionHighlight {
    pub project: String,
    pub detail: String,
}

impl From<LanguageItem> for BarItem {
    fn from(item: LanguageItem) -> Self {
        Self {
            name: item.name,
            value: item.value,
            percent: Some(item.percent),
            color: Some(item.color),
            trending: item.trending,
        }
    }
}

impl From<TechItem> for BarItem {
    fn from(item: TechItem) -> Self {
        Self {
            name: item.name,
            value: item.value,
            percent: None,
            color: None,
            trending: item.trending,
        }
    }
}

// ── Sections ────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default)]
pub struct BarOptions {
    /// Use each item's own color instead of cycling the palette.
    pub use_item_colors: bool,
}

/// The body of a section: either a deferred producer invoked at composition
/// time with the section's y-offset, or a plain bar list.
pub enum SectionBody {
    Producer(Box<dyn Fn(f64) -> RenderResult>),
    Bars {
        items: Vec<BarItem>,
        options: BarOptions,
    },
}

/// A lazy, named unit of output. The body is deferred so the same data can
/// be rendered at different document positions (standalone file vs combined
/// document).
pub struct SectionDef {
    pub filename: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub body: SectionBody,
}

impl SectionDef {
    /// An inactive section renders nothing and is dropped before
    /// composition instead of being rendered empty.
    pub fn is_active(&self) -> bool {
        match &self.body {
            SectionBody::Producer(_) => true,
            SectionBody::Bars { items, .. } => !items.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_parses_with_missing_fields() {
        let snapshot = MetricsSnapshot::from_json(r#"{"repos": [{"name": "a"}]}"#).unwrap();
        assert_eq!(snapshot.repos.len(), 1);
        assert_eq!(snapshot.repos[0].name, "a");
        assert!(snapshot.repos[0].description.is_none());
        assert!(snapshot.domain_map.is_empty());
    }

    #[test]
    fn snapshot_rejects_malformed_json() {
        assert!(MetricsSnapshot::from_json("{not json").is_err());
    }

    #[test]
    fn bar_item_from_language_keeps_percent_and_color() {
        let bar: BarItem = LanguageItem {
            name: "Rust".into(),
            value: 100,
            percent: "75.0".into(),
            color: "#dea584".into(),
            trending: true,
        }
        .into();
        assert_eq!(bar.percent.as_deref(), Some("75.0"));
        assert_eq!(bar.color.as_deref(), Some("#dea584"));
        assert!(bar.trending);
    }

    #[test]
    fn empty_bar_section_is_inactive() {
        let def = SectionDef {
            filename: "x.svg".into(),
            title: "X".into(),
            subtitle: None,
            body: SectionBody::Bars {
                items: Vec::new(),
                options: BarOptions::default(),
            },
        };
        assert!(!def.is_active());
    }
}
