use chrono::NaiveDate;
use serde::Serialize;

use super::stats::{AchievementStats, EducationStats, ProjectStats, Stats, YearBucket, YearKey};

// ── Shared building blocks ──────────────────────────────────────────

/// A scalar label that is either real data or a canned fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextField {
    pub text: String,
    pub is_placeholder: bool,
}

impl TextField {
    pub fn real(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_placeholder: false,
        }
    }

    pub fn placeholder(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_placeholder: true,
        }
    }
}

impl std::fmt::Display for TextField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Output of the placeholder policy: what to show, and whether it is sample data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolved<T> {
    pub display: Vec<T>,
    pub is_placeholder: bool,
}

impl<T> Resolved<T> {
    pub fn len(&self) -> usize {
        self.display.len()
    }

    pub fn is_empty(&self) -> bool {
        self.display.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.display.iter()
    }
}

// ── Hero / About ────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroView {
    pub name: TextField,
    pub current_status: TextField,
    pub tagline: TextField,
    /// `None` renders the generic avatar
    pub headshot_url: Option<String>,
    pub image_alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutView {
    pub passions: Resolved<String>,
}

// ── Skills / Projects ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillView {
    pub name: String,
    pub badge_url: Option<String>,
    pub github_repo_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsView {
    pub skills: Resolved<SkillView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectView {
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub demo_url: Option<String>,
    pub repo_url: Option<String>,
    pub screenshot_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsView {
    pub projects: Resolved<ProjectView>,
    /// Only computed for real projects
    pub stats: Option<ProjectStats>,
}

// ── Experience ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceRow {
    pub role: TextField,
    pub company: TextField,
    /// e.g. "Jan 2023 - Present"
    pub period: String,
    /// e.g. "1y 6m"; empty when the start date is unusable
    pub duration: String,
    pub contributions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceView {
    pub entries: Resolved<ExperienceRow>,
    pub show_timeline: bool,
}

// ── Education ───────────────────────────────────────────────────────

/// Colour band for a GPA value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GpaTier {
    High,
    Medium,
    Low,
    /// Missing or not a number
    Unrated,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationRow {
    pub name: TextField,
    pub provider: TextField,
    pub date: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationRow {
    pub degree: TextField,
    pub institution: TextField,
    /// e.g. "May 2023"; empty when the graduation date is unusable
    pub graduated: String,
    pub gpa: Option<String>,
    pub gpa_tier: GpaTier,
    pub certifications: Vec<CertificationRow>,
    /// verified = certification has a URL
    pub certification_stats: Stats,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationView {
    pub entries: Resolved<EducationRow>,
    pub stats: Option<EducationStats>,
}

// ── Achievements ────────────────────────────────────────────────────

/// Kind of achievement, inferred from keywords in its title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementCategory {
    Award,
    Certification,
    Competition,
    Recognition,
    Other,
}

impl AchievementCategory {
    /// Classify by title keywords; first matching rule wins.
    pub fn from_title(title: &str) -> Self {
        let lower = title.to_lowercase();
        let has = |words: &[&str]| words.iter().any(|w| lower.contains(w));

        if has(&["award", "winner"]) {
            AchievementCategory::Award
        } else if has(&["certification", "certified"]) {
            AchievementCategory::Certification
        } else if has(&["competition", "contest"]) {
            AchievementCategory::Competition
        } else if has(&["recognition", "honor"]) {
            AchievementCategory::Recognition
        } else {
            AchievementCategory::Other
        }
    }
}

impl std::fmt::Display for AchievementCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AchievementCategory::Award => write!(f, "Awards"),
            AchievementCategory::Certification => write!(f, "Certifications"),
            AchievementCategory::Competition => write!(f, "Competitions"),
            AchievementCategory::Recognition => write!(f, "Recognition"),
            AchievementCategory::Other => write!(f, "Other"),
        }
    }
}

/// Category filter selected in the achievements toolbar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(AchievementCategory),
}

impl CategoryFilter {
    pub fn matches(&self, category: AchievementCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementRow {
    pub title: TextField,
    pub description: Option<String>,
    /// e.g. "June 1, 2023" (placeholders use "January 2024")
    pub date: String,
    pub url: Option<String>,
    pub category: AchievementCategory,
    pub year: YearKey,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementsView {
    /// Flat list in input order, or the placeholder samples
    pub rows: Resolved<AchievementRow>,
    /// Timeline buckets; empty when showing placeholders
    pub years: Vec<YearBucket<AchievementRow>>,
    pub stats: Option<AchievementStats>,
}

// ── Contact ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinkView {
    pub name: String,
    /// `None` renders the "not set" state
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactView {
    pub email: TextField,
    pub social_links: Vec<SocialLinkView>,
}

// ── Whole page ──────────────────────────────────────────────────────

/// Every section of the page, derived in one render pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioPage {
    /// The "today" every duration and year span was computed against
    pub today: NaiveDate,
    pub hero: HeroView,
    pub about: AboutView,
    pub skills: SkillsView,
    pub projects: ProjectsView,
    pub experience: ExperienceView,
    pub education: EducationView,
    pub achievements: AchievementsView,
    pub contact: ContactView,
}
