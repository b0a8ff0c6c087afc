use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};

/// Year a dated record falls into. Records without a usable date land in `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YearKey {
    Year(i32),
    Unknown,
}

impl YearKey {
    pub fn year(&self) -> Option<i32> {
        match self {
            YearKey::Year(y) => Some(*y),
            YearKey::Unknown => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, YearKey::Unknown)
    }
}

impl std::fmt::Display for YearKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            YearKey::Year(y) => write!(f, "{y}"),
            YearKey::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Serialized as a bare number, or the string `"Unknown"`.
impl Serialize for YearKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            YearKey::Year(y) => serializer.serialize_i32(*y),
            YearKey::Unknown => serializer.serialize_str("Unknown"),
        }
    }
}

/// Records sharing one year, in their original relative order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearBucket<T> {
    pub year: YearKey,
    pub items: Vec<T>,
}

/// Count / verified count / year bounds over a collection of dated records.
///
/// Recomputed on every render; never cached.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub count: usize,
    pub verified_count: usize,
    /// Earliest numeric year; `Unknown` dates never count
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
}

impl Stats {
    /// Whole years between the earliest record and `today`.
    ///
    /// `None` when no record has a usable year, so callers can drop the
    /// display instead of showing a nonsensical value.
    pub fn years_experience(&self, today: NaiveDate) -> Option<i32> {
        self.min_year.map(|min| today.year() - min)
    }
}

/// Summary row under the projects grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStats {
    pub count: usize,
    /// Sum of tech-stack entries across all projects
    pub technologies: usize,
    pub live_demos: usize,
    pub repositories: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationStats {
    pub degrees: usize,
    pub certifications: usize,
    pub high_gpa: usize,
    /// Entries with at least one certification that carries a URL
    pub verified: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementStats {
    pub total: usize,
    /// Number of year buckets, `Unknown` included
    pub years_active: usize,
    pub verified: usize,
    pub years_experience: Option<i32>,
}
