use std::collections::HashSet;

use chrono::NaiveDate;

use crate::models::showcase::Project;
use crate::models::stats::{AchievementStats, EducationStats, ProjectStats, Stats};
use crate::models::timeline::{Achievement, Dated, EducationEntry};
use super::date_service::DateService;
use super::placeholder_service::has_text;

/// Derives summary numbers shown under the timeline sections.
///
/// Everything is recomputed from the input on every call. Empty input is
/// fine: counts are zero and year bounds are `None`.
pub struct StatsService {
    dates: DateService,
}

impl StatsService {
    pub fn new() -> Self {
        Self {
            dates: DateService::new(),
        }
    }

    /// Count and year bounds; nothing is counted as verified.
    pub fn summarize<T: Dated>(&self, items: &[T]) -> Stats {
        self.summarize_with(items, |_| false)
    }

    /// Count, verified count (items matching `predicate`) and year bounds.
    ///
    /// Year bounds only consider items with a usable date.
    pub fn summarize_with<T, P>(&self, items: &[T], predicate: P) -> Stats
    where
        T: Dated,
        P: Fn(&T) -> bool,
    {
        let mut stats = Stats {
            count: items.len(),
            ..Stats::default()
        };

        for item in items {
            if predicate(item) {
                stats.verified_count += 1;
            }
            if let Some(year) = self.dates.year_of(item.date()).year() {
                stats.min_year = Some(stats.min_year.map_or(year, |m| m.min(year)));
                stats.max_year = Some(stats.max_year.map_or(year, |m| m.max(year)));
            }
        }

        stats
    }

    /// Achievement totals: count, distinct years (`Unknown` included),
    /// entries with a URL, and years since the earliest one.
    pub fn achievement_stats(&self, achievements: &[Achievement], today: NaiveDate) -> AchievementStats {
        let stats = self.summarize_with(achievements, |a| has_text(a.url.as_deref()));
        let years: HashSet<_> = achievements
            .iter()
            .map(|a| self.dates.year_of(a.date()))
            .collect();

        AchievementStats {
            total: stats.count,
            years_active: years.len(),
            verified: stats.verified_count,
            years_experience: stats.years_experience(today),
        }
    }

    /// Degree, certification, high-GPA and verified counts.
    pub fn education_stats(&self, entries: &[EducationEntry], high_gpa_threshold: f64) -> EducationStats {
        EducationStats {
            degrees: entries.len(),
            certifications: entries.iter().map(|e| e.certifications.len()).sum(),
            high_gpa: entries
                .iter()
                .filter_map(|e| e.gpa.as_deref().and_then(parse_gpa))
                .filter(|gpa| *gpa >= high_gpa_threshold)
                .count(),
            verified: entries
                .iter()
                .filter(|e| e.certifications.iter().any(|c| has_text(c.url.as_deref())))
                .count(),
        }
    }

    pub fn project_stats(&self, projects: &[Project]) -> ProjectStats {
        ProjectStats {
            count: projects.len(),
            technologies: projects.iter().map(|p| p.tech_stack.len()).sum(),
            live_demos: projects.iter().filter(|p| has_text(p.demo_url.as_deref())).count(),
            repositories: projects.iter().filter(|p| has_text(p.repo_url.as_deref())).count(),
        }
    }
}

impl Default for StatsService {
    fn default() -> Self {
        Self::new()
    }
}

/// Leading numeric part of a GPA string ("3.8", " 3.8/4.0" → 3.8).
pub fn parse_gpa(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    let end = trimmed
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(trimmed.len());
    trimmed[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}
