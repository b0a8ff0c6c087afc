use chrono::NaiveDate;

use crate::models::profile::{AboutSection, ContactSection, HeroSection};
use crate::models::settings::DisplaySettings;
use crate::models::showcase::{Project, Skill};
use crate::models::stats::YearBucket;
use crate::models::timeline::{Achievement, Certification, EducationEntry, ExperienceEntry};
use crate::models::view::{
    AboutView, AchievementCategory, AchievementRow, AchievementsView, CategoryFilter,
    CertificationRow, ContactView, EducationRow, EducationView, ExperienceRow, ExperienceView,
    GpaTier, HeroView, ProjectView, ProjectsView, SkillView, SkillsView, SocialLinkView,
};
use super::date_service::{DateFallback, DateService, Granularity};
use super::duration_service::DurationService;
use super::grouping_service::GroupingService;
use super::placeholder_service::{has_text, labels, PlaceholderService};
use super::stats_service::{parse_gpa, StatsService};

/// Builds one view model per page section.
///
/// Each builder only reads its own slice of the portfolio; none depends on
/// another section's output. Sections that show durations or year spans
/// take `today` explicitly.
pub struct SectionService {
    dates: DateService,
    durations: DurationService,
    grouping: GroupingService,
    stats: StatsService,
    placeholders: PlaceholderService,
    settings: DisplaySettings,
}

impl SectionService {
    pub fn new(settings: DisplaySettings) -> Self {
        Self {
            dates: DateService::new(),
            durations: DurationService::with_counting(settings.month_counting),
            grouping: GroupingService::new(),
            stats: StatsService::new(),
            placeholders: PlaceholderService::new(),
            settings,
        }
    }

    pub fn settings(&self) -> &DisplaySettings {
        &self.settings
    }

    // ── Hero / About ────────────────────────────────────────────────

    pub fn hero(&self, hero: &HeroSection) -> HeroView {
        let name = self.placeholders.text_or_placeholder(hero.name.as_deref(), labels::NAME);
        let image_alt = if name.is_placeholder {
            labels::IMAGE_ALT.to_string()
        } else {
            name.text.clone()
        };

        HeroView {
            current_status: self
                .placeholders
                .text_or_placeholder(hero.current_status.as_deref(), labels::CURRENT_STATUS),
            tagline: self
                .placeholders
                .text_or_placeholder(hero.tagline.as_deref(), labels::TAGLINE),
            headshot_url: non_blank(hero.headshot_url.as_deref()),
            image_alt,
            name,
        }
    }

    /// Blank passions are dropped before the placeholder rule applies.
    pub fn about(&self, about: &AboutSection) -> AboutView {
        let passions: Vec<String> = about
            .passions
            .iter()
            .filter(|p| !p.trim().is_empty())
            .cloned()
            .collect();

        AboutView {
            passions: self.placeholders.resolve(passions, self.placeholders.passions()),
        }
    }

    // ── Skills / Projects ───────────────────────────────────────────

    pub fn skills(&self, skills: &[Skill]) -> SkillsView {
        let views: Vec<SkillView> = skills
            .iter()
            .filter_map(|skill| {
                let name = non_blank(skill.name.as_deref())?;
                Some(SkillView {
                    name,
                    badge_url: non_blank(skill.badge_url.as_deref()),
                    github_repo_url: non_blank(skill.github_repo_url.as_deref()),
                })
            })
            .collect();

        SkillsView {
            skills: self.placeholders.resolve(views, self.placeholders.skills()),
        }
    }

    /// Untitled projects are hidden; stats only describe real projects.
    pub fn projects(&self, projects: &[Project]) -> ProjectsView {
        let titled: Vec<Project> = projects
            .iter()
            .filter(|p| has_text(p.title.as_deref()))
            .cloned()
            .collect();

        let views: Vec<ProjectView> = titled
            .iter()
            .map(|p| ProjectView {
                title: p.title.clone().unwrap_or_default(),
                description: p.description.clone().unwrap_or_default(),
                tech_stack: p.tech_stack.clone(),
                demo_url: non_blank(p.demo_url.as_deref()),
                repo_url: non_blank(p.repo_url.as_deref()),
                screenshot_url: non_blank(p.screenshot_url.as_deref()),
            })
            .collect();

        let resolved = self.placeholders.resolve(views, self.placeholders.projects());
        let stats = (!resolved.is_placeholder).then(|| self.stats.project_stats(&titled));

        ProjectsView {
            projects: resolved,
            stats,
        }
    }

    // ── Experience ──────────────────────────────────────────────────

    pub fn experience(&self, entries: &[ExperienceEntry], today: NaiveDate) -> ExperienceView {
        let rows: Vec<ExperienceRow> = entries.iter().map(|e| self.experience_row(e, today)).collect();
        let show_timeline = rows.len() > 1;

        ExperienceView {
            entries: self.placeholders.resolve(rows, self.placeholders.experience()),
            show_timeline,
        }
    }

    fn experience_row(&self, entry: &ExperienceEntry, today: NaiveDate) -> ExperienceRow {
        let start = entry.start_date.as_deref();
        let end = entry.end_date.as_deref();

        ExperienceRow {
            role: self.placeholders.text_or_placeholder(entry.role.as_deref(), labels::ROLE),
            company: self
                .placeholders
                .text_or_placeholder(entry.company.as_deref(), labels::COMPANY),
            period: format!(
                "{} - {}",
                self.dates.format_date(start, Granularity::MonthShort, DateFallback::Present),
                self.dates.format_date(end, Granularity::MonthShort, DateFallback::Present),
            ),
            duration: self.durations.duration(start, end, today),
            contributions: entry
                .contributions
                .iter()
                .filter(|c| !c.trim().is_empty())
                .cloned()
                .collect(),
        }
    }

    // ── Education ───────────────────────────────────────────────────

    pub fn education(&self, entries: &[EducationEntry]) -> EducationView {
        let rows: Vec<EducationRow> = entries.iter().map(|e| self.education_row(e)).collect();
        let resolved = self.placeholders.resolve(rows, self.placeholders.education());
        let stats = (!resolved.is_placeholder)
            .then(|| self.stats.education_stats(entries, self.settings.high_gpa_threshold));

        EducationView {
            entries: resolved,
            stats,
        }
    }

    fn education_row(&self, entry: &EducationEntry) -> EducationRow {
        EducationRow {
            degree: self
                .placeholders
                .text_or_placeholder(entry.degree.as_deref(), labels::DEGREE),
            institution: self
                .placeholders
                .text_or_placeholder(entry.institution.as_deref(), labels::INSTITUTION),
            graduated: self.dates.format_date(
                entry.graduation_date.as_deref(),
                Granularity::Month,
                DateFallback::Blank,
            ),
            gpa: non_blank(entry.gpa.as_deref()),
            gpa_tier: self.gpa_tier(entry.gpa.as_deref()),
            certifications: entry
                .certifications
                .iter()
                .map(|c| self.certification_row(c))
                .collect(),
            certification_stats: self
                .stats
                .summarize_with(&entry.certifications, |c| has_text(c.url.as_deref())),
        }
    }

    fn certification_row(&self, cert: &Certification) -> CertificationRow {
        CertificationRow {
            name: self
                .placeholders
                .text_or_placeholder(cert.name.as_deref(), labels::CERTIFICATION),
            provider: self
                .placeholders
                .text_or_placeholder(cert.provider.as_deref(), labels::PROVIDER),
            date: self
                .dates
                .format_date(cert.date.as_deref(), Granularity::Month, DateFallback::Blank),
            url: non_blank(cert.url.as_deref()),
        }
    }

    /// Band a GPA against the configured thresholds.
    pub fn gpa_tier(&self, gpa: Option<&str>) -> GpaTier {
        match gpa.and_then(parse_gpa) {
            None => GpaTier::Unrated,
            Some(v) if v >= self.settings.high_gpa_threshold => GpaTier::High,
            Some(v) if v >= self.settings.medium_gpa_threshold => GpaTier::Medium,
            Some(_) => GpaTier::Low,
        }
    }

    // ── Achievements ────────────────────────────────────────────────

    pub fn achievements(&self, achievements: &[Achievement], today: NaiveDate) -> AchievementsView {
        let rows: Vec<AchievementRow> = achievements.iter().map(|a| self.achievement_row(a)).collect();
        let years = self.grouping.group_by_year_with(rows.iter().cloned(), |r| r.year);
        let resolved = self.placeholders.resolve(rows, self.placeholders.achievements());

        if resolved.is_placeholder {
            return AchievementsView {
                rows: resolved,
                years: Vec::new(),
                stats: None,
            };
        }

        AchievementsView {
            rows: resolved,
            years,
            stats: Some(self.stats.achievement_stats(achievements, today)),
        }
    }

    fn achievement_row(&self, achievement: &Achievement) -> AchievementRow {
        let title = self
            .placeholders
            .text_or_placeholder(achievement.title.as_deref(), labels::ACHIEVEMENT);
        let category = if title.is_placeholder {
            AchievementCategory::Other
        } else {
            AchievementCategory::from_title(&title.text)
        };

        AchievementRow {
            description: non_blank(achievement.description.as_deref()),
            date: self
                .dates
                .format_date(achievement.date.as_deref(), Granularity::Day, DateFallback::Blank),
            url: non_blank(achievement.url.as_deref()),
            category,
            year: self.dates.year_of(achievement.date.as_deref()),
            title,
        }
    }

    /// Rows matching the selected category, order kept.
    pub fn filter_by_category(&self, rows: &[AchievementRow], filter: CategoryFilter) -> Vec<AchievementRow> {
        rows.iter()
            .filter(|r| filter.matches(r.category))
            .cloned()
            .collect()
    }

    /// Filter a year timeline; buckets left empty are dropped.
    pub fn filter_timeline(
        &self,
        years: &[YearBucket<AchievementRow>],
        filter: CategoryFilter,
    ) -> Vec<YearBucket<AchievementRow>> {
        years
            .iter()
            .map(|bucket| YearBucket {
                year: bucket.year,
                items: self.filter_by_category(&bucket.items, filter),
            })
            .filter(|bucket| !bucket.items.is_empty())
            .collect()
    }

    // ── Contact ─────────────────────────────────────────────────────

    /// GitHub, LinkedIn and Twitter are always listed; Dev.to only when set.
    pub fn contact(&self, contact: &ContactSection) -> ContactView {
        let links = &contact.social_links;
        let mut social_links = vec![
            social("GitHub", links.github.as_deref()),
            social("LinkedIn", links.linked_in.as_deref()),
            social("Twitter", links.twitter.as_deref()),
        ];
        if has_text(links.dev_to.as_deref()) {
            social_links.push(social("Dev.to", links.dev_to.as_deref()));
        }

        ContactView {
            email: self
                .placeholders
                .text_or_placeholder(contact.email.as_deref(), labels::EMAIL),
            social_links,
        }
    }
}

impl Default for SectionService {
    fn default() -> Self {
        Self::new(DisplaySettings::default())
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty()).map(str::to_string)
}

fn social(name: &str, url: Option<&str>) -> SocialLinkView {
    SocialLinkView {
        name: name.to_string(),
        url: non_blank(url),
    }
}
