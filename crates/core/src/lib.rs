pub mod errors;
pub mod models;
pub mod services;
pub mod storage;

use std::path::Path;

use chrono::NaiveDate;
use models::{
    portfolio::Portfolio,
    settings::DisplaySettings,
    stats::YearBucket,
    view::{
        AboutView, AchievementRow, AchievementsView, CategoryFilter, ContactView, EducationView,
        ExperienceView, HeroView, PortfolioPage, ProjectsView, SkillsView,
    },
};
use services::section_service::SectionService;
use storage::loader::PortfolioLoader;

use errors::CoreError;

/// Main entry point for the portfolio-view core library.
/// Holds the loaded portfolio and the section builders derived from it.
#[must_use]
pub struct PortfolioView {
    portfolio: Portfolio,
    sections: SectionService,
}

impl std::fmt::Debug for PortfolioView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioView")
            .field("skills", &self.portfolio.skills.len())
            .field("projects", &self.portfolio.projects.len())
            .field("experience", &self.portfolio.experience.len())
            .field("education", &self.portfolio.education.len())
            .field("achievements", &self.portfolio.achievements.len())
            .field("settings", self.sections.settings())
            .finish()
    }
}

impl PortfolioView {
    /// Wrap an already-loaded portfolio with default settings.
    pub fn new(portfolio: Portfolio) -> Self {
        Self {
            portfolio,
            sections: SectionService::default(),
        }
    }

    /// Wrap a portfolio with custom display settings (validated first).
    pub fn with_settings(portfolio: Portfolio, settings: DisplaySettings) -> Result<Self, CoreError> {
        settings.validate()?;
        Ok(Self {
            portfolio,
            sections: SectionService::new(settings),
        })
    }

    /// Parse `portfolio.json` content.
    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        Ok(Self::new(PortfolioLoader::load_from_str(json)?))
    }

    /// Parse `portfolio.json` bytes, e.g. as handed over by a frontend.
    pub fn from_json_bytes(bytes: &[u8]) -> Result<Self, CoreError> {
        Ok(Self::new(PortfolioLoader::load_from_bytes(bytes)?))
    }

    /// Load `portfolio.json` from disk.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        Ok(Self::new(PortfolioLoader::load_from_file(path)?))
    }

    #[must_use]
    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    #[must_use]
    pub fn settings(&self) -> &DisplaySettings {
        self.sections.settings()
    }

    /// The configured reference date, or today's UTC date.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.settings()
            .reference_date
            .unwrap_or_else(|| chrono::Utc::now().date_naive())
    }

    // ── Whole page ──────────────────────────────────────────────────

    /// Derive every section, reading "today" once for the whole pass.
    #[must_use]
    pub fn render(&self) -> PortfolioPage {
        self.render_at(self.today())
    }

    /// Derive every section against an explicit "today".
    #[must_use]
    pub fn render_at(&self, today: NaiveDate) -> PortfolioPage {
        tracing::debug!(%today, "rendering portfolio page");
        PortfolioPage {
            today,
            hero: self.hero(),
            about: self.about(),
            skills: self.skills(),
            projects: self.projects(),
            experience: self.experience_at(today),
            education: self.education(),
            achievements: self.achievements_at(today),
            contact: self.contact(),
        }
    }

    // ── Sections ────────────────────────────────────────────────────

    #[must_use]
    pub fn hero(&self) -> HeroView {
        self.sections.hero(&self.portfolio.hero)
    }

    #[must_use]
    pub fn about(&self) -> AboutView {
        self.sections.about(&self.portfolio.about)
    }

    #[must_use]
    pub fn skills(&self) -> SkillsView {
        self.sections.skills(&self.portfolio.skills)
    }

    #[must_use]
    pub fn projects(&self) -> ProjectsView {
        self.sections.projects(&self.portfolio.projects)
    }

    #[must_use]
    pub fn experience(&self) -> ExperienceView {
        self.experience_at(self.today())
    }

    #[must_use]
    pub fn experience_at(&self, today: NaiveDate) -> ExperienceView {
        self.sections.experience(&self.portfolio.experience, today)
    }

    #[must_use]
    pub fn education(&self) -> EducationView {
        self.sections.education(&self.portfolio.education)
    }

    #[must_use]
    pub fn achievements(&self) -> AchievementsView {
        self.achievements_at(self.today())
    }

    #[must_use]
    pub fn achievements_at(&self, today: NaiveDate) -> AchievementsView {
        self.sections.achievements(&self.portfolio.achievements, today)
    }

    /// Achievement timeline narrowed to one category (`All` keeps everything).
    /// Empty when the section is showing placeholders.
    #[must_use]
    pub fn achievements_in_category(&self, filter: CategoryFilter) -> Vec<YearBucket<AchievementRow>> {
        let view = self.achievements();
        self.sections.filter_timeline(&view.years, filter)
    }

    #[must_use]
    pub fn contact(&self) -> ContactView {
        self.sections.contact(&self.portfolio.contact)
    }
}
