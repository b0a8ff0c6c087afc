use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use portfolio_view_core::models::settings::DisplaySettings;
use portfolio_view_core::models::view::{AchievementCategory, CategoryFilter};

#[derive(Debug, Clone, Parser)]
#[command(name = "portfolio-view")]
#[command(about = "Derive display-ready portfolio sections from a portfolio.json file")]
pub struct CliConfig {
    /// Path to portfolio.json
    pub path: PathBuf,

    /// TOML file with display settings
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Reference date (YYYY-MM-DD) used instead of the system clock
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Print a single section instead of the whole page
    #[arg(long, value_enum)]
    pub section: Option<Section>,

    /// Narrow the achievements timeline to one category
    #[arg(long, value_enum)]
    pub category: Option<Category>,

    #[arg(long, help = "Print single-line JSON")]
    pub compact: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    Hero,
    About,
    Skills,
    Projects,
    Experience,
    Education,
    Achievements,
    Contact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Category {
    All,
    Awards,
    Certifications,
    Competitions,
    Recognition,
    Other,
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        match category {
            Category::All => CategoryFilter::All,
            Category::Awards => CategoryFilter::Only(AchievementCategory::Award),
            Category::Certifications => CategoryFilter::Only(AchievementCategory::Certification),
            Category::Competitions => CategoryFilter::Only(AchievementCategory::Competition),
            Category::Recognition => CategoryFilter::Only(AchievementCategory::Recognition),
            Category::Other => CategoryFilter::Only(AchievementCategory::Other),
        }
    }
}

impl CliConfig {
    /// Settings file (if any) with `--today` applied on top.
    pub fn display_settings(&self) -> anyhow::Result<DisplaySettings> {
        let mut settings = match &self.settings {
            Some(path) => load_settings(path)?,
            None => DisplaySettings::default(),
        };
        if let Some(today) = self.today {
            settings.reference_date = Some(today);
        }
        Ok(settings)
    }
}

/// Read `DisplaySettings` from a TOML file. Missing keys keep their defaults.
pub fn load_settings(path: &Path) -> anyhow::Result<DisplaySettings> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file {}", path.display()))?;
    let settings: DisplaySettings = toml::from_str(&content)
        .with_context(|| format!("invalid settings file {}", path.display()))?;
    tracing::debug!(?settings, "display settings loaded");
    Ok(settings)
}
