use anyhow::Context;
use portfolio_view_core::storage::loader::PortfolioLoader;
use portfolio_view_core::PortfolioView;
use serde_json::Value;

use crate::config::{CliConfig, Section};

/// Load, derive and serialize according to the command line.
pub fn run(config: &CliConfig) -> anyhow::Result<String> {
    let settings = config.display_settings()?;
    let portfolio = PortfolioLoader::load_from_file(&config.path)
        .with_context(|| format!("failed to load portfolio from {}", config.path.display()))?;
    let view = PortfolioView::with_settings(portfolio, settings)
        .context("invalid display settings")?;

    let today = view.today();
    tracing::info!(%today, section = ?config.section, "deriving portfolio view");

    let value = match (config.section, config.category) {
        (Some(Section::Achievements), Some(category)) | (None, Some(category)) => {
            serde_json::to_value(view.achievements_in_category(category.into()))?
        }
        (None, None) => serde_json::to_value(view.render_at(today))?,
        (Some(section), _) => section_value(&view, section, today)?,
    };

    let output = if config.compact {
        serde_json::to_string(&value)?
    } else {
        serde_json::to_string_pretty(&value)?
    };
    Ok(output)
}

fn section_value(
    view: &PortfolioView,
    section: Section,
    today: chrono::NaiveDate,
) -> serde_json::Result<Value> {
    match section {
        Section::Hero => serde_json::to_value(view.hero()),
        Section::About => serde_json::to_value(view.about()),
        Section::Skills => serde_json::to_value(view.skills()),
        Section::Projects => serde_json::to_value(view.projects()),
        Section::Experience => serde_json::to_value(view.experience_at(today)),
        Section::Education => serde_json::to_value(view.education()),
        Section::Achievements => serde_json::to_value(view.achievements_at(today)),
        Section::Contact => serde_json::to_value(view.contact()),
    }
}
