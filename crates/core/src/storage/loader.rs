use std::path::Path;

use crate::errors::CoreError;
use crate::models::portfolio::Portfolio;

/// Reads a `Portfolio` from its JSON form (`portfolio.json`).
///
/// The record is never written back; loading is the only storage concern.
pub struct PortfolioLoader;

impl PortfolioLoader {
    /// Parse a portfolio from a JSON string.
    ///
    /// Flow: trim check → `serde_json::Value` (must be an object) → Portfolio
    pub fn load_from_str(json: &str) -> Result<Portfolio, CoreError> {
        if json.trim().is_empty() {
            return Err(CoreError::InvalidFileFormat("portfolio data is empty".into()));
        }

        // 1. Parse as a generic value first so we can report shape errors clearly
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(CoreError::InvalidFileFormat(format!(
                "expected a JSON object at the top level, found {}",
                json_kind(&value)
            )));
        }

        // 2. Map onto the typed record; every field is optional
        let portfolio: Portfolio = serde_json::from_value(value)
            .map_err(|e| CoreError::Deserialization(format!("Failed to read portfolio: {e}")))?;

        tracing::debug!(
            skills = portfolio.skills.len(),
            projects = portfolio.projects.len(),
            experience = portfolio.experience.len(),
            education = portfolio.education.len(),
            achievements = portfolio.achievements.len(),
            "portfolio loaded"
        );

        Ok(portfolio)
    }

    /// Parse a portfolio from raw bytes (must be UTF-8 JSON).
    pub fn load_from_bytes(data: &[u8]) -> Result<Portfolio, CoreError> {
        let json = std::str::from_utf8(data)
            .map_err(|e| CoreError::InvalidFileFormat(format!("portfolio data is not UTF-8: {e}")))?;
        Self::load_from_str(json)
    }

    /// Read and parse a portfolio file from disk.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Portfolio, CoreError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "reading portfolio file");
        let bytes = std::fs::read(path)?;
        Self::load_from_bytes(&bytes)
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
