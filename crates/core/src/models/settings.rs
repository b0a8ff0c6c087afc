use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// How elapsed months are counted for tenure labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthCounting {
    /// Calendar months between the two dates; leftover days round up.
    #[default]
    Calendar,
    /// `ceil(days / 30)`: fixed 30-day months, leftover days round up.
    ThirtyDay,
}

/// Display settings shared by every section of a render pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Injected "today". `None` reads the system clock once per render pass.
    pub reference_date: Option<NaiveDate>,

    pub month_counting: MonthCounting,

    /// GPA at or above this is shown as high and counted in education stats.
    pub high_gpa_threshold: f64,

    /// GPA at or above this (but below the high threshold) is shown as medium.
    pub medium_gpa_threshold: f64,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            reference_date: None,
            month_counting: MonthCounting::Calendar,
            high_gpa_threshold: 3.5,
            medium_gpa_threshold: 3.0,
        }
    }
}

impl DisplaySettings {
    /// Settings pinned to a fixed "today" (handy for tests and snapshots).
    pub fn at(reference_date: NaiveDate) -> Self {
        Self {
            reference_date: Some(reference_date),
            ..Self::default()
        }
    }

    /// Reject thresholds that would make GPA tiering meaningless.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.high_gpa_threshold.is_finite() || !self.medium_gpa_threshold.is_finite() {
            return Err(CoreError::ValidationError(
                "GPA thresholds must be finite numbers".into(),
            ));
        }
        if self.medium_gpa_threshold > self.high_gpa_threshold {
            return Err(CoreError::ValidationError(format!(
                "Medium GPA threshold ({}) must not exceed high GPA threshold ({})",
                self.medium_gpa_threshold, self.high_gpa_threshold
            )));
        }
        Ok(())
    }
}
