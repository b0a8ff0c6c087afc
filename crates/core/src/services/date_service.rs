use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use crate::models::stats::YearKey;

/// Precision of a formatted date label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    /// "June 1, 2023"
    Day,
    /// "June 2023"
    Month,
    /// "Jun 2023"
    MonthShort,
    /// "2023"
    Year,
}

impl Granularity {
    fn pattern(&self) -> &'static str {
        match self {
            Granularity::Day => "%B %-d, %Y",
            Granularity::Month => "%B %Y",
            Granularity::MonthShort => "%b %Y",
            Granularity::Year => "%Y",
        }
    }
}

/// Label used when a date is absent or unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFallback {
    /// Open-ended ranges (an experience entry without an end date).
    Present,
    /// Decorative labels that simply disappear.
    Blank,
}

impl DateFallback {
    pub fn label(&self) -> &'static str {
        match self {
            DateFallback::Present => "Present",
            DateFallback::Blank => "",
        }
    }
}

/// Parses loosely-formatted ISO dates and renders them as English labels.
///
/// Never fails: anything unparseable is treated as if the date were missing.
pub struct DateService;

impl DateService {
    pub fn new() -> Self {
        Self
    }

    /// Parse an ISO-8601 date or timestamp into a calendar date.
    ///
    /// Accepts `YYYY-MM-DD`, `YYYY-MM` (first of the month), `YYYY`
    /// (January 1st), RFC 3339 timestamps and naive `YYYY-MM-DDTHH:MM[:SS[.f]]`
    /// timestamps. Timestamps keep the date as written, offsets are not applied.
    pub fn parse(&self, raw: &str) -> Option<NaiveDate> {
        let s = raw.trim();
        if s.is_empty() {
            return None;
        }

        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Some(date);
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.date_naive());
        }
        for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, pattern) {
                return Some(dt.date());
            }
        }

        let all_digits = |part: &str| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit());
        match s.split_once('-') {
            // YYYY-MM
            Some((year, month)) if year.len() == 4 && all_digits(year) && all_digits(month) => {
                let month: u32 = month.parse().ok()?;
                NaiveDate::from_ymd_opt(year.parse().ok()?, month, 1)
            }
            // YYYY
            None if s.len() == 4 && all_digits(s) => NaiveDate::from_ymd_opt(s.parse().ok()?, 1, 1),
            _ => {
                tracing::trace!(raw = s, "unparseable date treated as missing");
                None
            }
        }
    }

    /// Parse an optional raw date, treating `None` and garbage alike.
    pub fn parse_opt(&self, raw: Option<&str>) -> Option<NaiveDate> {
        raw.and_then(|r| self.parse(r))
    }

    /// Format an optional ISO date at the requested granularity.
    ///
    /// Absent, empty or unparseable input yields `fallback`'s label.
    pub fn format_date(
        &self,
        date: Option<&str>,
        granularity: Granularity,
        fallback: DateFallback,
    ) -> String {
        match self.parse_opt(date) {
            Some(parsed) => self.format_parsed(parsed, granularity),
            None => fallback.label().to_string(),
        }
    }

    /// Format an already-parsed date.
    pub fn format_parsed(&self, date: NaiveDate, granularity: Granularity) -> String {
        date.format(granularity.pattern()).to_string()
    }

    /// Year bucket key for an optional raw date.
    pub fn year_of(&self, date: Option<&str>) -> YearKey {
        match self.parse_opt(date) {
            Some(parsed) => YearKey::Year(parsed.year()),
            None => YearKey::Unknown,
        }
    }
}

impl Default for DateService {
    fn default() -> Self {
        Self::new()
    }
}
