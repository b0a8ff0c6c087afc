use chrono::{Datelike, Months, NaiveDate};

use crate::models::settings::MonthCounting;
use super::date_service::DateService;

/// Days per month under the fixed-length approximation.
const DAYS_PER_MONTH: i64 = 30;

/// Computes coarse tenure labels such as "1y 6m".
///
/// "Today" is always passed in by the caller so that every section of one
/// render pass agrees on it, and so tests can pin it.
pub struct DurationService {
    counting: MonthCounting,
    dates: DateService,
}

impl DurationService {
    pub fn new() -> Self {
        Self::with_counting(MonthCounting::default())
    }

    pub fn with_counting(counting: MonthCounting) -> Self {
        Self {
            counting,
            dates: DateService::new(),
        }
    }

    /// Elapsed time between `start` and `end` (or `today` when `end` is
    /// missing or unusable).
    ///
    /// Returns an empty string when `start` is missing or unusable. The
    /// argument order does not matter: the absolute span is measured.
    pub fn duration(&self, start: Option<&str>, end: Option<&str>, today: NaiveDate) -> String {
        let Some(start) = self.dates.parse_opt(start) else {
            return String::new();
        };
        let end = self.dates.parse_opt(end).unwrap_or(today);
        Self::format_months(self.elapsed_months(start, end))
    }

    /// Whole months between two dates, partial months rounded up.
    pub fn elapsed_months(&self, a: NaiveDate, b: NaiveDate) -> u32 {
        let (from, to) = if a <= b { (a, b) } else { (b, a) };
        match self.counting {
            MonthCounting::Calendar => calendar_months(from, to),
            MonthCounting::ThirtyDay => {
                let days = (to - from).num_days();
                let months = (days + DAYS_PER_MONTH - 1) / DAYS_PER_MONTH;
                u32::try_from(months).unwrap_or(u32::MAX)
            }
        }
    }

    /// "{y}y {m}m", "{y}y" or "{m}m" (zero months included).
    pub fn format_months(total_months: u32) -> String {
        let years = total_months / 12;
        let months = total_months % 12;
        match (years, months) {
            (0, m) => format!("{m}m"),
            (y, 0) => format!("{y}y"),
            (y, m) => format!("{y}y {m}m"),
        }
    }
}

impl Default for DurationService {
    fn default() -> Self {
        Self::new()
    }
}

/// Calendar months from `from` to `to` (`from <= to`); leftover days count as a month.
fn calendar_months(from: NaiveDate, to: NaiveDate) -> u32 {
    let mut months =
        (to.year() - from.year()) * 12 + (to.month() as i32 - from.month() as i32);
    if to.day() < from.day() {
        months -= 1;
    }
    let whole = u32::try_from(months.max(0)).unwrap_or(0);

    // Month addition clamps to the last day (Jan 31 + 1 month = Feb 28).
    match from.checked_add_months(Months::new(whole)) {
        Some(anchor) if anchor < to => whole + 1,
        _ => whole,
    }
}
