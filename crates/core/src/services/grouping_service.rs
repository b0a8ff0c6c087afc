use std::cmp::Ordering;
use std::collections::HashMap;

use crate::models::stats::{YearBucket, YearKey};
use crate::models::timeline::Dated;
use super::date_service::DateService;

/// Buckets dated records by calendar year for timeline displays.
pub struct GroupingService {
    dates: DateService,
}

impl GroupingService {
    pub fn new() -> Self {
        Self {
            dates: DateService::new(),
        }
    }

    /// Group records by the year of their date.
    ///
    /// Buckets come out most recent year first, with `Unknown` (missing or
    /// unparseable dates) always last. Within a bucket the input order is kept.
    pub fn group_by_year<T: Dated + Clone>(&self, items: &[T]) -> Vec<YearBucket<T>> {
        self.group_by_year_with(items.iter().cloned(), |item| self.dates.year_of(item.date()))
    }

    /// Same bucketing and ordering as `group_by_year`, with a caller-supplied key.
    pub fn group_by_year_with<T, I, F>(&self, items: I, key_fn: F) -> Vec<YearBucket<T>>
    where
        I: IntoIterator<Item = T>,
        F: Fn(&T) -> YearKey,
    {
        let mut buckets: Vec<YearBucket<T>> = Vec::new();
        let mut index: HashMap<YearKey, usize> = HashMap::new();

        for item in items {
            let year = key_fn(&item);
            match index.get(&year) {
                Some(&pos) => buckets[pos].items.push(item),
                None => {
                    index.insert(year, buckets.len());
                    buckets.push(YearBucket {
                        year,
                        items: vec![item],
                    });
                }
            }
        }

        buckets.sort_by(|a, b| timeline_order(&a.year, &b.year));
        buckets
    }
}

impl Default for GroupingService {
    fn default() -> Self {
        Self::new()
    }
}

/// Newest year first; `Unknown` after every numeric year.
pub fn timeline_order(a: &YearKey, b: &YearKey) -> Ordering {
    match (a, b) {
        (YearKey::Year(x), YearKey::Year(y)) => y.cmp(x),
        (YearKey::Year(_), YearKey::Unknown) => Ordering::Less,
        (YearKey::Unknown, YearKey::Year(_)) => Ordering::Greater,
        (YearKey::Unknown, YearKey::Unknown) => Ordering::Equal,
    }
}
