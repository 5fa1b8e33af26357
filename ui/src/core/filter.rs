//! Day selection applied before every aggregate.

use std::fmt;

use super::record::{Dataset, RunRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DayFilter {
    #[default]
    All,
    Day(u32),
}

impl DayFilter {
    pub fn matches(&self, record: &RunRecord) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::Day(day) => record.day == *day,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, DayFilter::All)
    }

    /// Selector options: "all" first, then each day ascending.
    pub fn options(dataset: &Dataset) -> Vec<DayFilter> {
        std::iter::once(DayFilter::All)
            .chain(dataset.days().into_iter().map(DayFilter::Day))
            .collect()
    }

    /// Stable key for the selector widget (`"all"`, `"3"`).
    pub fn key(&self) -> String {
        match self {
            DayFilter::All => "all".to_string(),
            DayFilter::Day(day) => day.to_string(),
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim() {
            "all" => Some(DayFilter::All),
            other => other.parse().ok().map(DayFilter::Day),
        }
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayFilter::All => f.write_str("All days"),
            DayFilter::Day(day) => write!(f, "Day {day}"),
        }
    }
}

/// Records matching `filter`, in their original order.
pub fn apply(records: &[RunRecord], filter: DayFilter) -> Vec<RunRecord> {
    records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect()
}
