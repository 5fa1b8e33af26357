//! Headline totals for the summary tiles.

use std::collections::BTreeSet;

use crate::core::record::RunRecord;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Totals {
    pub runs: usize,
    pub total_min: f64,
    /// `None` for an empty selection.
    pub mean_min: Option<f64>,
    pub longest_min: Option<f64>,
}

impl Totals {
    pub fn from_records(records: &[RunRecord]) -> Self {
        let runs = records.len();
        let total_min = records.iter().map(|r| r.duration_min).sum::<f64>();
        let mean_min = (runs > 0).then(|| total_min / runs as f64);
        let longest_min = records.iter().map(|r| r.duration_min).reduce(f64::max);

        Self {
            runs,
            total_min,
            mean_min,
            longest_min,
        }
    }

    pub fn total_hours(&self) -> f64 {
        self.total_min / 60.0
    }
}

pub fn distinct_players(records: &[RunRecord]) -> usize {
    records
        .iter()
        .map(|r| r.player.as_str())
        .collect::<BTreeSet<_>>()
        .len()
}
