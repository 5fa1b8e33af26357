//! Runs stacked in chronological order, one column per day.

use std::collections::BTreeMap;

use crate::core::filter::DayFilter;
use crate::core::record::RunRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineRun {
    pub run: u32,
    pub minutes: f64,
    pub player: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineColumn {
    /// `None` for the single "all runs" column shown for a one-day selection.
    pub day: Option<u32>,
    pub runs: Vec<TimelineRun>,
}

impl TimelineColumn {
    pub fn total_min(&self) -> f64 {
        self.runs.iter().map(|r| r.minutes).sum()
    }
}

pub fn timeline(records: &[RunRecord], filter: DayFilter) -> Vec<TimelineColumn> {
    let entry = |record: &RunRecord| TimelineRun {
        run: record.run,
        minutes: record.duration_min,
        player: record.player.clone(),
    };

    let mut columns = if filter.is_all() {
        let mut by_day: BTreeMap<u32, Vec<TimelineRun>> = BTreeMap::new();
        for record in records {
            by_day.entry(record.day).or_default().push(entry(record));
        }
        by_day
            .into_iter()
            .map(|(day, runs)| TimelineColumn {
                day: Some(day),
                runs,
            })
            .collect::<Vec<_>>()
    } else if records.is_empty() {
        Vec::new()
    } else {
        vec![TimelineColumn {
            day: None,
            runs: records.iter().map(entry).collect(),
        }]
    };

    for column in &mut columns {
        column.runs.sort_by_key(|r| r.run);
    }
    columns
}
