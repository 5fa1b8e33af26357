//! Day-over-day trend lines. Always computed on the full dataset.

use std::collections::BTreeMap;

use crate::core::record::{Dataset, RunRecord};

#[derive(Debug, Clone, PartialEq)]
pub struct DayTrend {
    pub day: u32,
    pub runs: usize,
    pub mean_min: f64,
    pub max_min: f64,
    pub mean_achievements: f64,
    /// 1-based position of the furthest milestone anyone reached that day, 0
    /// when none was.
    pub furthest_milestone: usize,
}

pub fn daily_trends(dataset: &Dataset) -> Vec<DayTrend> {
    let mut by_day: BTreeMap<u32, Vec<&RunRecord>> = BTreeMap::new();
    for record in &dataset.records {
        by_day.entry(record.day).or_default().push(record);
    }

    by_day
        .into_iter()
        .map(|(day, records)| {
            let runs = records.len() as f64;
            DayTrend {
                day,
                runs: records.len(),
                mean_min: records.iter().map(|r| r.duration_min).sum::<f64>() / runs,
                max_min: records
                    .iter()
                    .map(|r| r.duration_min)
                    .fold(0.0, f64::max),
                mean_achievements: records
                    .iter()
                    .map(|r| r.achievement_count() as f64)
                    .sum::<f64>()
                    / runs,
                furthest_milestone: records
                    .iter()
                    .filter_map(|r| r.furthest_milestone())
                    .max()
                    .map_or(0, |idx| idx + 1),
            }
        })
        .collect()
}
