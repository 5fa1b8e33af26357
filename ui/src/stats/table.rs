//! Read-only run table.

use super::totals::distinct_players;
use super::victim_records;
use crate::core::config::DashboardConfig;
use crate::core::record::RunRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct RunRow {
    pub run: u32,
    pub day: u32,
    pub duration_min: f64,
    pub player: String,
    pub cause: String,
    pub achievements: Vec<bool>,
    pub notes: String,
    pub victory: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunTable {
    pub achievements: Vec<String>,
    pub rows: Vec<RunRow>,
    pub total_runs: usize,
    /// Distinct players among the runs that count as deaths.
    pub distinct_players: usize,
}

pub fn run_table(
    achievements: &[String],
    records: &[RunRecord],
    config: &DashboardConfig,
) -> RunTable {
    let rows = records
        .iter()
        .map(|record| RunRow {
            run: record.run,
            day: record.day,
            duration_min: record.duration_min,
            player: record.player.clone(),
            cause: record.cause.clone(),
            achievements: record.achievements.clone(),
            notes: record.notes.clone().unwrap_or_default(),
            victory: config.is_victory(record),
        })
        .collect();

    let victims = victim_records(records, config);

    RunTable {
        achievements: achievements.to_vec(),
        rows,
        total_runs: records.len(),
        distinct_players: distinct_players(&victims),
    }
}
