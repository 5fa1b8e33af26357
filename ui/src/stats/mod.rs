//! Pure aggregations over a (filtered) set of run records. Every function here
//! takes records by reference and returns fresh values.

pub mod completion;
pub mod daily;
pub mod deaths;
pub mod milestones;
pub mod mode;
pub mod table;
pub mod time_lost;
pub mod timeline;
pub mod totals;
pub mod trend;

use crate::core::config::DashboardConfig;
use crate::core::record::RunRecord;

/// Records that belong in per-player death statistics (victories are dropped
/// unless the config keeps them).
pub fn victim_records(records: &[RunRecord], config: &DashboardConfig) -> Vec<RunRecord> {
    records
        .iter()
        .filter(|r| config.counts_as_death(r))
        .cloned()
        .collect()
}
