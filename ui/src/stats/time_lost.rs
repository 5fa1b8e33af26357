//! Minutes lost per player: every run that ended with that player's death.

use std::collections::BTreeMap;

use crate::core::record::RunRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct RunSegment {
    pub run: u32,
    pub minutes: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerTimeLost {
    pub player: String,
    pub total_min: f64,
    /// Longest run first; equal durations keep run order.
    pub runs: Vec<RunSegment>,
}

/// Players ordered by total minutes ascending (ties by name).
pub fn time_lost(records: &[RunRecord]) -> Vec<PlayerTimeLost> {
    let mut by_player: BTreeMap<&str, Vec<RunSegment>> = BTreeMap::new();
    for record in records {
        by_player
            .entry(record.player.as_str())
            .or_default()
            .push(RunSegment {
                run: record.run,
                minutes: record.duration_min,
            });
    }

    let mut players: Vec<PlayerTimeLost> = by_player
        .into_iter()
        .map(|(player, mut runs)| {
            runs.sort_by(|a, b| b.minutes.total_cmp(&a.minutes));
            PlayerTimeLost {
                player: player.to_string(),
                total_min: runs.iter().map(|r| r.minutes).sum(),
                runs,
            }
        })
        .collect();

    players.sort_by(|a, b| a.total_min.total_cmp(&b.total_min));
    players
}
