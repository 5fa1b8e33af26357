//! Deaths per player broken down by cause.

use std::collections::BTreeMap;

use super::mode::value_counts;
use crate::core::record::RunRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerOrder {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CauseCount {
    pub cause: String,
    pub deaths: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerDeaths {
    pub player: String,
    pub total: usize,
    /// Most frequent cause first.
    pub causes: Vec<CauseCount>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeathBreakdown {
    pub players: Vec<PlayerDeaths>,
    /// Every cause once, in order of first appearance. Drives color assignment.
    pub causes: Vec<String>,
}

/// Group `records` by (player, cause). Players are ordered by total deaths,
/// ties by name.
pub fn death_breakdown(records: &[RunRecord], order: PlayerOrder) -> DeathBreakdown {
    let mut by_player: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for record in records {
        by_player
            .entry(record.player.as_str())
            .or_default()
            .push(record.cause.as_str());
    }

    let mut players: Vec<PlayerDeaths> = by_player
        .into_iter()
        .map(|(player, causes)| PlayerDeaths {
            player: player.to_string(),
            total: causes.len(),
            causes: value_counts(causes)
                .into_iter()
                .map(|(cause, deaths)| CauseCount {
                    cause: cause.to_string(),
                    deaths,
                })
                .collect(),
        })
        .collect();

    match order {
        PlayerOrder::Ascending => players.sort_by(|a, b| a.total.cmp(&b.total)),
        PlayerOrder::Descending => players.sort_by(|a, b| b.total.cmp(&a.total)),
    }

    let mut first_seen: Vec<String> = Vec::new();
    for record in records {
        if !first_seen.contains(&record.cause) {
            first_seen.push(record.cause.clone());
        }
    }

    DeathBreakdown {
        players,
        causes: first_seen,
    }
}
