//! Milestone achievement statistics.
//!
//! Two views of the same flags exist:
//! - per-flag rates overlap (a run that reached three milestones counts in
//!   three rates);
//! - buckets are exclusive (each run lands in the bucket of the furthest
//!   milestone it reached, or "none reached"), so bucket counts always add up
//!   to the number of runs. The completion pie uses the buckets.

use crate::core::record::RunRecord;

#[derive(Debug, Clone, PartialEq)]
pub struct AchievementRate {
    pub index: usize,
    pub name: String,
    pub count: usize,
    /// Fraction of runs with the flag set; 0 for an empty selection.
    pub rate: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AchievementRates {
    pub rates: Vec<AchievementRate>,
    pub none_reached: usize,
    pub runs: usize,
}

pub fn achievement_rates(achievements: &[String], records: &[RunRecord]) -> AchievementRates {
    let runs = records.len();
    let rates = achievements
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let count = records.iter().filter(|r| r.reached(index)).count();
            AchievementRate {
                index,
                name: name.clone(),
                count,
                rate: fraction(count, runs),
            }
        })
        .collect();

    AchievementRates {
        rates,
        none_reached: records.iter().filter(|r| !r.reached_any()).count(),
        runs,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketKind {
    NoneReached,
    Milestone(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct MilestoneBucket {
    pub kind: BucketKind,
    /// Milestone name; `None` for the "none reached" bucket.
    pub name: Option<String>,
    /// Runs whose furthest milestone is this one.
    pub count: usize,
    /// Whether any run in the selection reached this milestone at all.
    pub ever_reached: bool,
}

/// "None reached" first, then one bucket per milestone in progression order.
pub fn milestone_buckets(achievements: &[String], records: &[RunRecord]) -> Vec<MilestoneBucket> {
    let mut counts = vec![0usize; achievements.len()];
    let mut none_reached = 0usize;

    for record in records {
        match record.furthest_milestone() {
            Some(idx) if idx < counts.len() => counts[idx] += 1,
            _ => none_reached += 1,
        }
    }

    std::iter::once(MilestoneBucket {
        kind: BucketKind::NoneReached,
        name: None,
        count: none_reached,
        ever_reached: true,
    })
    .chain(achievements.iter().enumerate().map(|(idx, name)| MilestoneBucket {
        kind: BucketKind::Milestone(idx),
        name: Some(name.clone()),
        count: counts[idx],
        ever_reached: records.iter().any(|r| r.reached(idx)),
    }))
    .collect()
}

/// Mean duration of the runs that reached one milestone.
#[derive(Debug, Clone, PartialEq)]
pub struct MilestonePoint {
    pub index: usize,
    pub name: String,
    pub runs: usize,
    pub mean_min: f64,
}

/// One point per milestone reached at least once, in milestone order.
pub fn achievement_durations(achievements: &[String], records: &[RunRecord]) -> Vec<MilestonePoint> {
    achievements
        .iter()
        .enumerate()
        .filter_map(|(index, name)| {
            let durations: Vec<f64> = records
                .iter()
                .filter(|r| r.reached(index))
                .map(|r| r.duration_min)
                .collect();
            (!durations.is_empty()).then(|| MilestonePoint {
                index,
                name: name.clone(),
                runs: durations.len(),
                mean_min: durations.iter().sum::<f64>() / durations.len() as f64,
            })
        })
        .collect()
}

fn fraction(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}
