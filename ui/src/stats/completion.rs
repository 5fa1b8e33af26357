//! Duration shown on the "completion run" tile.

use super::trend::{MilestoneForecast, TrendError};
use crate::core::config::{CompletionMetric, DashboardConfig};
use crate::core::record::RunRecord;

#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// A recorded run: the victory when one exists, otherwise the last run.
    Actual {
        run: u32,
        minutes: f64,
        victory: bool,
    },
    /// Trend-line estimate for the final milestone.
    Predicted { milestone: String, minutes: f64 },
    /// Nothing to show, with the reason.
    Unavailable(CompletionGap),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CompletionGap {
    NoRuns,
    NoMilestones,
    Trend(TrendError),
}

pub fn completion(
    config: &DashboardConfig,
    records: &[RunRecord],
    forecast: Option<&Result<MilestoneForecast, TrendError>>,
) -> Completion {
    match config.completion {
        CompletionMetric::Actual => {
            let chosen = records
                .iter()
                .rev()
                .find(|r| config.is_victory(r))
                .or_else(|| records.last());
            match chosen {
                Some(record) => Completion::Actual {
                    run: record.run,
                    minutes: record.duration_min,
                    victory: config.is_victory(record),
                },
                None => Completion::Unavailable(CompletionGap::NoRuns),
            }
        }
        CompletionMetric::Predicted => match forecast {
            None => Completion::Unavailable(CompletionGap::NoMilestones),
            Some(Err(err)) => Completion::Unavailable(CompletionGap::Trend(err.clone())),
            Some(Ok(forecast)) => match forecast.final_milestone() {
                Some(last) => Completion::Predicted {
                    milestone: last.name.clone(),
                    minutes: last.minutes,
                },
                None => Completion::Unavailable(CompletionGap::NoMilestones),
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::TrendAxis;
    use crate::core::record::fixtures::record;
    use crate::stats::milestones::MilestonePoint;
    use crate::stats::trend::forecast;

    fn runs() -> Vec<RunRecord> {
        vec![
            record(1, 1, 10.0, "Alex", "Lava"),
            record(2, 1, 95.0, "Ender Dragon", "Defeated"),
            record(3, 2, 4.0, "Sam", "Fall"),
        ]
    }

    #[test]
    fn actual_uses_last_run_without_victory_rule() {
        let result = completion(&DashboardConfig::classic(), &runs(), None);
        assert_eq!(
            result,
            Completion::Actual {
                run: 3,
                minutes: 4.0,
                victory: false
            }
        );
    }

    #[test]
    fn actual_prefers_the_victory_run() {
        let result = completion(&DashboardConfig::embedded(), &runs(), None);
        assert_eq!(
            result,
            Completion::Actual {
                run: 2,
                minutes: 95.0,
                victory: true
            }
        );
        assert_eq!(
            completion(&DashboardConfig::embedded(), &[], None),
            Completion::Unavailable(CompletionGap::NoRuns)
        );
    }

    #[test]
    fn predicted_reads_the_final_milestone() {
        let names: Vec<String> = ["A", "B", "C"].iter().map(|s| s.to_string()).collect();
        let points = vec![
            MilestonePoint {
                index: 0,
                name: "A".into(),
                runs: 2,
                mean_min: 10.0,
            },
            MilestonePoint {
                index: 1,
                name: "B".into(),
                runs: 1,
                mean_min: 20.0,
            },
        ];
        let fc = forecast(&names, &points, TrendAxis::Progression);
        let result = completion(&DashboardConfig::forecast(), &runs(), Some(&fc));
        match result {
            Completion::Predicted { milestone, minutes } => {
                assert_eq!(milestone, "C");
                assert!((minutes - 30.0).abs() < 1e-9);
            }
            other => panic!("unexpected {other:?}"),
        }

        let short = forecast(&names, &points[..1], TrendAxis::Progression);
        assert_eq!(
            completion(&DashboardConfig::forecast(), &runs(), Some(&short)),
            Completion::Unavailable(CompletionGap::Trend(TrendError::InsufficientData(1)))
        );
    }
}
