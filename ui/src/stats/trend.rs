//! Straight-line extrapolation of milestone durations.
//!
//! Ordinary least squares over at most a handful of points. There is no
//! regularization and no outlier handling: one unusually long run moves the
//! whole line, and predictions for far-off milestones are rough at best.

use thiserror::Error;

use super::milestones::MilestonePoint;
use crate::core::config::TrendAxis;

/// Fewest reached milestones needed for a fit.
pub const MIN_POINTS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrendError {
    #[error("need at least {MIN_POINTS} completed milestones, have {0}")]
    InsufficientData(usize),
    #[error("every point shares the same position")]
    Degenerate,
}

/// `y ≈ slope · x + intercept`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendFit {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination on the fitted points.
    pub r_squared: f64,
    pub points: usize,
}

impl TrendFit {
    pub fn fit(points: &[(f64, f64)]) -> Result<Self, TrendError> {
        let points: Vec<(f64, f64)> = points
            .iter()
            .copied()
            .filter(|(x, y)| x.is_finite() && y.is_finite())
            .collect();
        let n = points.len();
        if n < MIN_POINTS {
            return Err(TrendError::InsufficientData(n));
        }

        let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n as f64;
        let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n as f64;

        let sxx: f64 = points.iter().map(|(x, _)| (x - mean_x).powi(2)).sum();
        if sxx <= f64::EPSILON {
            return Err(TrendError::Degenerate);
        }
        let sxy: f64 = points
            .iter()
            .map(|(x, y)| (x - mean_x) * (y - mean_y))
            .sum();

        let slope = sxy / sxx;
        let intercept = mean_y - slope * mean_x;

        let ss_res: f64 = points
            .iter()
            .map(|(x, y)| (y - (slope * x + intercept)).powi(2))
            .sum();
        let ss_tot: f64 = points.iter().map(|(_, y)| (y - mean_y).powi(2)).sum();

        // flat data: perfect fit scores 1, anything else 0
        let r_squared = if ss_tot <= f64::EPSILON {
            if ss_res <= f64::EPSILON {
                1.0
            } else {
                0.0
            }
        } else {
            1.0 - ss_res / ss_tot
        };

        Ok(Self {
            slope,
            intercept,
            r_squared,
            points: n,
        })
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastPoint {
    pub index: usize,
    pub name: String,
    pub minutes: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MilestoneForecast {
    pub fit: TrendFit,
    /// Observed averages the line was fitted on.
    pub actual: Vec<MilestonePoint>,
    /// x of each `actual` point on the line.
    pub positions: Vec<usize>,
    /// Line value at every milestone, reached or not.
    pub fitted: Vec<ForecastPoint>,
    /// Line value past the observed points (progression axis) or at the
    /// milestones nobody reached (column axis).
    pub predicted: Vec<ForecastPoint>,
}

impl MilestoneForecast {
    /// Estimated duration for the final milestone.
    pub fn final_milestone(&self) -> Option<&ForecastPoint> {
        self.fitted.last()
    }
}

/// Fit `axis` position → mean duration and extend the line over every
/// milestone in `achievements`. Fitted values are read at each milestone's
/// column position.
pub fn forecast(
    achievements: &[String],
    points: &[MilestonePoint],
    axis: TrendAxis,
) -> Result<MilestoneForecast, TrendError> {
    let positions: Vec<usize> = match axis {
        TrendAxis::Progression => (0..points.len()).collect(),
        TrendAxis::Column => points.iter().map(|p| p.index).collect(),
    };
    let pairs: Vec<(f64, f64)> = positions
        .iter()
        .zip(points)
        .map(|(x, p)| (*x as f64, p.mean_min))
        .collect();
    let fit = TrendFit::fit(&pairs)?;

    let fitted: Vec<ForecastPoint> = achievements
        .iter()
        .enumerate()
        .map(|(index, name)| ForecastPoint {
            index,
            name: name.clone(),
            minutes: fit.predict(index as f64),
        })
        .collect();

    let predicted = match axis {
        TrendAxis::Progression => fitted.iter().skip(points.len()).cloned().collect(),
        TrendAxis::Column => fitted
            .iter()
            .filter(|f| !points.iter().any(|p| p.index == f.index))
            .cloned()
            .collect(),
    };

    Ok(MilestoneForecast {
        fit,
        actual: points.to_vec(),
        positions,
        fitted,
        predicted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(index: usize, mean_min: f64) -> MilestonePoint {
        MilestonePoint {
            index,
            name: format!("M{index}"),
            runs: 1,
            mean_min,
        }
    }

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("M{i}")).collect()
    }

    #[test]
    fn two_points_define_the_line() {
        let fit = TrendFit::fit(&[(0.0, 10.0), (1.0, 20.0)]).unwrap();
        assert!((fit.slope - 10.0).abs() < 1e-9);
        assert!((fit.intercept - 10.0).abs() < 1e-9);
        assert!((fit.predict(2.0) - 30.0).abs() < 1e-9);
        assert!((fit.r_squared - 1.0).abs() < 1e-9);
    }

    #[test]
    fn noisy_points_score_below_one() {
        let fit = TrendFit::fit(&[(0.0, 10.0), (1.0, 25.0), (2.0, 28.0), (3.0, 45.0)]).unwrap();
        assert!(fit.slope > 0.0);
        assert!(fit.r_squared > 0.8 && fit.r_squared < 1.0);
    }

    #[test]
    fn too_few_points_is_an_error() {
        assert_eq!(
            TrendFit::fit(&[(0.0, 10.0)]),
            Err(TrendError::InsufficientData(1))
        );
        assert_eq!(TrendFit::fit(&[]), Err(TrendError::InsufficientData(0)));
        assert_eq!(
            TrendFit::fit(&[(1.0, 10.0), (1.0, 30.0)]),
            Err(TrendError::Degenerate)
        );
    }

    #[test]
    fn flat_data_is_a_perfect_fit() {
        let fit = TrendFit::fit(&[(0.0, 12.0), (1.0, 12.0), (2.0, 12.0)]).unwrap();
        assert_eq!(fit.slope, 0.0);
        assert_eq!(fit.r_squared, 1.0);
    }

    #[test]
    fn forecast_extends_to_unreached_milestones() {
        let result = forecast(&names(4), &[point(0, 10.0), point(1, 20.0)], TrendAxis::Progression).unwrap();
        assert_eq!(result.fitted.len(), 4);
        assert_eq!(result.predicted.len(), 2);
        assert_eq!(result.predicted[0].index, 2);
        assert!((result.predicted[0].minutes - 30.0).abs() < 1e-9);
        let last = result.final_milestone().unwrap();
        assert_eq!(last.index, 3);
        assert!((last.minutes - 40.0).abs() < 1e-9);
    }

    #[test]
    fn unreached_middle_milestone_closes_the_gap() {
        // M1 never reached: M0 and M2 sit next to each other on the line.
        let points = [point(0, 15.0), point(2, 20.0)];
        let result = forecast(&names(4), &points, TrendAxis::Progression).unwrap();
        assert_eq!(result.positions, vec![0, 1]);
        assert!((result.fit.slope - 5.0).abs() < 1e-9);
        assert!((result.fit.intercept - 15.0).abs() < 1e-9);
        assert_eq!(
            result.predicted.iter().map(|p| p.index).collect::<Vec<_>>(),
            vec![2, 3]
        );
        let last = result.final_milestone().unwrap();
        assert_eq!(last.name, "M3");
        assert!((last.minutes - 30.0).abs() < 1e-9);
    }

    #[test]
    fn column_axis_keeps_table_positions() {
        let points = [point(0, 15.0), point(2, 20.0)];
        let result = forecast(&names(4), &points, TrendAxis::Column).unwrap();
        assert_eq!(result.positions, vec![0, 2]);
        assert!((result.fit.slope - 2.5).abs() < 1e-9);
        assert_eq!(
            result.predicted.iter().map(|p| p.index).collect::<Vec<_>>(),
            vec![1, 3]
        );
        assert!((result.final_milestone().unwrap().minutes - 22.5).abs() < 1e-9);
    }

    #[test]
    fn single_completed_milestone_skips_the_forecast() {
        let err = forecast(&names(4), &[point(0, 10.0)], TrendAxis::Progression).unwrap_err();
        assert_eq!(err, TrendError::InsufficientData(1));
        assert!(err.to_string().contains("have 1"));
    }
}
