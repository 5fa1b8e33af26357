//! Milestone pie: one slice per bucket, light to dark along the progression.

use super::geometry::{arc_path, polar};
use super::{palette_color, MILESTONE_PALETTE};
use crate::core::format::format_percent;
use crate::stats::milestones::{BucketKind, MilestoneBucket};
use crate::t;

/// Slices smaller than this get no in-slice percentage.
const MIN_LABELLED_FRACTION: f64 = 0.04;

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    /// Milestone name, starred when nobody in the selection reached it.
    pub label: String,
    pub count: usize,
    pub fraction: f64,
    pub color: &'static str,
    pub hover: String,
}

pub fn milestone_pie(buckets: &[MilestoneBucket]) -> Vec<PieSlice> {
    let total: usize = buckets.iter().map(|b| b.count).sum();

    buckets
        .iter()
        .map(|bucket| {
            let (label, color) = match bucket.kind {
                BucketKind::NoneReached => {
                    (t!("pie-none-reached"), palette_color(MILESTONE_PALETTE, 0))
                }
                BucketKind::Milestone(idx) => {
                    let name = bucket.name.clone().unwrap_or_default();
                    let label = if bucket.ever_reached {
                        name
                    } else {
                        format!("{name} *")
                    };
                    (label, palette_color(MILESTONE_PALETTE, idx + 1))
                }
            };
            let fraction = if total == 0 {
                0.0
            } else {
                bucket.count as f64 / total as f64
            };
            PieSlice {
                hover: t!(
                    "hover-pie",
                    label = label.as_str(),
                    runs = bucket.count.to_string(),
                    percent = format_percent(fraction)
                ),
                label,
                count: bucket.count,
                fraction,
                color,
            }
        })
        .collect()
}

/// Any slice label carries the "never reached" star.
pub fn has_unreached(slices: &[PieSlice]) -> bool {
    slices.iter().any(|s| s.label.ends_with(" *"))
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedSlice {
    pub path: String,
    pub color: &'static str,
    pub hover: String,
    /// In-slice percentage and where to draw it.
    pub text: Option<(f64, f64, String)>,
}

/// Wedges clockwise from twelve o'clock; empty buckets are skipped.
pub fn layout_pie(slices: &[PieSlice], cx: f64, cy: f64, r: f64) -> Vec<PlacedSlice> {
    let mut start = 0.0;
    slices
        .iter()
        .filter(|s| s.count > 0)
        .map(|slice| {
            let end = start + slice.fraction;
            let text = (slice.fraction >= MIN_LABELLED_FRACTION).then(|| {
                let (x, y) = polar(cx, cy, r * 0.65, (start + end) / 2.0);
                (x, y, format_percent(slice.fraction))
            });
            let placed = PlacedSlice {
                path: arc_path(cx, cy, r, start, end),
                color: slice.color,
                hover: slice.hover.clone(),
                text,
            };
            start = end;
            placed
        })
        .collect()
}
