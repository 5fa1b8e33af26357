//! Scales, axis ticks and SVG path helpers shared by the chart components.

use std::f64::consts::{FRAC_PI_2, TAU};

/// Outer chart box (SVG viewBox units) and the margins around the plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Frame {
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            left: 48.0,
            right: 24.0,
            top: 16.0,
            bottom: 40.0,
        }
    }

    pub const fn with_margins(mut self, left: f64, right: f64, top: f64, bottom: f64) -> Self {
        self.left = left;
        self.right = right;
        self.top = top;
        self.bottom = bottom;
        self
    }

    pub fn plot_width(&self) -> f64 {
        (self.width - self.left - self.right).max(1.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.top - self.bottom).max(1.0)
    }

    pub fn plot_right(&self) -> f64 {
        self.left + self.plot_width()
    }

    pub fn plot_bottom(&self) -> f64 {
        self.top + self.plot_height()
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

/// Maps a data interval onto a pixel interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if (d1 - d0).abs() < f64::EPSILON {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }
}

/// A 1–2–5 step giving roughly `target` intervals up to `max`.
pub fn nice_step(max: f64, target: usize) -> f64 {
    if !max.is_finite() || max <= 0.0 {
        return 1.0;
    }
    let raw = max / target.max(1) as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let norm = raw / magnitude;
    let step = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    step * magnitude
}

/// Axis top (a whole number of steps ≥ `max`) and tick values from zero.
pub fn axis_ticks(max: f64, target: usize) -> (f64, Vec<f64>) {
    let step = nice_step(max, target);
    let steps = if max > 0.0 { (max / step).ceil() as usize } else { 1 };
    let top = step * steps.max(1) as f64;
    let ticks = (0..=steps.max(1)).map(|i| step * i as f64).collect();
    (top, ticks)
}

pub fn tick_label(value: f64) -> String {
    if value.fract().abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// Point on a circle, `fraction` of a turn clockwise from twelve o'clock.
pub fn polar(cx: f64, cy: f64, r: f64, fraction: f64) -> (f64, f64) {
    let angle = fraction * TAU - FRAC_PI_2;
    (cx + r * angle.cos(), cy + r * angle.sin())
}

/// Pie wedge between two turn fractions.
pub fn arc_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> String {
    let sweep = (end - start).clamp(0.0, 1.0);
    if sweep >= 0.999_999 {
        return format!(
            "M {cx:.2} {top:.2} A {r:.2} {r:.2} 0 1 1 {cx:.2} {bottom:.2} A {r:.2} {r:.2} 0 1 1 {cx:.2} {top:.2} Z",
            top = cy - r,
            bottom = cy + r
        );
    }
    let (x0, y0) = polar(cx, cy, r, start);
    let (x1, y1) = polar(cx, cy, r, start + sweep);
    let large = u8::from(sweep > 0.5);
    format!("M {cx:.2} {cy:.2} L {x0:.2} {y0:.2} A {r:.2} {r:.2} 0 {large} 1 {x1:.2} {y1:.2} Z")
}

/// `points` attribute for an SVG polyline.
pub fn polyline_points(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.2},{y:.2}"))
        .collect::<Vec<_>>()
        .join(" ")
}
