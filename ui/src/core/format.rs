//! Formatting helpers for presenting run metrics.

/// Whole minutes with a thousands separator: `1,234 min`.
pub fn format_minutes(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    format!("{} min", group_thousands(value.trunc() as i64))
}

pub fn format_hours(minutes: f64) -> String {
    if !minutes.is_finite() {
        return "—".to_string();
    }
    format!("{:.1} h", minutes / 60.0)
}

pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    format!("{value:.decimals$}")
}

pub fn format_percent(fraction: f64) -> String {
    if !fraction.is_finite() {
        return "—".to_string();
    }
    format!("{:.1}%", fraction * 100.0)
}

/// Segment durations as they appear on bars and tooltips: `42 min`, `7.5 min`.
pub fn format_duration_label(minutes: f64) -> String {
    if minutes.fract().abs() < f64::EPSILON {
        format!("{minutes:.0} min")
    } else {
        format!("{minutes:.1} min")
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
