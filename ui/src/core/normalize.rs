//! Field coercions applied to raw table cells before they become [`RunRecord`]s.
//!
//! [`RunRecord`]: crate::core::record::RunRecord

use once_cell::sync::Lazy;
use regex::Regex;

/// Header prefix marking a milestone column.
pub const ACHIEVEMENT_PREFIX: &str = "Achievement:";

static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid digit pattern"));
static NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"-?\d+(?:\.\d+)?").expect("valid number pattern"));

/// Minutes from free text such as `"10 minutes"`, `"42"` or `"-"`.
///
/// Empty cells and a bare dash mean "no duration" and yield `Some(0.0)`.
/// `None` means the text held no number at all; callers coerce that to zero
/// and count it as malformed.
pub fn parse_minutes(raw: &str) -> Option<f64> {
    let text = raw.trim();
    if text.is_empty() || text == "-" || text == "—" {
        return Some(0.0);
    }

    NUMBER
        .find(text)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .filter(|value| value.is_finite())
        .map(|value| value.max(0.0))
}

/// First run of ASCII digits inside a label (`"Run 12"` → 12).
pub fn first_digit_run(raw: &str) -> Option<u32> {
    DIGITS.find(raw).and_then(|m| m.as_str().parse().ok())
}

/// Upper-cases the first letter of every word and lower-cases the rest.
pub fn capitalize_name(raw: &str) -> String {
    raw.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Spreadsheet checkbox cell to bool. Anything unrecognised is `false`.
pub fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "true" | "yes" | "y" | "x" | "1" | "✓"
    )
}

/// Milestone name for an `Achievement: …` header, `None` for other columns.
pub fn achievement_name(header: &str) -> Option<&str> {
    header
        .trim()
        .strip_prefix(ACHIEVEMENT_PREFIX)
        .map(str::trim)
        .filter(|name| !name.is_empty())
}

/// Trimmed text, `None` when blank.
pub fn optional_text(raw: &str) -> Option<String> {
    let text = raw.trim();
    (!text.is_empty()).then(|| text.to_string())
}
