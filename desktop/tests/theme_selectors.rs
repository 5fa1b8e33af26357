#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure the CSS selectors the dashboard components rely on remain present in
  the shared theme `ui/assets/theme/main.css`.
- Fail fast if a refactor drops or renames a class, instead of shipping an
  unstyled chart in a packaged (embedded) desktop build.

If you intentionally rename or remove a selector:
    1. Update the Dioxus component markup.
    2. Adjust REQUIRED_SELECTORS accordingly.

A substring presence check is enough here; no CSS parser dependency.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "--color-bg",
    "body {",
    ".page {",
    ".visually-hidden",
    // Dashboard layout
    ".dashboard__toolbar",
    ".dashboard__grid",
    ".day-selector__select",
    // Cards
    ".results-card {",
    ".results-card__header",
    ".results-card__meta",
    ".results-card__placeholder",
    // Summary tiles
    ".results-highlights",
    ".results-highlight {",
    ".results-highlight__value",
    ".results-highlight__meta",
    // Charts
    ".chart {",
    ".chart__grid",
    ".chart__segment",
    ".chart__segment-text",
    ".chart__slice",
    ".chart__marker",
    ".chart__caption--muted",
    ".chart-legend__swatch",
    ".dashboard-milestones__body",
    ".dashboard-daily__charts",
    // Run table
    ".run-table",
    ".run-table__row--victory",
    ".run-table__flag",
    // Errors
    ".dashboard-error__message",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn every_card_modifier_has_its_base_class() {
    // `--modifier` variants style on top of a base block that must exist.
    for modifier in [".run-table__row--victory", ".chart__caption--muted", ".chart-legend--column"] {
        let base = modifier.split("--").next().unwrap_or_default();
        assert!(
            THEME_CSS.contains(&format!("{base} {{")) || THEME_CSS.contains(&format!("{base}:")),
            "modifier {modifier} has no base rule {base}"
        );
    }
}
