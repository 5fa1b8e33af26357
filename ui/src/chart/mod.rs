//! Presentation adapter: turns aggregates into chart-ready series and SVG
//! geometry. Nothing here computes statistics; it only labels, colors, orders
//! and scales what `stats` produced.

pub mod bars;
pub mod geometry;
pub mod lines;
pub mod pie;

/// Colors for causes of death, assigned by first appearance.
pub const CAUSE_PALETTE: &[&str] = &[
    "#8dd3c7", "#ffffb3", "#bebada", "#fb8072", "#80b1d3", "#fdb462", "#b3de69", "#fccde5",
    "#d9d9d9", "#bc80bd", "#ccebc5", "#ffed6f", "#e5c494", "#b3e2cd", "#fdcdac", "#cbd5e8",
    "#f4cae4",
];

/// Colors cycled per segment within a run bar.
pub const RUN_PALETTE: &[&str] = &[
    "#e74c3c", "#c0392b", "#e67e22", "#d35400", "#f39c12", "#f1c40f", "#16a085", "#1abc9c",
    "#3498db", "#2980b9", "#9b59b6", "#8e44ad", "#34495e", "#95a5a6", "#7f8c8d",
];

/// Light to dark: "none reached" first, later milestones darker.
pub const MILESTONE_PALETTE: &[&str] = &[
    "#B2DFDB", "#80CBC4", "#4DB6AC", "#26A69A", "#00897B", "#00695C", "#004D40", "#00251A",
];

pub const ACTUAL_COLOR: &str = "#4CAF50";
pub const TREND_COLOR: &str = "#2196F3";
pub const PREDICTED_COLOR: &str = "#FF9800";

pub fn palette_color(palette: &[&'static str], idx: usize) -> &'static str {
    if palette.is_empty() {
        "#888888"
    } else {
        palette[idx % palette.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles() {
        assert_eq!(palette_color(RUN_PALETTE, 0), "#e74c3c");
        assert_eq!(palette_color(RUN_PALETTE, RUN_PALETTE.len()), "#e74c3c");
        assert_eq!(palette_color(&[], 3), "#888888");
    }
}
