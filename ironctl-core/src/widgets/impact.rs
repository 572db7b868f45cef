use super::{Accent, MetricTile, Widget};

pub const TITLE: &str = "Impact Report";

pub const TILES: [MetricTile; 2] = [
    MetricTile {
        label: "Energy Saved",
        value: "12%",
        accent: Accent::Blue,
    },
    MetricTile {
        label: "Efficiency",
        value: "High",
        accent: Accent::Green,
    },
];

/// Impact report: two metric tiles side by side.
pub fn impact_report() -> Widget {
    Widget::Impact {
        title: TITLE,
        tiles: &TILES,
    }
}
