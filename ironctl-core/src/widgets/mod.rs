//! Dashboard widgets
//!
//! Each widget is a pure constructor returning fixed placeholder content.
//! They are modelled as one closed enum so renderers can match exhaustively.

pub mod impact;
pub mod schedule;
pub mod status;

use serde::Serialize;

pub use impact::impact_report;
pub use schedule::daily_schedule;
pub use status::status_panel;

/// A single row in the daily schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    pub time: &'static str,
    pub label: &'static str,
}

/// Colour family of an impact tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Accent {
    Blue,
    Green,
}

impl Accent {
    /// CSS class suffix used by the HTML renderer
    pub fn css_name(self) -> &'static str {
        match self {
            Accent::Blue => "blue",
            Accent::Green => "green",
        }
    }
}

/// A metric tile in the impact report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricTile {
    pub label: &'static str,
    pub value: &'static str,
    pub accent: Accent,
}

/// Widget discriminant, in dashboard order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    Status,
    Schedule,
    Impact,
}

impl WidgetKind {
    pub fn as_str(self) -> &'static str {
        match self {
            WidgetKind::Status => "status",
            WidgetKind::Schedule => "schedule",
            WidgetKind::Impact => "impact",
        }
    }
}

/// A stateless display widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Widget {
    Status {
        title: &'static str,
        message: &'static str,
    },
    Schedule {
        title: &'static str,
        entries: &'static [ScheduleEntry],
    },
    Impact {
        title: &'static str,
        tiles: &'static [MetricTile],
    },
}

impl Widget {
    pub fn kind(&self) -> WidgetKind {
        match self {
            Widget::Status { .. } => WidgetKind::Status,
            Widget::Schedule { .. } => WidgetKind::Schedule,
            Widget::Impact { .. } => WidgetKind::Impact,
        }
    }

    /// Heading shown at the top of the widget card
    pub fn title(&self) -> &'static str {
        match self {
            Widget::Status { title, .. }
            | Widget::Schedule { title, .. }
            | Widget::Impact { title, .. } => *title,
        }
    }
}
