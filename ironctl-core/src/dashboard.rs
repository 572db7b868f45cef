//! Dashboard composition root
//!
//! Arranges the widgets in a responsive grid: one column on narrow
//! viewports, two on medium, three on wide. Widget order never changes.

use serde::{Deserialize, Serialize};

use crate::error::{IronError, Result};
use crate::widgets::{daily_schedule, impact_report, status_panel, Widget};

/// Number of widgets on the dashboard
pub const WIDGET_COUNT: usize = 3;

/// Maximum number of grid columns
pub const MAX_COLUMNS: usize = 3;

/// Width thresholds for the responsive grid.
///
/// Units depend on the surface: CSS pixels for HTML, character cells for
/// the terminal. Deserialized from the `[layout]` config section, where
/// missing keys fall back to the terminal defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    /// Width at which the grid switches to two columns
    pub medium: u16,
    /// Width at which the grid switches to three columns
    pub wide: u16,
}

impl Breakpoints {
    /// `md` / `lg` viewport widths used by the HTML stylesheet
    pub const CSS: Breakpoints = Breakpoints {
        medium: 768,
        wide: 1024,
    };

    /// Default terminal breakpoints, in columns
    pub const TERMINAL: Breakpoints = Breakpoints {
        medium: 80,
        wide: 120,
    };

    pub fn new(medium: u16, wide: u16) -> Result<Self> {
        let breakpoints = Self { medium, wide };
        breakpoints.validate()?;
        Ok(breakpoints)
    }

    pub fn validate(&self) -> Result<()> {
        if self.medium == 0 {
            return Err(IronError::config("layout.medium must be greater than zero"));
        }
        if self.medium >= self.wide {
            return Err(IronError::config(format!(
                "layout.medium ({}) must be below layout.wide ({})",
                self.medium, self.wide
            )));
        }
        Ok(())
    }

    /// Number of grid columns for an available width
    pub fn columns_for(&self, width: u16) -> usize {
        if width >= self.wide {
            3
        } else if width >= self.medium {
            2
        } else {
            1
        }
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::TERMINAL
    }
}

/// The composition root holding the three widgets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dashboard;

impl Dashboard {
    pub fn new() -> Self {
        Self
    }

    /// Widgets in display order: Status, Schedule, Impact
    pub fn widgets(&self) -> [Widget; WIDGET_COUNT] {
        [status_panel(), daily_schedule(), impact_report()]
    }

    /// Split the widgets into grid rows, row-major, preserving order
    pub fn grid_rows(&self, columns: usize) -> Vec<Vec<Widget>> {
        let columns = columns.clamp(1, MAX_COLUMNS);
        self.widgets()
            .chunks(columns)
            .map(|row| row.to_vec())
            .collect()
    }
}
