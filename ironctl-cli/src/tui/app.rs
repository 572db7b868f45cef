//! TUI application state

use std::time::Duration;

use anyhow::{Context, Result};
use ironctl_core::{Breakpoints, IronConfig, Page};

/// View state for the terminal dashboard. The page itself is immutable.
#[derive(Debug, Clone)]
pub struct App {
    pub page: Page,
    pub breakpoints: Breakpoints,
    /// Event poll timeout
    pub tick: Duration,
    pub should_quit: bool,
}

impl App {
    pub fn new(breakpoints: Breakpoints, tick: Duration) -> Self {
        Self {
            page: Page::new(),
            breakpoints,
            tick,
            should_quit: false,
        }
    }

    pub fn from_config(config: &IronConfig) -> Result<Self> {
        config
            .layout
            .validate()
            .context("Invalid [layout] breakpoints")?;
        Ok(Self::new(config.layout, Duration::from_millis(config.tui.tick_ms)))
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Breakpoints::TERMINAL, Duration::from_millis(250))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_default_config() {
        let app = App::from_config(&IronConfig::default()).unwrap();
        assert_eq!(app.breakpoints, Breakpoints::TERMINAL);
        assert_eq!(app.tick, Duration::from_millis(250));
        assert!(!app.should_quit);
    }

    #[test]
    fn rejects_inverted_breakpoints() {
        let mut config = IronConfig::default();
        config.layout.medium = 150;
        assert!(App::from_config(&config).is_err());
    }
}
