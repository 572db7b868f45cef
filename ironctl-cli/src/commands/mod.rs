//! Command implementations for ironctl CLI

pub mod config;
pub mod render;
#[cfg(feature = "server")]
pub mod serve;

use anyhow::{Context, Result};
use ironctl_core::IronConfig;

pub use config::run_config;
pub use render::run_render;
#[cfg(feature = "server")]
pub use serve::run_serve;

/// Run the terminal dashboard with breakpoints from config
pub fn run_tui() -> Result<()> {
    let config = IronConfig::load().context("Failed to load config")?;
    crate::tui::run(&config)
}
