//! Terminal dashboard
//!
//! Read-only view of the Smart Ironing System page:
//! - Header with title and "Dashboard" label
//! - Widget grid re-laid out on every draw from the terminal width
//! - `q` / `Esc` / `Ctrl+C` to quit

pub mod app;
pub mod event;
pub mod terminal;
pub mod ui;

pub use terminal::run;
