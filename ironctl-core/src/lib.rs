//! ironctl-core: Smart Ironing System dashboard model and renderers
//!
//! The dashboard is a page shell around three static widgets. Everything in
//! `widgets`, `dashboard` and `page` is pure; I/O only happens in `config`
//! and in the callers of `render`.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod page;
pub mod render;
pub mod widgets;

pub use config::{IronConfig, ServerSection, TuiConfig};
pub use dashboard::{Breakpoints, Dashboard};
pub use error::{IronError, Result};
pub use page::Page;
pub use widgets::{Accent, MetricTile, ScheduleEntry, Widget, WidgetKind};
