//! Renderers for the page model
//!
//! - `html`: standalone document or `<main>` fragment
//! - `json`: pretty-printed page model

pub mod html;
pub mod json;

use std::fmt;
use std::str::FromStr;

use crate::error::{IronError, Result};
use crate::page::Page;

/// Output format for a rendered page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Html,
    Fragment,
    Json,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Html => "html",
            Format::Fragment => "fragment",
            Format::Json => "json",
        };
        f.write_str(name)
    }
}

impl FromStr for Format {
    type Err = IronError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(Format::Html),
            "fragment" => Ok(Format::Fragment),
            "json" => Ok(Format::Json),
            other => Err(IronError::config(format!("unknown render format '{}'", other))),
        }
    }
}

/// Render a page in the requested format
pub fn render(page: &Page, format: Format) -> Result<String> {
    match format {
        Format::Html => Ok(html::document(page)),
        Format::Fragment => Ok(html::fragment(page)),
        Format::Json => json::to_json(page),
    }
}
