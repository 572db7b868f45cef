//! Render the dashboard page to stdout or a file

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ironctl_core::render::{self, Format};
use ironctl_core::Page;
use tracing::info;

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Output format: html, fragment, or json
    #[arg(long, short = 'f', default_value = "html")]
    pub format: Format,

    /// Write to this file instead of stdout
    #[arg(long = "out", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

pub fn run_render(args: RenderArgs) -> Result<()> {
    let page = Page::new();
    let rendered = render::render(&page, args.format)
        .with_context(|| format!("Failed to render page as {}", args.format))?;

    match args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            std::fs::write(&path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(format = %args.format, bytes = rendered.len(), "Wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .context("Failed to write to stdout")?;
            stdout.flush().context("Failed to flush stdout")?;
        }
    }

    Ok(())
}
