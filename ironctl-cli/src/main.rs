//! ironctl CLI - Smart Ironing System dashboard
//!
//! Entry point for the `ironctl` binary:
//! - Render the dashboard page to HTML or JSON (`render`)
//! - Show the dashboard in the terminal (`tui`)
//! - Serve the dashboard over HTTP (`serve`, with `server` feature)
//! - Inspect and initialise configuration (`config`)

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

mod commands;
mod tracing_setup;
mod tui;

#[derive(Parser, Debug)]
#[command(
    name = "ironctl",
    author,
    version,
    about = "Smart Ironing System dashboard",
    long_about = "Render the Smart Ironing System dashboard as HTML or JSON, \
                  view it in the terminal, or serve it over HTTP."
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Export traces over OTLP (requires the `telemetry` feature)
    #[arg(long, global = true)]
    otel: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the dashboard page (HTML document, HTML fragment, or JSON)
    Render(commands::render::RenderArgs),
    /// Show the dashboard in the terminal
    Tui,
    /// Serve the dashboard over HTTP
    #[cfg(feature = "server")]
    Serve(commands::serve::ServeArgs),
    /// Manage ironctl configuration (path, show, init, validate)
    Config(commands::config::ConfigArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig {
        debug: cli.debug,
        otel: cli.otel,
    })
    .ok();

    let result = match cli.command {
        Commands::Render(args) => commands::run_render(args),
        Commands::Tui => commands::run_tui(),
        #[cfg(feature = "server")]
        Commands::Serve(args) => commands::run_serve(args).await,
        Commands::Config(args) => commands::run_config(args),
        Commands::Completions(args) => run_completions(args),
    };

    tracing_setup::shutdown_otel();
    result
}

fn run_completions(args: CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as CompletionShell};
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, &mut io::stdout());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_render_format() {
        let cli = Cli::try_parse_from(["ironctl", "render", "--format", "json"]).unwrap();
        assert!(matches!(cli.command, Commands::Render(_)));
    }
}
