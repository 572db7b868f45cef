use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ironctl_core::IronConfig;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show config file path
    Path,
    /// Print the effective config (file merged with defaults)
    Show,
    /// Write a config file populated with defaults
    Init(InitArgs),
    /// Validate the config file
    Validate,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Force overwrite existing config
    #[arg(long, short)]
    pub force: bool,
}

pub fn run_config(args: ConfigArgs) -> Result<()> {
    let path = IronConfig::config_path();
    match args.command {
        ConfigCommands::Path => {
            println!("{}", path.display());
            Ok(())
        }
        ConfigCommands::Show => run_show(&path),
        ConfigCommands::Init(args) => run_init(&path, args),
        ConfigCommands::Validate => run_validate(&path),
    }
}

fn run_show(path: &Path) -> Result<()> {
    let config = IronConfig::load_from(path)?;
    let toml_str = config.to_toml().context("Failed to serialize config to TOML")?;
    print!("{}", toml_str);
    Ok(())
}

fn run_init(path: &Path, args: InitArgs) -> Result<()> {
    if path.exists() && !args.force {
        anyhow::bail!(
            "Config already exists at {}\n\nUse --force to overwrite",
            path.display()
        );
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let content = IronConfig::default().to_toml()?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;

    println!("Created config at: {}", path.display());
    Ok(())
}

fn run_validate(path: &Path) -> Result<()> {
    if !path.exists() {
        println!("No config file at {} (defaults in use)", path.display());
        return Ok(());
    }

    IronConfig::load_from(path)
        .with_context(|| format!("Invalid config at {}", path.display()))?;
    println!("Config OK: {}", path.display());
    Ok(())
}
