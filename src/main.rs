//! Standoc - a documentation builder for standard-name corpora.

mod build;
mod cli;
mod config;
mod loader;
mod logger;
mod render;
mod stats;
mod store;

use anyhow::{Result, bail};
use build::{build_docs, check_corpus};
use clap::Parser;
use cli::{Cli, Commands};
use config::CorpusConfig;
use std::path::Path;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));
    let config: &'static CorpusConfig = Box::leak(Box::new(load_config(cli)?));

    match &cli.command {
        Commands::Build { .. } => build_docs(config),
        Commands::Check => check_corpus(config),
    }
}

/// Load and validate configuration from CLI arguments
fn load_config(cli: &'static Cli) -> Result<CorpusConfig> {
    let root = cli.root.as_deref().unwrap_or(Path::new("./"));
    let config_path = root.join(&cli.config);

    if !config_path.exists() {
        bail!("Config file not found: {}", config_path.display());
    }

    let mut config = CorpusConfig::from_path(&config_path)?;
    config.update_with_cli(cli);
    config.validate()?;

    Ok(config)
}
