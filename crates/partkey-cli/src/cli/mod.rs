//! CLI argument parsing and command dispatch.

pub mod args;
pub mod commands;

use anyhow::{Context as _, Result};
use args::{Cli, Commands};
use clap::Parser;

use crate::config::Config;
use crate::output::OutputFormat;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("partkey=debug"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Load configuration
    let config = Config::load()?;

    // Determine output format
    let output_format = cli
        .output
        .or(config.output_format)
        .unwrap_or(OutputFormat::Pretty);

    // Node coordinates from CLI/env, falling back to the config file
    let node_url = cli.node_url.or_else(|| config.node_url.clone());
    let token = cli.token.or_else(|| config.token.clone());

    // The mnemonic never comes from an argument or the config file
    let mnemonic = match &cli.mnemonic_file {
        Some(path) => Some(
            std::fs::read_to_string(path)
                .with_context(|| format!("reading mnemonic file {}", path.display()))?
                .trim()
                .to_string(),
        ),
        None => std::env::var("PARTKEY_MNEMONIC").ok(),
    };

    // Create context for commands
    let ctx = commands::Context {
        node_url,
        token,
        mnemonic,
        output_format,
        verbose: cli.verbose,
        no_color: cli.no_color,
    };

    // Dispatch to appropriate command
    match cli.command {
        Commands::Register(args) => commands::register::execute(ctx, args).await,
        Commands::Keys(args) => commands::keys::execute(ctx, args).await,
        Commands::Status => commands::status::execute(ctx).await,
        Commands::Address => commands::address::execute(ctx),
        Commands::Config(args) => commands::config::execute(ctx, args),
    }
}
