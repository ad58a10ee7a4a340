//! `partkey config` - CLI configuration management.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::Config;
use crate::output::OutputFormat;

pub fn execute(ctx: Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(&ctx),
        ConfigCommands::Set { key, value } => set_config(&key, &value),
        ConfigCommands::Path => show_path(),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let config = Config::load()?;

    match ctx.output_format {
        OutputFormat::Json => {
            // Mask the token even in JSON output
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "node_url": config.node_url,
                    "token": config.token.as_deref().map(mask),
                    "output_format": config.output_format.unwrap_or(OutputFormat::Pretty),
                }))?
            );
        }
        OutputFormat::Pretty => {
            println!("{}", "Current Configuration:".bold());
            println!();
            println!(
                "  {} {}",
                "node_url:".bold(),
                config.node_url.as_deref().unwrap_or("(not set)")
            );
            let token_display = config
                .token
                .as_deref()
                .map_or_else(|| "(not set)".dimmed().to_string(), mask);
            println!("  {} {token_display}", "token:".bold());
            println!(
                "  {} {}",
                "output_format:".bold(),
                config.output_format.unwrap_or(OutputFormat::Pretty)
            );
        }
    }

    Ok(())
}

fn set_config(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;

    match key {
        "node_url" => {
            config.node_url = Some(value.to_string());
            println!("{} node URL set.", "Success:".green().bold());
        }
        "token" => {
            config.token = Some(value.to_string());
            println!("{} API token set.", "Success:".green().bold());
        }
        "output_format" | "output" => {
            config.output_format = Some(value.parse()?);
            println!(
                "{} Output format set to {}.",
                "Success:".green().bold(),
                value.cyan()
            );
        }
        _ => {
            anyhow::bail!(
                "Unknown config key: {}\n\n\
                 Available keys:\n  \
                 node_url       - algod base URL\n  \
                 token          - algod admin API token\n  \
                 output_format  - Default output format (pretty/json)",
                key
            );
        }
    }

    config.save()?;

    Ok(())
}

fn show_path() -> Result<()> {
    let path = Config::path()?;
    println!("{}", path.display());
    Ok(())
}

fn mask(token: &str) -> String {
    if token.len() > 8 {
        format!("{}...{}", &token[..4], &token[token.len() - 4..])
    } else {
        "****".to_string()
    }
}
