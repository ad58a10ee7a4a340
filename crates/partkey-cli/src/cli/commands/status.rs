//! `partkey status` - Node status.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::output::OutputFormat;

pub async fn execute(ctx: Context) -> Result<()> {
    let client = ctx.client()?;
    let status = client.node().status().await?;

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&status)?);
        }
        OutputFormat::Pretty => {
            println!("{} {}", "Last round:".bold(), status.last_round);
            if let Some(version) = &status.last_version {
                println!("{} {version}", "Consensus:".bold());
            }
            if status.is_caught_up() {
                println!("{} caught up", "Sync:".bold());
            } else {
                println!(
                    "{} {} catching up",
                    "Sync:".bold(),
                    "still".yellow()
                );
            }
        }
    }

    Ok(())
}
