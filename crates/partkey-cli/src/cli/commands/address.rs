//! `partkey address` - Show the account address, fully offline.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::output::OutputFormat;

pub fn execute(ctx: Context) -> Result<()> {
    let account = ctx.account()?;

    match ctx.output_format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({ "address": account.address().to_string() })
            );
        }
        OutputFormat::Pretty => {
            println!("{}", account.address().to_string().cyan().bold());
        }
    }

    Ok(())
}
