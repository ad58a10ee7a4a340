//! `partkey keys` - Participation key management.

use anyhow::Result;
use colored::Colorize;
use std::time::Duration;

use super::Context;
use crate::cli::args::{KeysArgs, KeysCommands};
use crate::output::OutputFormat;
use partkey::{default_key_dilution, ParticipationKey};

pub async fn execute(ctx: Context, args: KeysArgs) -> Result<()> {
    match args.command {
        KeysCommands::List => list(ctx).await,
        KeysCommands::Show { id } => show(ctx, &id).await,
        KeysCommands::Generate {
            first,
            last,
            dilution,
            wait_secs,
        } => generate(ctx, first, last, dilution, wait_secs).await,
        KeysCommands::Delete { id } => delete(ctx, &id).await,
    }
}

async fn list(ctx: Context) -> Result<()> {
    let client = ctx.client()?;
    let keys = client.participation().list().await?;

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&keys)?);
        }
        OutputFormat::Pretty => {
            if keys.is_empty() {
                println!("No participation keys on this node.");
                return Ok(());
            }
            for key in &keys {
                print_key(key);
                println!();
            }
        }
    }

    Ok(())
}

async fn show(ctx: Context, id: &str) -> Result<()> {
    let client = ctx.client()?;
    let key = client.participation().get(id).await?;

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&key)?);
        }
        OutputFormat::Pretty => print_key(&key),
    }

    Ok(())
}

async fn generate(
    ctx: Context,
    first: u64,
    last: u64,
    dilution: Option<u64>,
    wait_secs: u64,
) -> Result<()> {
    let account = ctx.account()?;
    let client = ctx.client()?;
    let dilution = dilution.unwrap_or_else(|| default_key_dilution(last.saturating_sub(first)));

    if ctx.output_format == OutputFormat::Pretty {
        println!(
            "Generating key for {} over rounds {first} to {last} (dilution {dilution})...",
            account.address()
        );
        println!("This can take several minutes for large ranges.");
    }

    let key = client
        .participation()
        .generate(
            account.address(),
            first,
            last,
            Some(dilution),
            Duration::from_secs(wait_secs),
        )
        .await?;

    match ctx.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&key)?);
        }
        OutputFormat::Pretty => {
            println!("{} key generated.", "Success:".green().bold());
            print_key(&key);
        }
    }

    Ok(())
}

async fn delete(ctx: Context, id: &str) -> Result<()> {
    let client = ctx.client()?;
    client.participation().delete(id).await?;

    if ctx.output_format == OutputFormat::Pretty {
        println!("{} deleted {id}.", "Success:".green().bold());
    }

    Ok(())
}

fn print_key(key: &ParticipationKey) {
    println!("{} {}", "ID:".bold(), key.id);
    println!("{} {}", "Address:".bold(), key.address);
    println!(
        "{} rounds {} to {}, dilution {}",
        "Validity:".bold(),
        key.key.vote_first_valid,
        key.key.vote_last_valid,
        key.key.vote_key_dilution
    );
    if let Some(effective) = key.effective_first_valid {
        println!("{} since round {effective}", "Registered:".bold());
    }
    if let Some(last_vote) = key.last_vote {
        println!("{} round {last_vote}", "Last vote:".bold());
    }
}
