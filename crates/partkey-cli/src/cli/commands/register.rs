//! `partkey register` - The registration pipeline.
//!
//! Strictly linear: derive the account, fetch the key, build, sign,
//! submit, wait. Any failed step aborts the run; no retries.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::RegisterArgs;
use crate::output::OutputFormat;
use partkey::KeyregTransaction;

pub async fn execute(ctx: Context, args: RegisterArgs) -> Result<()> {
    let account = ctx.account()?;
    let client = ctx.client()?;
    let pretty = ctx.output_format == OutputFormat::Pretty;
    let mode = if args.offline { "offline" } else { "online" };

    if pretty {
        println!("{} {}", "Account:".bold(), account.address());
    }

    let params = client.transactions().suggested_params().await?;

    let txn = if args.offline {
        KeyregTransaction::offline(account.address(), &params)?
    } else {
        let key = client
            .participation()
            .find_for_address(account.address())
            .await?;
        if pretty {
            println!("{} {}", "Participation key:".bold(), key.id);
            println!(
                "{} rounds {} to {}, dilution {}",
                "Validity:".bold(),
                key.key.vote_first_valid,
                key.key.vote_last_valid,
                key.key.vote_key_dilution
            );
        }
        KeyregTransaction::online(account.address(), &key.key, &params)?
    };

    let signed = account.sign(txn)?;
    let txid = client.transactions().submit(signed.encode()?).await?;

    if pretty {
        println!("{} {}", "Submitted:".bold(), txid.cyan());
        println!("Waiting up to {} rounds for confirmation...", args.wait_rounds);
    }

    let round = client
        .transactions()
        .wait_for_confirmation(&txid, args.wait_rounds)
        .await?;

    match ctx.output_format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "address": account.address().to_string(),
                    "mode": mode,
                    "txid": txid,
                    "confirmed-round": round,
                }))?
            );
        }
        OutputFormat::Pretty => {
            println!(
                "{} {mode} key registration confirmed in round {}",
                "Success:".green().bold(),
                round.to_string().bold()
            );
        }
    }

    Ok(())
}
