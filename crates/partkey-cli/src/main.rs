//! partkey - Algorand participation key registration CLI.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    partkey_cli::run().await
}
