//! Register an Algorand participation key for consensus voting.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use partkey::{Account, AlgodClient, KeyregTransaction, Mnemonic};
//!
//! #[tokio::main]
//! async fn main() -> partkey::Result<()> {
//!     let mnemonic = Mnemonic::parse(&std::env::var("PARTKEY_MNEMONIC").unwrap())?;
//!     let account = Account::from_mnemonic(&mnemonic);
//!
//!     let client = AlgodClient::new("http://localhost:8080", "your-admin-token");
//!     let key = client.participation().find_for_address(account.address()).await?;
//!     let params = client.transactions().suggested_params().await?;
//!
//!     let txn = KeyregTransaction::online(account.address(), &key.key, &params)?;
//!     let raw = account.sign(txn)?.encode()?;
//!
//!     let txid = client.transactions().submit(raw).await?;
//!     let round = client.transactions().wait_for_confirmation(&txid, 40).await?;
//!     println!("confirmed in round {round}");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

// Re-export core types
pub use partkey_core::*;

// Re-export client
pub use partkey_client::{AlgodClient, AlgodClientBuilder};

// Re-export runtime for convenience
pub use serde;
pub use serde_json;
pub use tokio;
