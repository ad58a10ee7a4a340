//! Core types and signing logic for Algorand participation key registration.
//!
//! This crate provides everything that does not touch the network:
//!
//! - **Accounts**: mnemonic parsing and ed25519 key derivation
//! - **Addresses**: checksummed base32 address encoding
//! - **Types**: strongly-typed representations of algod REST responses
//! - **Transactions**: key-registration transaction building, canonical
//!   encoding, and signing
//! - **Errors**: comprehensive error handling with [`PartkeyError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use partkey_core::{Account, KeyregTransaction, Result};
//!
//! fn register(account: &Account, key: &partkey_core::ParticipationKey,
//!             params: &partkey_core::SuggestedParams) -> Result<Vec<u8>> {
//!     let txn = KeyregTransaction::online(account.address(), &key.key, params)?;
//!     account.sign(txn)?.encode()
//! }
//! ```

mod account;
mod address;
mod error;
mod hash;
mod mnemonic;
mod transaction;
pub mod types;

pub use account::Account;
pub use address::Address;
pub use error::{PartkeyError, Result};
pub use mnemonic::Mnemonic;
pub use transaction::{default_key_dilution, KeyregTransaction, SignedTransaction};
pub use types::*;
