//! # partkey-cli
//!
//! Command-line tool for registering Algorand participation keys.
//!
//! ## Features
//!
//! - **register**: the full pipeline: derive the account, find the node's
//!   participation key, build/sign/submit a keyreg transaction, wait for
//!   confirmation
//! - **keys**: list, inspect, generate, and delete the node's
//!   participation keys
//! - **status**: node status at a glance
//! - **address**: show the address for the configured mnemonic, offline
//! - **Multiple output formats**: pretty text or JSON

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;
