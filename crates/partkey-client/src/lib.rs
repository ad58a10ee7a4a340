//! HTTP client for the algod REST API.
//!
//! [`AlgodClient`] talks to a node's REST endpoint, authenticated with the
//! `X-Algo-API-Token` header, and exposes the endpoint groups this tool
//! needs: participation keys, transactions, and node status.
//!
//! # Example
//!
//! ```rust,ignore
//! use partkey_client::AlgodClient;
//!
//! # async fn run() -> partkey_core::Result<()> {
//! let client = AlgodClient::new("http://localhost:8080", "token");
//! let status = client.node().status().await?;
//! println!("last round: {}", status.last_round);
//! # Ok(())
//! # }
//! ```

pub mod api;
mod client;

pub use client::{AlgodClient, AlgodClientBuilder};
