//! Command implementations.

pub mod address;
pub mod config;
pub mod keys;
pub mod register;
pub mod status;

use crate::output::OutputFormat;
use partkey::{Account, AlgodClient, Mnemonic};

/// Shared context for all commands.
#[derive(Clone)]
pub struct Context {
    /// algod base URL
    pub node_url: Option<String>,

    /// algod admin API token
    pub token: Option<String>,

    /// Raw mnemonic phrase, if one was supplied
    pub mnemonic: Option<String>,

    /// Output format
    pub output_format: OutputFormat,

    /// Verbose output
    pub verbose: bool,

    /// Disable colors
    pub no_color: bool,
}

// Carries the mnemonic and token; keep them out of debug output.
impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("node_url", &self.node_url)
            .field("output_format", &self.output_format)
            .finish_non_exhaustive()
    }
}

impl Context {
    /// Get the node URL, returning an error if not set.
    pub fn require_node_url(&self) -> anyhow::Result<&str> {
        self.node_url.as_deref().ok_or_else(|| {
            anyhow::anyhow!(
                "Node URL required.\n\n\
                 Set it with one of:\n  \
                 1. --node-url <URL>\n  \
                 2. ALGOD_URL environment variable\n  \
                 3. partkey config set node_url <URL>"
            )
        })
    }

    /// Get the API token, returning an error if not set.
    pub fn require_token(&self) -> anyhow::Result<&str> {
        self.token.as_deref().ok_or_else(|| {
            anyhow::anyhow!(
                "algod API token required.\n\n\
                 Set it with one of:\n  \
                 1. --token <TOKEN>\n  \
                 2. ALGOD_TOKEN environment variable\n  \
                 3. partkey config set token <TOKEN>\n\n\
                 The admin token lives in algod.admin.token in your node's data directory"
            )
        })
    }

    /// Create an algod client for the configured node.
    pub fn client(&self) -> anyhow::Result<AlgodClient> {
        let url = self.require_node_url()?;
        let token = self.require_token()?;
        Ok(AlgodClient::new(url, token))
    }

    /// Derive the account from the configured mnemonic.
    pub fn account(&self) -> anyhow::Result<Account> {
        let phrase = self.mnemonic.as_deref().ok_or_else(|| {
            anyhow::anyhow!(
                "Account mnemonic required.\n\n\
                 Set it with one of:\n  \
                 1. PARTKEY_MNEMONIC environment variable\n  \
                 2. --mnemonic-file <PATH>\n\n\
                 The mnemonic is never taken as an argument and never stored in the config file"
            )
        })?;
        let mnemonic = Mnemonic::parse(phrase)?;
        Ok(Account::from_mnemonic(&mnemonic))
    }
}
