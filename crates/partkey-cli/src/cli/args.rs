//! Command-line argument definitions using clap.

use crate::output::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Register an Algorand participation key for consensus voting
///
/// Derives your account from a mnemonic, finds the matching participation
/// key on your node, then builds, signs, and submits the key-registration
/// transaction and waits for it to confirm.
///
/// The mnemonic is read from the PARTKEY_MNEMONIC environment variable or
/// a file; it is never accepted as an argument and never written to the
/// config file.
#[derive(Parser, Debug)]
#[command(name = "partkey")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// algod base URL, e.g. http://localhost:8080
    #[arg(long, env = "ALGOD_URL", global = true)]
    pub node_url: Option<String>,

    /// algod admin API token
    #[arg(long, env = "ALGOD_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    /// Read the 25-word mnemonic from this file instead of $PARTKEY_MNEMONIC
    #[arg(long, global = true, value_name = "PATH")]
    pub mnemonic_file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Increase verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register the account's participation key (or take it offline)
    Register(RegisterArgs),

    /// Manage the node's participation keys
    Keys(KeysArgs),

    /// Show node status
    Status,

    /// Show the address derived from the configured mnemonic (offline)
    Address,

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Register command
// ============================================================================

#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Submit an offline registration, deregistering the account from
    /// consensus instead of bringing it online
    #[arg(long)]
    pub offline: bool,

    /// Rounds to wait for confirmation before giving up
    #[arg(long, default_value = "40")]
    pub wait_rounds: u64,
}

// ============================================================================
// Keys command
// ============================================================================

#[derive(Args, Debug)]
pub struct KeysArgs {
    #[command(subcommand)]
    pub command: KeysCommands,
}

#[derive(Subcommand, Debug)]
pub enum KeysCommands {
    /// List all participation keys the node holds
    List,

    /// Show one participation key
    Show {
        /// Participation key ID
        id: String,
    },

    /// Generate a new participation key on the node (can take minutes)
    Generate {
        /// First round the key should be valid for voting
        first: u64,

        /// Last round the key should be valid for voting
        last: u64,

        /// Key dilution; defaults to floor(sqrt(last - first))
        #[arg(long)]
        dilution: Option<u64>,

        /// Seconds to wait for the node to finish generating
        #[arg(long, default_value = "300")]
        wait_secs: u64,
    },

    /// Delete a participation key from the node
    Delete {
        /// Participation key ID
        id: String,
    },
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Key to set (node_url, token, output_format)
        key: String,

        /// Value to set
        value: String,
    },

    /// Show config file path
    Path,
}
