//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Push the Talos IP blacklist into a MikroTik firewall address-list
///
/// Every IPv4 address in the feed is upserted into the list over the
/// RouterOS REST API. The password is read from TIKBLOCK_PASSWORD or
/// prompted for; it is never stored.
#[derive(Parser, Debug)]
#[command(name = "tikblock")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, env = "TIKBLOCK_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Show skipped feed lines and debug logs
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Verify the login, download the feed and upsert every address
    Sync(SyncArgs),

    /// Verify the login only
    Check(DeviceArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Device connection
// ============================================================================

#[derive(Args, Debug, Clone, Default)]
pub struct DeviceArgs {
    /// Router IPv4 address (prompted for when not given)
    #[arg(short, long)]
    pub device: Option<String>,

    /// RouterOS username (prompted for when not given)
    #[arg(short, long, env = "TIKBLOCK_USERNAME")]
    pub username: Option<String>,

    /// Accept a self-signed device certificate
    #[arg(long)]
    pub insecure: bool,

    /// Per-request timeout in seconds, 0 for none
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Talk to this URL instead of https://<device>
    #[arg(long, hide = true)]
    pub base_url: Option<String>,
}

// ============================================================================
// Sync command
// ============================================================================

#[derive(Args, Debug, Clone, Default)]
pub struct SyncArgs {
    #[command(flatten)]
    pub device: DeviceArgs,

    /// Feed to download (defaults to the Talos IP blacklist)
    #[arg(long, value_name = "URL")]
    pub feed_url: Option<String>,

    /// Address-list name entries are added to
    #[arg(short, long)]
    pub list: Option<String>,

    /// Uploads in flight at once
    #[arg(short = 'j', long)]
    pub concurrency: Option<usize>,
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
        /// Key to set (e.g., device, username, list)
        key: String,

        /// Value to set
        value: String,
    },

    /// Show config file path
    Path,
}
