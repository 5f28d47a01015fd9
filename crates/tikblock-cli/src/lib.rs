//! # tikblock-cli
//!
//! Command-line front end for pushing a threat-intelligence feed into a MikroTik
//! RouterOS firewall address-list.
//!
//! ## Features
//!
//! - **`sync`**: verify the login, download the feed, upsert every address
//! - **`check`**: verify the login only and show what device answered
//! - **Config file**: remember the device, username and feed settings (never the password)
//! - **Output formats**: colored console lines or one JSON object per line

pub mod cli;
pub mod config;
pub mod logging;
pub mod output;

pub use cli::run;
