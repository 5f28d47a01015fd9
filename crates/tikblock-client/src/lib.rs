//! HTTP clients for tikblock.
//!
//! This crate provides the [`RouterOsClient`] for the device's REST API, the
//! [`FeedFetcher`] for the threat feed, and the [`Transport`] both share.
//!
//! # Example
//!
//! ```rust,ignore
//! use tikblock_client::{RouterOsClient, TlsPolicy, Transport, TransportConfig};
//!
//! let transport = Transport::new(TransportConfig::default().tls(TlsPolicy::AcceptInvalidCerts))?;
//! let client = RouterOsClient::builder("192.168.88.1".parse()?, credential)
//!     .transport(transport)
//!     .build()?;
//! let resource = client.system().resource().await?;
//! println!("{}", resource.describe());
//! ```

#![doc(html_root_url = "https://docs.rs/tikblock-client/0.1.0")]

mod client;
mod config;
mod feed;
mod transport;
pub mod api;

pub use client::{RouterOsClient, RouterOsClientBuilder};
pub use config::*;
pub use feed::FeedFetcher;
pub use tikblock_core::{Result, SyncError};
pub use transport::Transport;
