//! Core types and errors for tikblock.
//!
//! This crate provides the foundational types shared by the tikblock crates:
//!
//! - **Types**: the run's inputs ([`Credential`], [`DeviceEndpoint`]), the feed
//!   ([`FeedDocument`]), what gets pushed to the device ([`BlacklistEntry`]) and what
//!   comes back ([`UploadOutcome`], [`SyncSummary`])
//! - **Errors**: the [`SyncError`] taxonomy
//!
//! # Example
//!
//! ```rust
//! use tikblock_core::{BlacklistEntry, Credential, DeviceEndpoint};
//!
//! let credential = Credential::new("admin", "s3cret").unwrap();
//! let device: DeviceEndpoint = "192.168.88.1".parse().unwrap();
//! let entry = BlacklistEntry::new("1.2.3.4".parse().unwrap());
//!
//! assert_eq!(credential.username(), "admin");
//! assert_eq!(device.base_url(), "https://192.168.88.1");
//! assert_eq!(entry.list, "TALOS_BLACKLIST");
//! ```

#![doc(html_root_url = "https://docs.rs/tikblock-core/0.1.0")]

mod error;
pub mod types;

pub use error::{ErrorKind, Result, SyncError};
pub use types::*;
