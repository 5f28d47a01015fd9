//! Feed-to-device synchronization engine.
//!
//! A run verifies the device credential, downloads the feed, validates each line and
//! upserts every valid address into the device's address-list:
//!
//! ```rust,ignore
//! use tikblock_sync::{SyncEngine, SyncOptions};
//!
//! let engine = SyncEngine::new(router_client, feed_fetcher)
//!     .options(SyncOptions::default().concurrency(4));
//! let summary = engine.run(&mut reporter).await?;
//! println!("{} added, {} failed", summary.succeeded, summary.failed);
//! ```
//!
//! Credential and feed failures end the run. Upload failures are reported per entry and
//! never stop the remaining uploads.

#![doc(html_root_url = "https://docs.rs/tikblock-sync/0.1.0")]

mod engine;
mod report;
mod traits;
mod uploader;
mod validator;

pub use engine::{SyncEngine, SyncOptions};
pub use report::{Phase, Reporter};
pub use traits::{Device, FeedSource};
pub use uploader::upload_entry;
pub use validator::{EntryValidator, Rejection};
