//! Collaborators the engine drives.
//!
//! The HTTP clients from `tikblock-client` implement these; tests substitute fakes.

use async_trait::async_trait;
use tikblock_client::{FeedFetcher, RouterOsClient};
use tikblock_core::{BlacklistEntry, FeedDocument, Result, SystemResource, UploadReceipt};

/// Device that holds the address-list
#[async_trait]
pub trait Device: Send + Sync {
    /// Side-effect-free authenticated probe
    async fn verify_credentials(&self) -> Result<SystemResource>;

    /// Upsert one entry
    async fn upload(&self, entry: &BlacklistEntry) -> Result<UploadReceipt>;
}

/// Where the feed comes from
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Download the current feed
    async fn fetch(&self) -> Result<FeedDocument>;
}

#[async_trait]
impl Device for RouterOsClient {
    async fn verify_credentials(&self) -> Result<SystemResource> {
        self.system().resource().await
    }

    async fn upload(&self, entry: &BlacklistEntry) -> Result<UploadReceipt> {
        self.address_list().put(entry).await
    }
}

#[async_trait]
impl FeedSource for FeedFetcher {
    async fn fetch(&self) -> Result<FeedDocument> {
        Self::fetch(self).await
    }
}
