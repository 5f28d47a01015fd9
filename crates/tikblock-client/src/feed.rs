//! Threat-intelligence feed download.

use crate::config::FeedConfig;
use crate::transport::{transport_error, Transport};
use reqwest::StatusCode;
use tikblock_core::{FeedDocument, Result, SyncError};
use tracing::{debug, info};
use url::Url;

/// Downloads the plaintext feed. No authentication is sent.
#[derive(Debug, Clone)]
pub struct FeedFetcher {
    transport: Transport,
    config: FeedConfig,
}

impl FeedFetcher {
    /// Create a fetcher, checking that the feed URL is an absolute http(s) URL
    pub fn new(transport: Transport, config: FeedConfig) -> Result<Self> {
        let url = Url::parse(&config.url)
            .map_err(|e| SyncError::Config(format!("invalid feed URL {:?}: {e}", config.url)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(SyncError::Config(format!(
                "feed URL must use http or https, got {}",
                url.scheme()
            )));
        }

        Ok(Self { transport, config })
    }

    /// URL the feed is fetched from
    #[must_use]
    pub fn url(&self) -> &str {
        &self.config.url
    }

    /// Download the feed.
    ///
    /// Anything but HTTP 200 is [`SyncError::FeedUnavailable`]; a body larger than
    /// the configured limit is [`SyncError::FeedTooLarge`].
    pub async fn fetch(&self) -> Result<FeedDocument> {
        let url = self.config.url.as_str();
        let limit = self.config.max_bytes;
        info!(url = %url, "fetching feed");

        let mut response = self
            .transport
            .http()
            .get(url)
            .send()
            .await
            .map_err(|e| transport_error(&e))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(SyncError::FeedUnavailable {
                status: status.as_u16(),
            });
        }

        if let Some(length) = response.content_length() {
            if length > limit as u64 {
                return Err(SyncError::FeedTooLarge { limit });
            }
        }

        let mut body = Vec::new();
        while let Some(chunk) = response.chunk().await.map_err(|e| transport_error(&e))? {
            if body.len() + chunk.len() > limit {
                return Err(SyncError::FeedTooLarge { limit });
            }
            body.extend_from_slice(&chunk);
        }
        debug!(bytes = body.len(), "feed downloaded");

        Ok(FeedDocument::new(
            url,
            String::from_utf8_lossy(&body).into_owned(),
        ))
    }
}
