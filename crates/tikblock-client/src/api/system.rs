//! System API endpoints.

use crate::client::status_error;
use crate::transport::transport_error;
use crate::RouterOsClient;
use reqwest::StatusCode;
use tikblock_core::{Result, SystemResource};
use tracing::debug;

/// System API endpoints
pub struct SystemApi<'a> {
    client: &'a RouterOsClient,
}

impl<'a> SystemApi<'a> {
    pub(crate) const fn new(client: &'a RouterOsClient) -> Self {
        Self { client }
    }

    /// Fetch `/rest/system/resource`.
    ///
    /// Doubles as the credential check: anything but HTTP 200 is an
    /// [`Auth`](tikblock_core::SyncError::Auth) error. A body that does not parse is
    /// not an error; the summary is then empty.
    pub async fn resource(&self) -> Result<SystemResource> {
        let response = self.client.get("/rest/system/resource").await?;

        if response.status() != StatusCode::OK {
            return Err(status_error(response).await);
        }

        let body = response.text().await.map_err(|e| transport_error(&e))?;
        Ok(serde_json::from_str(&body).unwrap_or_else(|e| {
            debug!(error = %e, "unrecognised system resource payload");
            SystemResource::default()
        }))
    }
}
