//! Firewall address-list endpoints.

use crate::client::status_error;
use crate::transport::transport_error;
use crate::RouterOsClient;
use tikblock_core::{BlacklistEntry, Result, UploadReceipt};

/// Firewall address-list endpoints
pub struct AddressListApi<'a> {
    client: &'a RouterOsClient,
}

impl<'a> AddressListApi<'a> {
    pub(crate) const fn new(client: &'a RouterOsClient) -> Self {
        Self { client }
    }

    /// Add `entry` to its address-list.
    ///
    /// Sent as a `PUT`, which RouterOS treats as create; no lookup of existing entries
    /// is done first. Any 2xx is success; other statuses (including "already have such
    /// entry") come back as [`Auth`](tikblock_core::SyncError::Auth) errors.
    pub async fn put(&self, entry: &BlacklistEntry) -> Result<UploadReceipt> {
        let response = self
            .client
            .put("/rest/ip/firewall/address-list", entry)
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(status_error(response).await);
        }

        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.text().await.map_err(|e| transport_error(&e))?;

        Ok(UploadReceipt {
            status: status.as_u16(),
            headers,
            body,
        })
    }
}
