//! RouterOS REST API client implementation.

use crate::api::{AddressListApi, SystemApi};
use crate::config::TransportConfig;
use crate::transport::{transport_error, Transport};
use reqwest::header::CONTENT_TYPE;
use reqwest::Response;
use serde::Serialize;
use std::sync::Arc;
use tikblock_core::{Credential, DeviceEndpoint, Result, SyncError};
use tracing::debug;

/// Content type RouterOS gets for request bodies
const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// Authenticated client for one RouterOS device
#[derive(Clone)]
pub struct RouterOsClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    transport: Transport,
    credential: Credential,
    endpoint: DeviceEndpoint,
    base_url: String,
}

impl RouterOsClient {
    /// Create a client for `endpoint` with default transport settings
    pub fn new(endpoint: DeviceEndpoint, credential: Credential) -> Result<Self> {
        RouterOsClientBuilder::new(endpoint, credential).build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder(endpoint: DeviceEndpoint, credential: Credential) -> RouterOsClientBuilder {
        RouterOsClientBuilder::new(endpoint, credential)
    }

    /// Access `/rest/system` endpoints
    #[must_use]
    pub const fn system(&self) -> SystemApi<'_> {
        SystemApi::new(self)
    }

    /// Access `/rest/ip/firewall/address-list`
    #[must_use]
    pub const fn address_list(&self) -> AddressListApi<'_> {
        AddressListApi::new(self)
    }

    /// Device this client talks to
    #[must_use]
    pub fn endpoint(&self) -> DeviceEndpoint {
        self.inner.endpoint
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Perform an authenticated GET request
    pub(crate) async fn get(&self, path: &str) -> Result<Response> {
        let url = self.build_url(path);
        debug!(url = %url, "GET request");

        self.inner
            .transport
            .http()
            .get(&url)
            .basic_auth(self.inner.credential.username(), Some(self.inner.credential.secret()))
            .send()
            .await
            .map_err(|e| transport_error(&e))
    }

    /// Perform an authenticated PUT request with a JSON body
    pub(crate) async fn put<B: Serialize>(&self, path: &str, body: &B) -> Result<Response> {
        let url = self.build_url(path);
        let payload = serde_json::to_vec(body)?;
        debug!(url = %url, "PUT request");

        self.inner
            .transport
            .http()
            .put(&url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .basic_auth(self.inner.credential.username(), Some(self.inner.credential.secret()))
            .body(payload)
            .send()
            .await
            .map_err(|e| transport_error(&e))
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.inner.base_url, path)
    }
}

/// Convert a non-success response into an [`SyncError::Auth`]
pub(crate) async fn status_error(response: Response) -> SyncError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();

    // RouterOS errors look like {"error":400,"message":"Bad Request","detail":"..."}
    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| {
            ["detail", "message"]
                .iter()
                .find_map(|key| v.get(key).and_then(|m| m.as_str()).map(String::from))
        })
        .unwrap_or(body);

    SyncError::Auth { status, message }
}

/// Builder for configuring a [`RouterOsClient`]
pub struct RouterOsClientBuilder {
    endpoint: DeviceEndpoint,
    credential: Credential,
    base_url: Option<String>,
    transport: Option<Transport>,
    transport_config: TransportConfig,
}

impl RouterOsClientBuilder {
    /// Create a new builder for `endpoint`
    #[must_use]
    pub fn new(endpoint: DeviceEndpoint, credential: Credential) -> Self {
        Self {
            endpoint,
            credential,
            base_url: None,
            transport: None,
            transport_config: TransportConfig::default(),
        }
    }

    /// Override the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into().trim_end_matches('/').to_string());
        self
    }

    /// Reuse an existing transport
    #[must_use]
    pub fn transport(mut self, transport: Transport) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Transport settings, ignored when [`Self::transport`] is set
    #[must_use]
    pub fn transport_config(mut self, config: TransportConfig) -> Self {
        self.transport_config = config;
        self
    }

    /// Build the client
    pub fn build(self) -> Result<RouterOsClient> {
        let transport = match self.transport {
            Some(transport) => transport,
            None => Transport::new(self.transport_config)?,
        };
        let base_url = self.base_url.unwrap_or_else(|| self.endpoint.base_url());

        Ok(RouterOsClient {
            inner: Arc::new(ClientInner {
                transport,
                credential: self.credential,
                endpoint: self.endpoint,
                base_url,
            }),
        })
    }
}
