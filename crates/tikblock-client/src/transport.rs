//! HTTP transport shared by the device and feed clients.

use crate::config::TransportConfig;
use reqwest::Client as HttpClient;
use std::error::Error as _;
use tikblock_core::{Result, SyncError};
use tracing::warn;

/// Configured HTTP client. Cloning is cheap; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct Transport {
    http: HttpClient,
    config: TransportConfig,
}

impl Transport {
    /// Build the transport described by `config`
    pub fn new(config: TransportConfig) -> Result<Self> {
        let mut builder = HttpClient::builder()
            .user_agent(&config.user_agent)
            .gzip(true);

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        if config.tls.skips_verification() {
            warn!("TLS certificate verification is disabled; any certificate will be accepted");
            builder = builder.danger_accept_invalid_certs(true);
        }

        let http = builder
            .build()
            .map_err(|e| SyncError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Settings this transport was built with
    #[must_use]
    pub const fn config(&self) -> &TransportConfig {
        &self.config
    }

    pub(crate) const fn http(&self) -> &HttpClient {
        &self.http
    }
}

/// Map a reqwest failure to the transport side of the error taxonomy
pub(crate) fn transport_error(err: &reqwest::Error) -> SyncError {
    if err.is_timeout() {
        return SyncError::Timeout;
    }

    // reqwest's Display stops at the outermost layer; the cause (refused, DNS, TLS) is below
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }

    SyncError::Network(message)
}
