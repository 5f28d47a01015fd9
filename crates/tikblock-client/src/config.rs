//! Client configuration types.

use std::time::Duration;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Cisco Talos IP blacklist
pub const TALOS_FEED_URL: &str = "https://www.talosintelligence.com/documents/ip-blacklist";

/// Default upper bound for a downloaded feed (10 MiB)
pub const DEFAULT_MAX_FEED_BYTES: usize = 10 * 1024 * 1024;

/// How server certificates are checked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TlsPolicy {
    /// Validate the certificate chain and hostname
    #[default]
    Verify,

    /// Accept any certificate, including self-signed ones.
    ///
    /// RouterOS devices reached by raw IP usually present a self-signed certificate.
    /// Only the operator can choose this.
    AcceptInvalidCerts,
}

impl TlsPolicy {
    /// Policy for a boolean "accept invalid certificates" switch
    #[must_use]
    pub const fn from_accept_invalid(accept: bool) -> Self {
        if accept {
            Self::AcceptInvalidCerts
        } else {
            Self::Verify
        }
    }

    /// Returns true if certificate checks are skipped
    #[must_use]
    pub const fn skips_verification(self) -> bool {
        matches!(self, Self::AcceptInvalidCerts)
    }
}

/// Settings for the HTTP transport shared by every call in a run
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Certificate policy
    pub tls: TlsPolicy,

    /// Per-request timeout, `None` for no timeout
    pub timeout: Option<Duration>,

    /// User-Agent header
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            tls: TlsPolicy::default(),
            timeout: Some(DEFAULT_TIMEOUT),
            user_agent: format!("tikblock/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl TransportConfig {
    /// Set the certificate policy
    #[must_use]
    pub const fn tls(mut self, tls: TlsPolicy) -> Self {
        self.tls = tls;
        self
    }

    /// Set the per-request timeout (`None` disables it)
    #[must_use]
    pub const fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = agent.into();
        self
    }
}

/// Where the feed comes from and how much of it we accept
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Feed URL
    pub url: String,

    /// Maximum body size in bytes
    pub max_bytes: usize,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: TALOS_FEED_URL.to_string(),
            max_bytes: DEFAULT_MAX_FEED_BYTES,
        }
    }
}

impl FeedConfig {
    /// Feed at `url` with the default size limit
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Set the size limit
    #[must_use]
    pub const fn max_bytes(mut self, max: usize) -> Self {
        self.max_bytes = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_secure() {
        let config = TransportConfig::default();
        assert_eq!(config.tls, TlsPolicy::Verify);
        assert_eq!(config.timeout, Some(DEFAULT_TIMEOUT));
        assert!(config.user_agent.starts_with("tikblock/"));
    }

    #[test]
    fn test_policy_from_flag() {
        assert!(TlsPolicy::from_accept_invalid(true).skips_verification());
        assert!(!TlsPolicy::from_accept_invalid(false).skips_verification());
    }

    #[test]
    fn test_feed_defaults() {
        let feed = FeedConfig::default();
        assert_eq!(feed.url, TALOS_FEED_URL);
        assert_eq!(feed.max_bytes, DEFAULT_MAX_FEED_BYTES);
        assert_eq!(FeedConfig::new("http://x/feed").max_bytes(10).max_bytes, 10);
    }
}
