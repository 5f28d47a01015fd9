use crate::{Result, SyncError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

/// Management address of the RouterOS device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DeviceEndpoint {
    address: Ipv4Addr,
}

impl DeviceEndpoint {
    /// Create an endpoint from an already-parsed address
    #[must_use]
    pub const fn new(address: Ipv4Addr) -> Self {
        Self { address }
    }

    /// Parse a dotted-quad IPv4 address, rejecting IPv6 and anything else
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        match input.parse::<IpAddr>() {
            Ok(IpAddr::V4(address)) => Ok(Self { address }),
            Ok(IpAddr::V6(_)) => Err(SyncError::Input(format!(
                "device address must be IPv4, got {input}"
            ))),
            Err(_) => Err(SyncError::Input(format!(
                "invalid IP address format: {input:?}"
            ))),
        }
    }

    /// Device IPv4 address
    #[must_use]
    pub const fn address(&self) -> Ipv4Addr {
        self.address
    }

    /// Base URL of the device's REST API
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("https://{}", self.address)
    }
}

impl FromStr for DeviceEndpoint {
    type Err = SyncError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DeviceEndpoint {
    type Error = SyncError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<DeviceEndpoint> for String {
    fn from(endpoint: DeviceEndpoint) -> Self {
        endpoint.address.to_string()
    }
}

impl fmt::Display for DeviceEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ipv4() {
        let ep = DeviceEndpoint::parse(" 192.168.88.1\n").unwrap();
        assert_eq!(ep.address(), Ipv4Addr::new(192, 168, 88, 1));
        assert_eq!(ep.base_url(), "https://192.168.88.1");
    }

    #[test]
    fn test_reject_ipv6_and_garbage() {
        assert!(matches!(
            DeviceEndpoint::parse("fe80::1"),
            Err(SyncError::Input(_))
        ));
        assert!(DeviceEndpoint::parse("router.lan").is_err());
        assert!(DeviceEndpoint::parse("").is_err());
        assert!(DeviceEndpoint::parse("10.0.0.256").is_err());
    }

    #[test]
    fn test_serde_as_string() {
        let ep: DeviceEndpoint = serde_json::from_str("\"10.0.0.1\"").unwrap();
        assert_eq!(ep.to_string(), "10.0.0.1");
        assert_eq!(serde_json::to_string(&ep).unwrap(), "\"10.0.0.1\"");
        assert!(serde_json::from_str::<DeviceEndpoint>("\"::1\"").is_err());
    }
}
