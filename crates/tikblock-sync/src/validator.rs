//! Feed line validation.

use std::net::IpAddr;
use thiserror::Error;
use tikblock_core::{BlacklistEntry, DEFAULT_LIST_NAME};

/// Why a feed line did not become an entry
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Blank or whitespace-only line
    #[error("empty line")]
    Empty,

    /// Line starting with `#` or `;`
    #[error("comment")]
    Comment,

    /// Valid address, but IPv6
    #[error("IPv6 address")]
    Ipv6,

    /// Anything else
    #[error("not an IPv4 address")]
    Malformed,
}

/// Turns feed lines into [`BlacklistEntry`] values for one address-list
#[derive(Debug, Clone)]
pub struct EntryValidator {
    list: String,
}

impl Default for EntryValidator {
    fn default() -> Self {
        Self::new(DEFAULT_LIST_NAME)
    }
}

impl EntryValidator {
    /// Validator producing entries for `list`
    #[must_use]
    pub fn new(list: impl Into<String>) -> Self {
        Self { list: list.into() }
    }

    /// Address-list name entries are created for
    #[must_use]
    pub fn list(&self) -> &str {
        &self.list
    }

    /// Accept `line` if, trimmed, it is a dotted-quad IPv4 address
    pub fn validate(&self, line: &str) -> Result<BlacklistEntry, Rejection> {
        let candidate = line.trim();

        if candidate.is_empty() {
            return Err(Rejection::Empty);
        }
        if candidate.starts_with('#') || candidate.starts_with(';') {
            return Err(Rejection::Comment);
        }

        match candidate.parse::<IpAddr>() {
            Ok(IpAddr::V4(address)) => Ok(BlacklistEntry::on_list(address, self.list.as_str())),
            Ok(IpAddr::V6(_)) => Err(Rejection::Ipv6),
            Err(_) => Err(Rejection::Malformed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn test_accepts_dotted_quad() {
        let validator = EntryValidator::default();
        for line in ["1.2.3.4", "  8.8.8.8\t", "255.255.255.255", "0.0.0.0"] {
            let entry = validator.validate(line).unwrap();
            assert_eq!(entry.address, line.trim().parse::<Ipv4Addr>().unwrap());
            assert_eq!(entry.list, "TALOS_BLACKLIST");
            assert!(!entry.disabled);
            assert!(!entry.dynamic);
        }
    }

    #[test]
    fn test_rejections() {
        let validator = EntryValidator::default();
        assert_eq!(validator.validate(""), Err(Rejection::Empty));
        assert_eq!(validator.validate("   "), Err(Rejection::Empty));
        assert_eq!(validator.validate("# Talos blacklist"), Err(Rejection::Comment));
        assert_eq!(validator.validate("; generated"), Err(Rejection::Comment));
        assert_eq!(validator.validate("2001:db8::1"), Err(Rejection::Ipv6));
        assert_eq!(validator.validate("::ffff:1.2.3.4"), Err(Rejection::Ipv6));
        assert_eq!(validator.validate("not-an-ip"), Err(Rejection::Malformed));
        assert_eq!(validator.validate("1.2.3"), Err(Rejection::Malformed));
        assert_eq!(validator.validate("1.2.3.4/24"), Err(Rejection::Malformed));
        assert_eq!(validator.validate("300.1.1.1"), Err(Rejection::Malformed));
        assert_eq!(validator.validate("1.2.3.4 extra"), Err(Rejection::Malformed));
    }

    #[test]
    fn test_custom_list() {
        let validator = EntryValidator::new("SPAMHAUS_DROP");
        assert_eq!(validator.list(), "SPAMHAUS_DROP");
        assert_eq!(validator.validate("9.9.9.9").unwrap().list, "SPAMHAUS_DROP");
    }
}
