use serde::{Serialize, Serializer};
use std::net::Ipv4Addr;

/// Address-list name entries land in unless configured otherwise
pub const DEFAULT_LIST_NAME: &str = "TALOS_BLACKLIST";

/// One address-list record as RouterOS expects it on `PUT /rest/ip/firewall/address-list`.
///
/// RouterOS takes its booleans as the strings `"true"`/`"false"`, so that is how
/// `disabled` and `dynamic` serialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlacklistEntry {
    /// Address to block
    pub address: Ipv4Addr,

    /// Whether the entry is created disabled
    #[serde(serialize_with = "bool_as_str")]
    pub disabled: bool,

    /// Whether the entry is dynamic (removed on reboot)
    #[serde(serialize_with = "bool_as_str")]
    pub dynamic: bool,

    /// Address-list name
    pub list: String,
}

impl BlacklistEntry {
    /// Entry for `address` on the default list
    #[must_use]
    pub fn new(address: Ipv4Addr) -> Self {
        Self::on_list(address, DEFAULT_LIST_NAME)
    }

    /// Entry for `address` on the given list
    #[must_use]
    pub fn on_list(address: Ipv4Addr, list: impl Into<String>) -> Self {
        Self {
            address,
            disabled: false,
            dynamic: false,
            list: list.into(),
        }
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn bool_as_str<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if *value { "true" } else { "false" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let entry = BlacklistEntry::new(Ipv4Addr::new(1, 2, 3, 4));
        assert!(!entry.disabled);
        assert!(!entry.dynamic);
        assert_eq!(entry.list, "TALOS_BLACKLIST");
    }

    #[test]
    fn test_routeros_wire_format() {
        let entry = BlacklistEntry::new(Ipv4Addr::new(8, 8, 8, 8));
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "address": "8.8.8.8",
                "disabled": "false",
                "dynamic": "false",
                "list": "TALOS_BLACKLIST",
            })
        );
    }

    #[test]
    fn test_custom_list() {
        let entry = BlacklistEntry::on_list(Ipv4Addr::new(9, 9, 9, 9), "feeds");
        assert_eq!(serde_json::to_value(&entry).unwrap()["list"], "feeds");
    }
}
