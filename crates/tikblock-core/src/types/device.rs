use serde::{Deserialize, Serialize};

/// Summary from `GET /rest/system/resource`.
///
/// RouterOS reports every value as a string; fields missing on a given board stay `None`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SystemResource {
    /// Board model
    #[serde(default)]
    pub board_name: Option<String>,

    /// RouterOS version
    #[serde(default)]
    pub version: Option<String>,

    /// Uptime as RouterOS formats it (e.g. `1w2d03:04:05`)
    #[serde(default)]
    pub uptime: Option<String>,

    /// CPU architecture
    #[serde(default)]
    pub architecture_name: Option<String>,

    /// CPU load in percent
    #[serde(default)]
    pub cpu_load: Option<String>,

    /// Free memory in bytes
    #[serde(default)]
    pub free_memory: Option<String>,

    /// Total memory in bytes
    #[serde(default)]
    pub total_memory: Option<String>,

    /// Platform name
    #[serde(default)]
    pub platform: Option<String>,
}

impl SystemResource {
    /// One-line description for logs and console output
    #[must_use]
    pub fn describe(&self) -> String {
        let board = self.board_name.as_deref().unwrap_or("unknown board");
        match &self.version {
            Some(version) => format!("{board}, RouterOS {version}"),
            None => board.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_routeros_payload() {
        let body = r#"{
            "architecture-name": "arm64",
            "board-name": "RB5009UG+S+",
            "cpu-load": "3",
            "free-memory": "843657216",
            "platform": "MikroTik",
            "total-memory": "1073741824",
            "uptime": "2w1d04:05:06",
            "version": "7.14.3 (stable)"
        }"#;
        let res: SystemResource = serde_json::from_str(body).unwrap();
        assert_eq!(res.board_name.as_deref(), Some("RB5009UG+S+"));
        assert_eq!(res.cpu_load.as_deref(), Some("3"));
        assert_eq!(res.describe(), "RB5009UG+S+, RouterOS 7.14.3 (stable)");
    }

    #[test]
    fn test_missing_fields() {
        let res: SystemResource = serde_json::from_str("{}").unwrap();
        assert_eq!(res.describe(), "unknown board");
    }
}
