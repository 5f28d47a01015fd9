use crate::{BlacklistEntry, SyncError};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// What the device answered to an accepted upload
#[derive(Debug, Clone, Serialize)]
pub struct UploadReceipt {
    /// HTTP status code
    pub status: u16,

    /// Response headers, in the order received
    pub headers: Vec<(String, String)>,

    /// Response body
    pub body: String,
}

/// Result of pushing one entry to the device
#[derive(Debug)]
pub struct UploadOutcome {
    /// 1-based position of the entry among the feed's valid entries
    pub position: usize,

    /// Entry that was sent
    pub entry: BlacklistEntry,

    /// Device answer or the error that prevented one
    pub result: Result<UploadReceipt, SyncError>,
}

impl UploadOutcome {
    /// Returns true if the device accepted the entry
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// HTTP status of the attempt, if the device answered at all
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match &self.result {
            Ok(receipt) => Some(receipt.status),
            Err(err) => err.status_code(),
        }
    }
}

/// Counters for a finished run
#[derive(Debug, Clone, Serialize)]
pub struct SyncSummary {
    /// Entries the device accepted
    pub succeeded: usize,

    /// Entries whose upload failed
    pub failed: usize,

    /// Feed lines that were not IPv4 addresses
    pub rejected: usize,

    /// When the run started
    pub started_at: DateTime<Utc>,

    /// When the last entry was handled
    pub finished_at: DateTime<Utc>,
}

impl SyncSummary {
    /// Start counting at `started_at`
    #[must_use]
    pub const fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            succeeded: 0,
            failed: 0,
            rejected: 0,
            started_at,
            finished_at: started_at,
        }
    }

    /// Number of uploads attempted
    #[must_use]
    pub const fn attempted(&self) -> usize {
        self.succeeded + self.failed
    }

    /// Record one outcome
    pub fn record(&mut self, outcome: &UploadOutcome) {
        if outcome.is_success() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }

    /// Wall-clock duration of the run
    #[must_use]
    pub fn elapsed(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    fn outcome(result: Result<UploadReceipt, SyncError>) -> UploadOutcome {
        UploadOutcome {
            position: 1,
            entry: BlacklistEntry::new(Ipv4Addr::new(1, 2, 3, 4)),
            result,
        }
    }

    #[test]
    fn test_summary_counts() {
        let mut summary = SyncSummary::new(Utc::now());
        summary.record(&outcome(Ok(UploadReceipt {
            status: 200,
            headers: vec![],
            body: String::new(),
        })));
        summary.record(&outcome(Err(SyncError::Timeout)));
        summary.record(&outcome(Err(SyncError::Auth {
            status: 400,
            message: String::new(),
        })));

        assert_eq!(summary.succeeded, 1);
        assert_eq!(summary.failed, 2);
        assert_eq!(summary.attempted(), 3);
    }

    #[test]
    fn test_outcome_status_code() {
        let failed = outcome(Err(SyncError::Auth {
            status: 409,
            message: String::new(),
        }));
        assert!(!failed.is_success());
        assert_eq!(failed.status_code(), Some(409));
        assert_eq!(outcome(Err(SyncError::Timeout)).status_code(), None);
    }
}
