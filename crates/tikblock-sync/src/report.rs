//! Progress callbacks.

use crate::validator::Rejection;
use std::fmt;
use tikblock_core::{SystemResource, UploadOutcome};

/// Stage of a sync run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing has happened yet
    NotStarted,
    /// Device accepted the credential
    CredentialsVerified,
    /// Feed downloaded
    FeedFetched,
    /// Entries are being pushed
    Uploading,
    /// Every entry has been attempted
    Done,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NotStarted => "not started",
            Self::CredentialsVerified => "credentials verified",
            Self::FeedFetched => "feed fetched",
            Self::Uploading => "uploading",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}

/// Receives what happens during a run, as it happens.
///
/// Only [`Reporter::outcome`] is required.
pub trait Reporter {
    /// The run moved to `phase`
    fn phase(&mut self, _phase: Phase) {}

    /// The credential check passed
    fn verified(&mut self, _resource: &SystemResource) {}

    /// A feed line was skipped; `line_number` is 1-based
    fn rejected(&mut self, _line_number: usize, _line: &str, _reason: Rejection) {}

    /// An entry was attempted
    fn outcome(&mut self, outcome: &UploadOutcome);
}
