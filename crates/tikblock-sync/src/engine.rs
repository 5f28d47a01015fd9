//! The sync run: verify, fetch, upload.

use crate::report::{Phase, Reporter};
use crate::traits::{Device, FeedSource};
use crate::uploader::upload_entry;
use crate::validator::{EntryValidator, Rejection};
use chrono::Utc;
use futures_util::future::{self, Either, FutureExt};
use futures_util::stream::{self, StreamExt};
use std::num::NonZeroUsize;
use tikblock_core::{Result, SyncSummary, UploadOutcome};
use tracing::{debug, info, instrument};

/// Knobs for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncOptions {
    /// Maximum uploads in flight. Outcomes are reported in feed order regardless.
    pub concurrency: NonZeroUsize,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            concurrency: NonZeroUsize::MIN,
        }
    }
}

impl SyncOptions {
    /// Set the number of uploads in flight; 0 is treated as 1
    #[must_use]
    pub fn concurrency(mut self, n: usize) -> Self {
        self.concurrency = NonZeroUsize::new(n).unwrap_or(NonZeroUsize::MIN);
        self
    }
}

enum Step {
    Attempted(UploadOutcome),
    Rejected {
        line_number: usize,
        line: String,
        reason: Rejection,
    },
}

/// Drives one feed into one device
pub struct SyncEngine<D, F> {
    device: D,
    feed: F,
    validator: EntryValidator,
    options: SyncOptions,
}

impl<D: Device, F: FeedSource> SyncEngine<D, F> {
    /// Engine with the default validator and options
    pub fn new(device: D, feed: F) -> Self {
        Self {
            device,
            feed,
            validator: EntryValidator::default(),
            options: SyncOptions::default(),
        }
    }

    /// Use a custom validator (e.g. another list name)
    #[must_use]
    pub fn validator(mut self, validator: EntryValidator) -> Self {
        self.validator = validator;
        self
    }

    /// Set run options
    #[must_use]
    pub fn options(mut self, options: SyncOptions) -> Self {
        self.options = options;
        self
    }

    /// Device the engine writes to
    pub const fn device(&self) -> &D {
        &self.device
    }

    /// Feed the engine reads from
    pub const fn feed(&self) -> &F {
        &self.feed
    }

    /// Run the whole sync.
    ///
    /// A failed credential check or feed download ends the run with `Err`; nothing
    /// after it is attempted. Once uploading starts, every valid entry is attempted and
    /// its outcome handed to `reporter`; per-entry failures never end the run.
    #[instrument(skip_all, fields(list = %self.validator.list()))]
    pub async fn run<R: Reporter + ?Sized>(&self, reporter: &mut R) -> Result<SyncSummary> {
        let mut summary = SyncSummary::new(Utc::now());
        reporter.phase(Phase::NotStarted);

        let resource = self.device.verify_credentials().await?;
        info!(device = %resource.describe(), "credentials verified");
        reporter.phase(Phase::CredentialsVerified);
        reporter.verified(&resource);

        let document = self.feed.fetch().await?;
        info!(source = document.source(), bytes = document.len(), "feed fetched");
        reporter.phase(Phase::FeedFetched);

        reporter.phase(Phase::Uploading);
        let device = &self.device;
        let validator = &self.validator;
        let mut position = 0;

        let steps = stream::iter(document.into_lines().enumerate())
            .map(|(index, line)| match validator.validate(&line) {
                Ok(entry) => {
                    position += 1;
                    Either::Left(upload_entry(device, position, entry).map(Step::Attempted))
                }
                Err(reason) => Either::Right(future::ready(Step::Rejected {
                    line_number: index + 1,
                    line,
                    reason,
                })),
            })
            .buffered(self.options.concurrency.get());
        let mut steps = std::pin::pin!(steps);

        while let Some(step) = steps.next().await {
            match step {
                Step::Attempted(outcome) => {
                    summary.record(&outcome);
                    reporter.outcome(&outcome);
                }
                Step::Rejected {
                    line_number,
                    line,
                    reason,
                } => {
                    debug!(line_number, %reason, "feed line skipped");
                    summary.rejected += 1;
                    reporter.rejected(line_number, &line, reason);
                }
            }
        }

        summary.finished_at = Utc::now();
        info!(
            succeeded = summary.succeeded,
            failed = summary.failed,
            rejected = summary.rejected,
            "sync finished"
        );
        reporter.phase(Phase::Done);

        Ok(summary)
    }
}
