//! Per-entry upload with isolated failure handling.

use crate::traits::Device;
use tikblock_core::{BlacklistEntry, UploadOutcome};
use tracing::{debug, warn};

/// Push `entry` to `device`, turning any failure into a failed outcome.
///
/// Never returns early and never retries; the caller moves on to the next entry
/// whatever happens here.
pub async fn upload_entry<D: Device + ?Sized>(
    device: &D,
    position: usize,
    entry: BlacklistEntry,
) -> UploadOutcome {
    let result = device.upload(&entry).await;

    match &result {
        Ok(receipt) => debug!(
            position,
            address = %entry.address,
            status = receipt.status,
            "entry uploaded"
        ),
        Err(err) => warn!(position, address = %entry.address, error = %err, "entry upload failed"),
    }

    UploadOutcome {
        position,
        entry,
        result,
    }
}
