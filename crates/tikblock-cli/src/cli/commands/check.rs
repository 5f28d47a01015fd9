//! `tikblock check` - verify the login without touching the list.

use anyhow::{Context as _, Result};
use tikblock_sync::{Device, Reporter};

use super::Context;
use crate::cli::args::DeviceArgs;

pub async fn execute(ctx: Context, args: DeviceArgs) -> Result<()> {
    let (client, _) = ctx.client(&args)?;

    let resource = client
        .verify_credentials()
        .await
        .with_context(|| format!("login to {} failed", client.endpoint()))?;
    ctx.reporter().verified(&resource);

    Ok(())
}
