//! `tikblock sync` - push the feed into the address-list.

use anyhow::{Context as _, Result};
use tikblock_client::{FeedConfig, FeedFetcher, TALOS_FEED_URL};
use tikblock_core::DEFAULT_LIST_NAME;
use tikblock_sync::{EntryValidator, Phase, SyncEngine, SyncOptions};
use tracing::info;

use super::Context;
use crate::cli::args::SyncArgs;

pub async fn execute(ctx: Context, args: SyncArgs) -> Result<()> {
    let (client, transport) = ctx.client(&args.device)?;
    let device = client.endpoint();

    let feed_url = args
        .feed_url
        .or_else(|| ctx.config.feed_url.clone())
        .unwrap_or_else(|| TALOS_FEED_URL.to_string());
    let feed = FeedFetcher::new(transport, FeedConfig::new(feed_url.as_str()))?;

    let list = args
        .list
        .or_else(|| ctx.config.list.clone())
        .unwrap_or_else(|| DEFAULT_LIST_NAME.to_string());
    let concurrency = args.concurrency.or(ctx.config.concurrency).unwrap_or(1);

    info!(%device, feed = %feed_url, %list, concurrency, "starting sync");

    let engine = SyncEngine::new(client, feed)
        .validator(EntryValidator::new(list))
        .options(SyncOptions::default().concurrency(concurrency));

    let mut reporter = ctx.reporter();
    let result = engine.run(&mut reporter).await;
    let summary = result.with_context(|| match reporter.reached() {
        Phase::NotStarted => format!("login to {device} failed"),
        Phase::CredentialsVerified => format!("feed download from {feed_url} failed"),
        phase => format!("sync stopped while {phase}"),
    })?;
    reporter.summary(&summary);

    Ok(())
}
