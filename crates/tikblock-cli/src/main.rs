//! tikblock - sync a threat-intel IP feed into a MikroTik address-list.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    tikblock_cli::run().await
}
