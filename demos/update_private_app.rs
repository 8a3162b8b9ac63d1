//! Update a private app and print the normalized response
//!
//! ```text
//! NPA_BASE_URL=https://tenant.goskope.com/api/v2 NPA_HOOK_DEBUG=1 \
//!     cargo run --example update_private_app -- 42 wiki.internal
//! ```
//!
//! Authentication headers are expected to be injected by a proxy or added
//! through an extra before-request hook.

use anyhow::{Context, Result};
use npa_hooks::{init_logging, ApiClient, ClientConfig, LoggingConfig, PrivateAppUpdate};

#[tokio::main]
async fn main() -> Result<()> {
    init_logging(&LoggingConfig::default().with_stderr(true))?;

    let mut args = std::env::args().skip(1);
    let private_app_id: i64 = args
        .next()
        .context("usage: update_private_app <private_app_id> [host]")?
        .parse()
        .context("private_app_id must be an integer")?;
    let host = args.next();

    let config = ClientConfig::from_env()?;
    let client = ApiClient::new(config)?;

    let mut update = PrivateAppUpdate::new();
    if let Some(host) = host {
        update = update.with_host(host);
    }

    let results = client.update_private_app(private_app_id, &update).await?;
    for result in &results {
        println!("{}", serde_json::to_string_pretty(result)?);
    }

    Ok(())
}
