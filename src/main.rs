use std::sync::Arc;

use tracing::info;
use vidsrc_resolver::{common::logger, configs::Config, server::{self, AppState}};

#[tokio::main]
async fn main() -> vidsrc_resolver::common::AnyResult<()> {
    let config = Config::load()?;
    logger::init(config.logging.as_ref());

    info!(
        "Starting vidsrc-resolver v{} (upstream {})",
        env!("CARGO_PKG_VERSION"),
        config.vidsrc.base_url
    );

    let state = Arc::new(AppState::new(config)?);
    server::serve(state).await
}
