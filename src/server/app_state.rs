use std::sync::Arc;

use crate::{
    common::AnyResult,
    configs::Config,
    pipeline::{HexXorDecoder, PageFetcher, VidSrcResolver},
    sources::ExtractorRegistry,
};

/// Top-level application state.
pub struct AppState {
    pub resolver: Arc<VidSrcResolver>,
    pub config: Config,
}

impl AppState {
    /// Wires the resolver from configuration.
    ///
    /// Backend extractors share the page fetcher's redirect-following client
    /// so the whole process uses one connection pool.
    pub fn new(config: Config) -> AnyResult<Self> {
        let fetcher = PageFetcher::new(&config.vidsrc)?;
        let extractors = ExtractorRegistry::new(&config.extractors, fetcher.client().clone());
        let resolver = VidSrcResolver::new(
            config.vidsrc.clone(),
            fetcher,
            Arc::new(HexXorDecoder),
            extractors,
        );

        Ok(Self {
            resolver: Arc::new(resolver),
            config,
        })
    }
}
