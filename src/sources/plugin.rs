use async_trait::async_trait;

use crate::common::ExtractorError;

/// What a backend extractor hands back: playable manifests in preference order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamResult {
    pub streams: Vec<String>,
}

impl StreamResult {
    pub fn new(streams: Vec<String>) -> Self {
        Self { streams }
    }

    pub fn first_stream(&self) -> Option<&str> {
        self.streams.first().map(String::as_str)
    }
}

/// Host-specific logic that turns a decoded source URL into stream manifests.
///
/// Implementations are selected by [`super::ExtractorKind`]; each one only
/// ever sees URLs whose redirect chain ended on its own host.
#[async_trait]
pub trait BackendExtractor: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &str;

    /// Resolve `url` (requested with `referrer` as `Referer`) into streams.
    async fn resolve(&self, url: &str, referrer: &str) -> Result<StreamResult, ExtractorError>;
}

pub type BoxedExtractor = Box<dyn BackendExtractor>;
