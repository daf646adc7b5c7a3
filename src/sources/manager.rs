use reqwest::Client;

use super::{
    plugin::{BackendExtractor, BoxedExtractor},
    superembed::SuperembedExtractor,
    vidsrcpro::VidSrcProExtractor,
};
use crate::configs::ExtractorsConfig;

/// Every host the resolver knows how to finish a chain on.
///
/// Order of [`ExtractorKind::ALL`] is the matching priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtractorKind {
    VidSrcPro,
    Superembed,
}

impl ExtractorKind {
    pub const ALL: [ExtractorKind; 2] = [ExtractorKind::VidSrcPro, ExtractorKind::Superembed];

    /// Substring the final redirect target must contain.
    pub fn host_pattern(self) -> &'static str {
        match self {
            Self::VidSrcPro => "vidsrc.stream",
            Self::Superembed => "multiembed.mov",
        }
    }

    /// Server name as listed on the embed page.
    pub fn source_name(self) -> &'static str {
        match self {
            Self::VidSrcPro => "VidSrc PRO",
            Self::Superembed => "Superembed",
        }
    }

    pub fn matches(self, final_host: &str) -> bool {
        final_host.contains(self.host_pattern())
    }

    /// First kind, in priority order, whose pattern occurs in `final_host`.
    pub fn detect(final_host: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.matches(final_host))
    }
}

/// Enabled backend extractors keyed by kind.
#[derive(Default)]
pub struct ExtractorRegistry {
    extractors: Vec<(ExtractorKind, BoxedExtractor)>,
}

impl ExtractorRegistry {
    pub fn new(config: &ExtractorsConfig, client: Client) -> Self {
        let mut registry = Self::default();

        macro_rules! register_extractor {
            ($enabled:expr, $kind:expr, $ctor:expr) => {
                if $enabled {
                    tracing::info!("Loaded extractor: {}", $kind.source_name());
                    registry = registry.with($kind, $ctor);
                } else {
                    tracing::debug!("Extractor disabled: {}", $kind.source_name());
                }
            };
        }

        register_extractor!(
            config.vidsrcpro,
            ExtractorKind::VidSrcPro,
            VidSrcProExtractor::new(client.clone())
        );
        register_extractor!(
            config.superembed,
            ExtractorKind::Superembed,
            SuperembedExtractor::new(client.clone())
        );

        registry
    }

    /// Registers (or replaces) the extractor for `kind`.
    pub fn with(mut self, kind: ExtractorKind, extractor: impl BackendExtractor + 'static) -> Self {
        self.extractors.retain(|(k, _)| *k != kind);
        self.extractors.push((kind, Box::new(extractor)));
        self
    }

    pub fn get(&self, kind: ExtractorKind) -> Option<&dyn BackendExtractor> {
        self.extractors
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, e)| e.as_ref())
    }

    /// Picks the extractor for the host a redirect chain ended on.
    ///
    /// Kinds are tried in priority order; a kind that matches but is not
    /// registered is passed over.
    pub fn dispatch(&self, final_host: &str) -> Option<(ExtractorKind, &dyn BackendExtractor)> {
        ExtractorKind::ALL
            .into_iter()
            .filter(|kind| kind.matches(final_host))
            .find_map(|kind| self.get(kind).map(|e| (kind, e)))
    }

    /// Source names whose extractor is enabled, in priority order.
    pub fn source_names(&self) -> Vec<&'static str> {
        ExtractorKind::ALL
            .into_iter()
            .filter(|kind| self.get(*kind).is_some())
            .map(ExtractorKind::source_name)
            .collect()
    }
}
