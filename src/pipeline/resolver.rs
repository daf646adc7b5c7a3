use std::sync::Arc;

use reqwest::StatusCode;
use tracing::{debug, info, warn};

use super::{
    decoder::TokenDecoder,
    extract::{
        extract_decode_inputs, extract_redirect_location, extract_server_map,
        normalize_source_url,
    },
    fetcher::PageFetcher,
    models::{DecodedSource, ResolutionRequest, ServerMap},
};
use crate::{
    common::ResolveError,
    configs::VidSrcConfig,
    sources::{ExtractorRegistry, StreamResult},
};

/// Walks embed page -> routing page -> redirect probe -> backend extractor.
///
/// Holds only immutable state; one instance serves any number of concurrent
/// runs, each of which owns its server map and intermediate URLs.
pub struct VidSrcResolver {
    config: VidSrcConfig,
    fetcher: PageFetcher,
    decoder: Arc<dyn TokenDecoder>,
    extractors: ExtractorRegistry,
}

impl VidSrcResolver {
    pub fn new(
        config: VidSrcConfig,
        fetcher: PageFetcher,
        decoder: Arc<dyn TokenDecoder>,
        extractors: ExtractorRegistry,
    ) -> Self {
        Self {
            config,
            fetcher,
            decoder,
            extractors,
        }
    }

    pub fn extractors(&self) -> &ExtractorRegistry {
        &self.extractors
    }

    /// `{base}/embed/{id}`, or `{base}/embed/{id}/{season}-{episode}/`.
    pub fn embed_url(&self, request: &ResolutionRequest) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        let mut url = format!("{}/embed/{}", base, request.media_id);
        if let Some((season, episode)) = request.season_episode() {
            url.push_str(&format!("/{}-{}/", season, episode));
        }
        url
    }

    /// Stage 1: the embed page's server list, plus the referrer for stage 2.
    pub async fn get_sources(&self, url: &str) -> Result<(ServerMap, String), ResolveError> {
        debug!("Requesting embed page {}", url);
        let page = self.fetcher.fetch(url, None, true).await?;
        let referrer = page.origin_referrer();

        if page.status != StatusCode::OK {
            warn!(
                "Couldn't fetch \"{}\", status code: {}; {} likely doesn't have the requested media",
                page.final_url,
                page.status.as_u16(),
                referrer
            );
            return Err(ResolveError::UpstreamUnavailable {
                url: page.final_url.to_string(),
                status: page.status.as_u16(),
            });
        }

        Ok((extract_server_map(&page.body), referrer))
    }

    /// Stage 2: fetch the routing page for `token` and decode its payload.
    pub async fn get_source(
        &self,
        token: &str,
        referrer: &str,
    ) -> Result<DecodedSource, ResolveError> {
        let url = format!("{}/{}", self.config.rcp_url.trim_end_matches('/'), token);
        debug!("Requesting routing page {}", url);

        let page = self.fetcher.fetch(&url, Some(referrer), true).await?;
        if page.status != StatusCode::OK {
            warn!(
                "Couldn't fetch \"{}\", status code: {}",
                url,
                page.status.as_u16()
            );
            return Err(ResolveError::UpstreamUnavailable {
                url,
                status: page.status.as_u16(),
            });
        }

        let inputs = extract_decode_inputs(&page.body).map_err(|e| ResolveError::MalformedPage {
            url: url.clone(),
            reason: e.to_string(),
        })?;
        let decoded = self
            .decoder
            .decode(&inputs.encoded, &inputs.seed)
            .map_err(|e| ResolveError::MalformedPage {
                url: url.clone(),
                reason: e.to_string(),
            })?;

        Ok(DecodedSource {
            url: normalize_source_url(&decoded),
            referrer: url,
        })
    }

    /// Stage 3: probe the decoded source without following redirects.
    ///
    /// The gateway answers a valid source with exactly 302; anything else,
    /// 200 included, means the source is dead.
    pub async fn get_source_url(&self, source: &DecodedSource) -> Result<String, ResolveError> {
        debug!("Probing source {}", source.url);
        let page = self
            .fetcher
            .fetch(&source.url, Some(&source.referrer), false)
            .await?;

        let not_found = || ResolveError::RedirectNotFound {
            url: source.url.clone(),
            status: page.status.as_u16(),
        };

        if page.status != StatusCode::FOUND {
            warn!(
                "Couldn't find redirect for \"{}\", status code: {}",
                source.url,
                page.status.as_u16()
            );
            return Err(not_found());
        }

        extract_redirect_location(&page.headers).ok_or_else(|| {
            warn!("302 from \"{}\" carried no location", source.url);
            not_found()
        })
    }

    /// Runs the whole chain for one request.
    pub async fn resolve(&self, request: &ResolutionRequest) -> Result<StreamResult, ResolveError> {
        let embed_url = self.embed_url(request);
        let (servers, embed_referrer) = self.get_sources(&embed_url).await?;

        let Some(token) = servers.get(&request.source_name) else {
            let mut available: Vec<String> = servers.keys().cloned().collect();
            available.sort();
            warn!(
                "No source found for \"{}\", available sources: {}",
                request.source_name,
                available.join(", ")
            );
            return Err(ResolveError::SourceNotFound {
                requested: request.source_name.clone(),
                available,
            });
        };

        let source = self.get_source(token, &embed_referrer).await?;
        let final_host = self.get_source_url(&source).await?;

        let Some((kind, extractor)) = self.extractors.dispatch(&final_host) else {
            warn!("No extractor handles \"{}\"", final_host);
            return Err(ResolveError::NoMatchingExtractor { host: final_host });
        };

        info!(
            "Fetching source for \"{}\" via {} ({:?})",
            request.source_name,
            extractor.name(),
            kind
        );
        // The extractor gets the pre-redirect source; the final host only picks it.
        let result = extractor.resolve(&source.url, &source.referrer).await?;
        Ok(result)
    }

    /// [`Self::resolve`] with every failure logged and collapsed to `None`.
    pub async fn get_streams(&self, request: &ResolutionRequest) -> Option<StreamResult> {
        match self.resolve(request).await {
            Ok(result) => Some(result),
            Err(e) => {
                warn!(
                    "Resolution failed for {} ({}): {}",
                    request.media_id, request.source_name, e
                );
                None
            }
        }
    }
}
