use std::sync::LazyLock;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use regex::Regex;
use reqwest::{Client, header::REFERER};
use tracing::{debug, warn};

use crate::{
    common::ExtractorError,
    pipeline::extract::normalize_source_url,
    sources::plugin::{BackendExtractor, StreamResult},
};

static FILE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"file:\s*"([^"]*)""#).unwrap());
static NOISE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/@#@/[^=/]+==").unwrap());
static PASS_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"var pass_path\s*=\s*"([^"]*)";"#).unwrap());

/// Player pages on vidsrc.stream ("VidSrc PRO").
///
/// The HLS URL sits in the player setup as an obfuscated base64 `file:`
/// value. The page also names a `pass_path` that has to be hit once with the
/// same referrer before the CDN starts serving the playlist.
pub struct VidSrcProExtractor {
    client: Client,
}

impl VidSrcProExtractor {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    async fn set_pass(&self, pass_path: &str, referrer: &str) {
        let url = normalize_source_url(pass_path);
        match self.client.get(&url).header(REFERER, referrer).send().await {
            Ok(resp) if resp.status().is_success() => debug!("pass_path accepted: {}", url),
            Ok(resp) => warn!("pass_path {} returned {}", url, resp.status()),
            Err(e) => warn!("pass_path request to {} failed: {}", url, e),
        }
    }
}

/// Turns the player's `file:` value into a playable URL.
///
/// Plain URLs pass through. Otherwise the value is `#2` + base64 with
/// `/@#@/xxx==` garbage spliced in and a URL-safe alphabet.
pub fn decode_hls_url(file: &str) -> Result<String, ExtractorError> {
    if file.starts_with("http") {
        return Ok(file.to_string());
    }

    let payload = file.strip_prefix("#2").unwrap_or(file);
    let payload = NOISE_RE.replace_all(payload, "");
    let payload = payload.replace('_', "/").replace('-', "+");

    let bytes = STANDARD
        .decode(payload.as_bytes())
        .map_err(|e| ExtractorError::InvalidPayload(e.to_string()))?;
    let url = String::from_utf8(bytes)
        .map_err(|_| ExtractorError::InvalidPayload("not UTF-8".to_string()))?;

    if !url.starts_with("http") {
        return Err(ExtractorError::InvalidPayload(format!(
            "decoded value is not a URL: {}",
            url
        )));
    }
    Ok(url)
}

#[async_trait]
impl BackendExtractor for VidSrcProExtractor {
    fn name(&self) -> &str {
        "vidsrcpro"
    }

    async fn resolve(&self, url: &str, referrer: &str) -> Result<StreamResult, ExtractorError> {
        let resp = self.client.get(url).header(REFERER, referrer).send().await?;
        if !resp.status().is_success() {
            return Err(ExtractorError::Status {
                url: url.to_string(),
                status: resp.status().as_u16(),
            });
        }
        let body = resp.text().await?;

        let file = FILE_RE
            .captures(&body)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
            .ok_or(ExtractorError::MissingPayload("file"))?;
        let hls_url = decode_hls_url(file)?;

        if let Some(pass_path) = PASS_PATH_RE.captures(&body).and_then(|caps| caps.get(1)) {
            self.set_pass(pass_path.as_str(), referrer).await;
        }

        Ok(StreamResult::new(vec![hls_url]))
    }
}
