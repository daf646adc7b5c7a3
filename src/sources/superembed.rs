use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use reqwest::{Client, header::REFERER};
use tracing::debug;

use crate::{
    common::ExtractorError,
    sources::plugin::{BackendExtractor, StreamResult},
};

static M3U8_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"https?://[^\s"'<>\\]+?\.m3u8[^\s"'<>\\]*"#).unwrap()
});

/// multiembed.mov ("Superembed") players.
///
/// The player page bounces through a couple of redirects and then carries
/// its HLS manifests inline, so every `.m3u8` URL on the final page is a
/// candidate stream.
pub struct SuperembedExtractor {
    client: Client,
}

impl SuperembedExtractor {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

/// Distinct HLS URLs in document order. Escaped slashes (`\/`) from inline
/// JSON are unescaped first.
pub fn find_hls_urls(body: &str) -> Vec<String> {
    let body = body.replace("\\/", "/");
    let mut urls: Vec<String> = Vec::new();
    for m in M3U8_RE.find_iter(&body) {
        let url = m.as_str();
        if !urls.iter().any(|u| u == url) {
            urls.push(url.to_string());
        }
    }
    urls
}

#[async_trait]
impl BackendExtractor for SuperembedExtractor {
    fn name(&self) -> &str {
        "superembed"
    }

    async fn resolve(&self, url: &str, referrer: &str) -> Result<StreamResult, ExtractorError> {
        let resp = self.client.get(url).header(REFERER, referrer).send().await?;
        if !resp.status().is_success() {
            return Err(ExtractorError::Status {
                url: url.to_string(),
                status: resp.status().as_u16(),
            });
        }
        let landed = resp.url().to_string();
        let body = resp.text().await?;

        let streams = find_hls_urls(&body);
        if streams.is_empty() {
            return Err(ExtractorError::NoStreams(landed));
        }
        debug!("{} stream(s) found on {}", streams.len(), landed);

        Ok(StreamResult::new(streams))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_find_hls_urls() {
        let body = r#"
            <script>
              var sources = [{"file":"https:\/\/cdn.example\/hls\/1080\/index.m3u8?t=1"}];
              player.setup({ file: 'https://cdn.example/hls/720/index.m3u8' });
              fallback("https://cdn.example/hls/720/index.m3u8");
              poster = "https://cdn.example/poster.jpg";
            </script>
        "#;
        assert_eq!(
            find_hls_urls(body),
            vec![
                "https://cdn.example/hls/1080/index.m3u8?t=1".to_string(),
                "https://cdn.example/hls/720/index.m3u8".to_string(),
            ]
        );
        assert!(find_hls_urls("<html></html>").is_empty());
    }

    #[tokio::test]
    async fn test_resolve_follows_redirects() {
        let server = MockServer::start().await;
        let referrer = "https://rcp.vidsrc.me/rcp/tok";
        Mock::given(method("GET"))
            .and(path("/srcrcp/abc"))
            .and(header("referer", referrer))
            .respond_with(
                ResponseTemplate::new(302)
                    .insert_header("location", format!("{}/player", server.uri()).as_str()),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/player"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"<script>file:"https://cdn.example/a/master.m3u8"</script>"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let extractor = SuperembedExtractor::new(Client::new());
        let result = extractor
            .resolve(&format!("{}/srcrcp/abc", server.uri()), referrer)
            .await
            .unwrap();

        assert_eq!(result.first_stream(), Some("https://cdn.example/a/master.m3u8"));
    }

    #[tokio::test]
    async fn test_resolve_without_streams() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/player"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<p>removed</p>"))
            .mount(&server)
            .await;

        let extractor = SuperembedExtractor::new(Client::new());
        let result = extractor
            .resolve(&format!("{}/player", server.uri()), "https://rcp.vidsrc.me/")
            .await;

        assert!(matches!(result, Err(ExtractorError::NoStreams(_))));
    }
}
