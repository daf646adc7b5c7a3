use reqwest::{Client, StatusCode, Url, header::HeaderMap};
use tracing::trace;

use crate::{common::HttpClient, configs::VidSrcConfig};

/// One HTTP response, fully read.
#[derive(Debug)]
pub struct FetchedPage {
    pub status: StatusCode,
    /// URL after any followed redirects.
    pub final_url: Url,
    pub headers: HeaderMap,
    pub body: String,
}

impl FetchedPage {
    /// `https://{host}/` of the resolved URL, used as the next hop's referrer.
    pub fn origin_referrer(&self) -> String {
        format!("https://{}/", self.final_url.host_str().unwrap_or_default())
    }
}

/// Single-attempt GETs with an optional `Referer`.
///
/// Holds two clients because redirect policy is fixed per reqwest client.
#[derive(Clone)]
pub struct PageFetcher {
    client: Client,
    no_redirect: Client,
}

impl PageFetcher {
    pub fn new(config: &VidSrcConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: HttpClient::new(&config.user_agent, config.request_timeout())?,
            no_redirect: HttpClient::new_no_redirect(&config.user_agent, config.request_timeout())?,
        })
    }

    /// The redirect-following client, shared with backend extractors.
    pub fn client(&self) -> &Client {
        &self.client
    }

    pub async fn fetch(
        &self,
        url: &str,
        referrer: Option<&str>,
        follow_redirects: bool,
    ) -> Result<FetchedPage, reqwest::Error> {
        let client = if follow_redirects {
            &self.client
        } else {
            &self.no_redirect
        };

        let mut request = client.get(url);
        if let Some(referrer) = referrer {
            request = request.header(reqwest::header::REFERER, referrer);
        }

        let resp = request.send().await?;
        let status = resp.status();
        let final_url = resp.url().clone();
        let headers = resp.headers().clone();
        let body = resp.text().await?;

        trace!("GET {} -> {} ({} bytes)", url, status, body.len());

        Ok(FetchedPage {
            status,
            final_url,
            headers,
            body,
        })
    }
}
