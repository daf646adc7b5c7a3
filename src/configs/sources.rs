use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::common::HttpClient;

/// Endpoints of the aggregator site and how to talk to it.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct VidSrcConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_rcp_url")]
    pub rcp_url: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default = "HttpClient::default_user_agent")]
    pub user_agent: String,
}

impl VidSrcConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for VidSrcConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            rcp_url: default_rcp_url(),
            request_timeout_secs: default_request_timeout_secs(),
            user_agent: HttpClient::default_user_agent(),
        }
    }
}

fn default_base_url() -> String {
    "https://vidsrc.me".to_string()
}

fn default_rcp_url() -> String {
    "https://rcp.vidsrc.me/rcp".to_string()
}

fn default_request_timeout_secs() -> u64 {
    HttpClient::default_timeout().as_secs()
}

/// Backend extractors that may be dispatched to.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ExtractorsConfig {
    #[serde(default = "enabled")]
    pub vidsrcpro: bool,
    #[serde(default = "enabled")]
    pub superembed: bool,
}

impl Default for ExtractorsConfig {
    fn default() -> Self {
        Self {
            vidsrcpro: true,
            superembed: true,
        }
    }
}

fn enabled() -> bool {
    true
}
