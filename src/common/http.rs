use std::time::Duration;

use reqwest::{Client, Error, redirect};

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/134.0.0.0 Safari/537.36";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub struct HttpClient;

impl HttpClient {
    pub fn default_user_agent() -> String {
        DEFAULT_USER_AGENT.to_string()
    }

    pub fn default_timeout() -> Duration {
        Duration::from_secs(DEFAULT_TIMEOUT_SECS)
    }

    /// Client that follows redirects (reqwest default policy).
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Client, Error> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
    }

    /// Client that hands 3xx responses back to the caller untouched.
    pub fn new_no_redirect(user_agent: &str, timeout: Duration) -> Result<Client, Error> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .redirect(redirect::Policy::none())
            .build()
    }
}
