use serde::Serialize;

pub const STREAM_ERROR: &str = "Failed to retrieve stream URL";

/// Body of `/get_streams`. Always sent with HTTP 200.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum StreamsResponse {
    Found { stream_url: String },
    Failed { error: String },
}

impl StreamsResponse {
    pub fn failed() -> Self {
        Self::Failed {
            error: STREAM_ERROR.to_string(),
        }
    }
}

/// Body of `/sources`.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct SourcesResponse {
    pub sources: Vec<&'static str>,
}
