use std::collections::HashMap;

use serde::Deserialize;

/// Source display name -> routing token, scraped fresh from one embed page.
pub type ServerMap = HashMap<String, String>;

/// Input of one pipeline run.
#[derive(Debug, Clone, Deserialize)]
pub struct ResolutionRequest {
    pub source_name: String,
    /// IMDb or TMDB id.
    pub media_id: String,
    #[serde(default)]
    pub season: Option<String>,
    #[serde(default)]
    pub episode: Option<String>,
}

impl ResolutionRequest {
    pub fn movie(source_name: impl Into<String>, media_id: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            media_id: media_id.into(),
            season: None,
            episode: None,
        }
    }

    pub fn episode(
        source_name: impl Into<String>,
        media_id: impl Into<String>,
        season: impl Into<String>,
        episode: impl Into<String>,
    ) -> Self {
        Self {
            source_name: source_name.into(),
            media_id: media_id.into(),
            season: Some(season.into()),
            episode: Some(episode.into()),
        }
    }

    /// `(season, episode)` when both are present and non-empty.
    ///
    /// Only one of the two counts as no episode info at all.
    pub fn season_episode(&self) -> Option<(&str, &str)> {
        match (self.season.as_deref(), self.episode.as_deref()) {
            (Some(s), Some(e)) if !s.is_empty() && !e.is_empty() => Some((s, e)),
            _ => None,
        }
    }
}

/// Encoded payload and seed scraped from a routing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeInputs {
    pub encoded: String,
    pub seed: String,
}

/// The decoded source URL together with the page that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSource {
    pub url: String,
    pub referrer: String,
}
