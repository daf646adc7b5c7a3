use thiserror::Error;

/// Terminal failure of one resolution run.
///
/// Every variant aborts the run; nothing is retried. The REST layer collapses
/// all of them into a single generic error body, so the detail here exists
/// for logs and for callers embedding the resolver as a library.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The embed or routing page answered with something other than 200.
    #[error("upstream returned {status} for {url}")]
    UpstreamUnavailable { url: String, status: u16 },

    /// The requested source is not listed on the embed page.
    #[error("no source named \"{requested}\" (available: {})", .available.join(", "))]
    SourceNotFound {
        requested: String,
        available: Vec<String>,
    },

    /// Expected markup or attribute missing, or the payload could not be decoded.
    #[error("malformed page at {url}: {reason}")]
    MalformedPage { url: String, reason: String },

    /// The redirect probe did not answer with a 302 carrying a location.
    #[error("no redirect found for {url} (status {status})")]
    RedirectNotFound { url: String, status: u16 },

    /// The final host is not served by any enabled backend extractor.
    #[error("no extractor handles {host}")]
    NoMatchingExtractor { host: String },

    #[error("extractor failed: {0}")]
    ExtractorFailure(#[from] ExtractorError),

    /// Transport-level failure (timeout, refused connection, broken body).
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
}

/// Failure inside a backend extractor. Opaque to the pipeline.
#[derive(Debug, Error)]
pub enum ExtractorError {
    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("stream payload not found: {0}")]
    MissingPayload(&'static str),

    #[error("stream payload could not be decoded: {0}")]
    InvalidPayload(String),

    #[error("no streams found at {0}")]
    NoStreams(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
