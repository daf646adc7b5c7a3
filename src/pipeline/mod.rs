//! The vidsrc.me resolution chain.
//!
//! embed page -> routing page -> decoded source -> 302 probe -> backend extractor.
//! Each hop depends on the previous one, so stages run strictly in sequence
//! and the first failing hop ends the run.

pub mod decoder;
pub mod extract;
pub mod fetcher;
pub mod models;
pub mod resolver;

pub use decoder::{DecodeError, HexXorDecoder, TokenDecoder};
pub use fetcher::{FetchedPage, PageFetcher};
pub use models::{DecodeInputs, DecodedSource, ResolutionRequest, ServerMap};
pub use resolver::VidSrcResolver;
