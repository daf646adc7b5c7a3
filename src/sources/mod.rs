pub mod manager;
pub mod plugin;
pub mod superembed;
pub mod vidsrcpro;

pub use manager::{ExtractorKind, ExtractorRegistry};
pub use plugin::{BackendExtractor, BoxedExtractor, StreamResult};
pub use superembed::SuperembedExtractor;
pub use vidsrcpro::VidSrcProExtractor;
