use serde::{Deserialize, Serialize};

use crate::common::types::AnyResult;
use crate::configs::*;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub logging: Option<LoggingConfig>,
    #[serde(default)]
    pub vidsrc: VidSrcConfig,
    #[serde(default)]
    pub extractors: ExtractorsConfig,
}

impl Config {
    /// Loads `config.toml`, then `config.default.toml`, then built-in defaults.
    ///
    /// Runs before the logger exists, so progress goes to stdout directly.
    pub fn load() -> AnyResult<Self> {
        let config_path = if std::path::Path::new("config.toml").exists() {
            "config.toml"
        } else if std::path::Path::new("config.default.toml").exists() {
            "config.default.toml"
        } else {
            println!("No config.toml or config.default.toml found, using defaults");
            return Ok(Self::default());
        };

        println!("Loading configuration from: {}", config_path);

        let config_str = std::fs::read_to_string(config_path)?;
        Self::parse(&config_str)
    }

    pub fn parse(config_str: &str) -> AnyResult<Self> {
        let config: Config = toml::from_str(config_str)?;
        Ok(config)
    }
}
