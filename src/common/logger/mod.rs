use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub mod formatter;

pub use formatter::*;

use crate::configs::LoggingConfig;

/// Builds the filter directive string from the `[logging]` table.
///
/// Noisy HTTP internals are capped at `warn` unless the operator's own
/// `filters` override them.
pub fn filter_directives(logging: Option<&LoggingConfig>) -> String {
    let log_level = logging.and_then(|l| l.level.as_deref()).unwrap_or("info");
    let filters = logging.and_then(|l| l.filters.as_deref()).unwrap_or("");

    if filters.is_empty() {
        format!("{},hyper=warn,reqwest=warn,html5ever=error", log_level)
    } else {
        format!(
            "{},hyper=warn,reqwest=warn,html5ever=error,{}",
            log_level, filters
        )
    }
}

pub fn init(logging: Option<&LoggingConfig>) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives(logging)));

    let use_ansi = std::io::stdout().is_terminal();
    let stdout_layer = fmt::layer()
        .event_format(LogFormatter::new(use_ansi))
        .with_ansi(use_ansi);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .init();
}
