use std::sync::LazyLock;

use reqwest::header::{HeaderMap, LOCATION};
use scraper::{Html, Selector};
use thiserror::Error;

use super::models::{DecodeInputs, ServerMap};

static SERVER_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.server").unwrap());
static HIDDEN_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div#hidden").unwrap());
static BODY_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("body").unwrap());

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("missing element `{0}`")]
    MissingElement(&'static str),
    #[error("missing attribute `{attribute}` on `{element}`")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },
}

/// Collects `display name -> data-hash` from the embed page's server list.
///
/// Entries without a name or a hash are skipped; the page routinely carries
/// placeholder servers and they are not an error.
pub fn extract_server_map(html: &str) -> ServerMap {
    let document = Html::parse_document(html);
    let mut servers = ServerMap::new();

    for element in document.select(&SERVER_SELECTOR) {
        let name = element.text().collect::<String>();
        let name = name.trim();
        let token = element.value().attr("data-hash").unwrap_or_default();

        if name.is_empty() || token.is_empty() {
            continue;
        }
        servers.insert(name.to_string(), token.to_string());
    }

    servers
}

/// Reads the encoded payload (`div#hidden[data-h]`) and seed (`body[data-i]`).
///
/// Unlike the server list this is all-or-nothing.
pub fn extract_decode_inputs(html: &str) -> Result<DecodeInputs, ExtractError> {
    let document = Html::parse_document(html);

    let hidden = document
        .select(&HIDDEN_SELECTOR)
        .next()
        .ok_or(ExtractError::MissingElement("div#hidden"))?;
    let encoded = non_empty_attr(hidden.value().attr("data-h")).ok_or(
        ExtractError::MissingAttribute {
            element: "div#hidden",
            attribute: "data-h",
        },
    )?;

    let body = document
        .select(&BODY_SELECTOR)
        .next()
        .ok_or(ExtractError::MissingElement("body"))?;
    let seed = non_empty_attr(body.value().attr("data-i")).ok_or(
        ExtractError::MissingAttribute {
            element: "body",
            attribute: "data-i",
        },
    )?;

    Ok(DecodeInputs {
        encoded: encoded.to_string(),
        seed: seed.to_string(),
    })
}

pub fn extract_redirect_location(headers: &HeaderMap) -> Option<String> {
    headers
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Prefixes schema-relative URLs (`//host/path`) with `https:`.
pub fn normalize_source_url(source: &str) -> String {
    if source.starts_with("//") {
        format!("https:{}", source)
    } else {
        source.to_string()
    }
}

fn non_empty_attr(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
