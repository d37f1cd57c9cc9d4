//! Single-shot JSON GET/POST helpers.
//!
//! Each call builds a fresh client, sends one request, reads the body as
//! text and parses it as JSON. There are no retries and no timeout; network
//! and parse failures are returned to the caller as-is.

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use url::Url;

const APPLICATION_JSON: &str = "application/json";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One `field=value` query pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParam {
    pub field: String,
    pub value: String,
}

impl QueryParam {
    pub fn new(field: impl Into<String>, value: impl ToString) -> Self {
        Self {
            field: field.into(),
            value: value.to_string(),
        }
    }
}

/// `host/endpoint`, with `query` form-encoded when non-empty.
pub fn build_target(host: &str, endpoint: &str, query: &[QueryParam]) -> Result<Url, FetchError> {
    let mut target = Url::parse(&format!("{host}/{endpoint}"))?;
    if !query.is_empty() {
        target
            .query_pairs_mut()
            .extend_pairs(query.iter().map(|p| (p.field.as_str(), p.value.as_str())));
    }
    Ok(target)
}

fn parse_body<T: DeserializeOwned>(text: &str, log: bool) -> Result<T, FetchError> {
    if log {
        tracing::info!(raw = %text, "Raw response");
    }
    let json: Value = serde_json::from_str(text)?;
    if log {
        tracing::info!(parsed = %json, "Parsed JSON");
    }
    Ok(serde_json::from_value(json)?)
}

/// GET `host/endpoint?query` and parse the body as JSON.
///
/// Failures are always logged before being returned.
pub async fn pro_fetch_get<T: DeserializeOwned>(
    host: &str,
    endpoint: &str,
    query: &[QueryParam],
    log: bool,
) -> Result<T, FetchError> {
    let result: Result<T, FetchError> = async {
        let target = build_target(host, endpoint, query)?;
        let text = Client::new()
            .get(target)
            .header(ACCEPT, APPLICATION_JSON)
            .send()
            .await?
            .text()
            .await?;
        parse_body(&text, log)
    }
    .await;

    if let Err(e) = &result {
        tracing::error!(error = %e, "Failed to fetch or parse JSON");
    }
    result
}

/// POST `body` as JSON to `host/endpoint` and parse the response as JSON.
///
/// Failures are logged only when `log` is set.
pub async fn pro_fetch_post<B: Serialize + ?Sized, T: DeserializeOwned>(
    host: &str,
    endpoint: &str,
    body: &B,
    log: bool,
) -> Result<T, FetchError> {
    let result: Result<T, FetchError> = async {
        let target = build_target(host, endpoint, &[])?;
        let payload = serde_json::to_vec(body)?;
        let text = Client::new()
            .post(target)
            .header(ACCEPT, APPLICATION_JSON)
            .header(CONTENT_TYPE, APPLICATION_JSON)
            .body(payload)
            .send()
            .await?
            .text()
            .await?;
        parse_body(&text, log)
    }
    .await;

    if log {
        if let Err(e) = &result {
            tracing::error!(error = %e, "Failed to fetch or parse JSON");
        }
    }
    result
}
