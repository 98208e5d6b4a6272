use crate::domain::models::{Envelope, ProbeQuery, QueryParam, Settings};
use std::collections::BTreeMap;
use std::time::Duration;

#[derive(thiserror::Error, Debug)]
pub enum ProbeError {
    /// Carries no request URL; the query string holds the API key.
    #[error("{0}")]
    Network(#[source] reqwest::Error),
    #[error("{0}")]
    Unexpected(String),
}

/// Status, headers and body of one GET, before any decoding.
#[derive(Debug)]
pub struct RawResponse {
    pub status: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl RawResponse {
    pub fn envelope(&self) -> Result<Envelope, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

pub fn endpoint(settings: &Settings) -> String {
    format!(
        "{}/{}",
        settings.base_url.trim_end_matches('/'),
        settings.resource_id
    )
}

pub fn query_pairs(settings: &Settings, query: &ProbeQuery) -> Vec<(String, String)> {
    let mut pairs = vec![
        ("api-key".to_string(), settings.api_key.clone()),
        ("format".to_string(), "json".to_string()),
        ("limit".to_string(), query.limit.to_string()),
        ("offset".to_string(), query.offset.to_string()),
    ];
    for (field, value) in &query.filters {
        pairs.push((format!("filters[{}]", field), value.clone()));
    }
    if let Some(select) = &query.select {
        pairs.push(("select".to_string(), select.clone()));
    }
    if let Some(order) = &query.order {
        pairs.push(("order".to_string(), order.clone()));
    }
    pairs
}

/// Query pairs safe to print or log.
pub fn display_params(settings: &Settings, query: &ProbeQuery) -> Vec<QueryParam> {
    query_pairs(settings, query)
        .into_iter()
        .map(|(name, value)| {
            let value = if name == "api-key" {
                mask_key(&value)
            } else {
                value
            };
            QueryParam { name, value }
        })
        .collect()
}

pub struct MandiClient {
    settings: Settings,
    client: reqwest::blocking::Client,
}

impl MandiClient {
    pub fn new(settings: &Settings) -> Result<Self, ProbeError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .user_agent(concat!("mandi-probe/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ProbeError::Unexpected(format!("failed to build http client: {}", e)))?;
        Ok(Self {
            settings: settings.clone(),
            client,
        })
    }

    pub fn fetch(&self, query: &ProbeQuery) -> Result<RawResponse, ProbeError> {
        let url = endpoint(&self.settings);
        tracing::debug!(url = %url, filters = %query.describe_filters(), "sending request");
        let resp = self
            .client
            .get(&url)
            .query(&query_pairs(&self.settings, query))
            .send()
            .map_err(network)?;

        let status = resp.status().as_u16();
        let headers = collect_headers(resp.headers());
        let body = resp.text().map_err(network)?;
        tracing::info!(status, bytes = body.len(), "response received");
        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

fn network(e: reqwest::Error) -> ProbeError {
    ProbeError::Network(e.without_url())
}

/// `Display` of an error followed by its source chain, `: `-separated.
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !out.contains(&text) {
            out.push_str(": ");
            out.push_str(&text);
        }
        source = cause.source();
    }
    out
}

fn collect_headers(map: &reqwest::header::HeaderMap) -> BTreeMap<String, String> {
    let mut out: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in map {
        let value = String::from_utf8_lossy(value.as_bytes()).to_string();
        out.entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert(value);
    }
    out
}

/// Keeps the first six characters of a key.
pub fn mask_key(key: &str) -> String {
    if key.chars().count() <= 6 {
        return "*".repeat(key.chars().count());
    }
    let head: String = key.chars().take(6).collect();
    format!("{}...", head)
}
