use crate::domain::constants::NOT_AVAILABLE;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Response envelope returned by the resource endpoint.
///
/// The portal does not publish a schema, so every field is optional and
/// scalars are kept as raw JSON values. Every entry of `records` counts,
/// non-object entries become empty records.
#[derive(Debug, Deserialize, Default)]
pub struct Envelope {
    #[serde(default)]
    pub total: Option<Value>,
    #[serde(default)]
    pub count: Option<Value>,
    #[serde(default)]
    pub status: Option<Value>,
    #[serde(default, deserialize_with = "lenient_records")]
    pub records: Vec<Record>,
}

fn lenient_records<'de, D>(deserializer: D) -> Result<Vec<Record>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Array(items)) => items
            .into_iter()
            .map(|item| match item {
                Value::Object(fields) => Record(fields),
                _ => Record::default(),
            })
            .collect(),
        _ => Vec::new(),
    })
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Record(pub Map<String, Value>);

impl Record {
    /// Field rendered for display, `N/A` when missing or null.
    pub fn field(&self, key: &str) -> String {
        display_or_na(self.0.get(key))
    }
}

/// Strings print bare; everything else prints as JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn display_or_na(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => NOT_AVAILABLE.to_string(),
        Some(v) => display_value(v),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProbeQuery {
    pub limit: u32,
    pub offset: u32,
    pub filters: Vec<(String, String)>,
    pub select: Option<String>,
    pub order: Option<String>,
}

impl ProbeQuery {
    pub fn new(limit: u32, offset: u32) -> Self {
        Self {
            limit,
            offset,
            filters: Vec::new(),
            select: None,
            order: None,
        }
    }

    /// Comma-separated field list, passed through as `select`.
    pub fn select(mut self, fields: &str) -> Self {
        self.select = Some(fields.to_string());
        self
    }

    pub fn order(mut self, field: &str) -> Self {
        self.order = Some(field.to_string());
        self
    }

    pub fn filter(mut self, field: &str, value: &str) -> Self {
        self.filters.push((field.to_string(), value.to_string()));
        self
    }

    /// `commodity=Wheat, state=Punjab`, or `none`.
    pub fn describe_filters(&self) -> String {
        if self.filters.is_empty() {
            return "none".to_string();
        }
        self.filters
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct QueryParam {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ProbeOutcome {
    Success {
        status_code: u16,
        headers: BTreeMap<String, String>,
        total: Option<Value>,
        count: Option<Value>,
        api_status: Option<Value>,
        records_returned: usize,
        preview: Vec<Record>,
    },
    HttpError {
        status_code: u16,
        headers: BTreeMap<String, String>,
        body: String,
    },
    NetworkError {
        message: String,
    },
    DecodeError {
        status_code: u16,
        headers: BTreeMap<String, String>,
        message: String,
        body: String,
    },
    UnexpectedError {
        message: String,
    },
}

impl ProbeOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ProbeOutcome::Success { .. })
    }

    pub fn label(&self) -> String {
        match self {
            ProbeOutcome::Success {
                records_returned,
                total,
                ..
            } => format!(
                "ok, {} records returned of {}",
                records_returned,
                display_or_na(total.as_ref())
            ),
            ProbeOutcome::HttpError { status_code, .. } => format!("http error {}", status_code),
            ProbeOutcome::NetworkError { .. } => "network error".to_string(),
            ProbeOutcome::DecodeError { .. } => "json parse error".to_string(),
            ProbeOutcome::UnexpectedError { .. } => "unexpected error".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProbeReport {
    pub name: String,
    pub url: String,
    pub filters: String,
    pub params: Vec<QueryParam>,
    pub outcome: ProbeOutcome,
}

#[derive(Debug, Serialize)]
pub struct RunReport {
    pub probes: Vec<ProbeReport>,
    pub summary: Vec<String>,
}

impl RunReport {
    pub fn all_ok(&self) -> bool {
        self.probes.iter().all(|p| p.outcome.is_success())
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub resource_id: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// Effective connection settings after merging flags, env and config file.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub base_url: String,
    pub resource_id: String,
    pub api_key: String,
    pub timeout_secs: u64,
}
