use crate::api::{self, error_chain, MandiClient, ProbeError, RawResponse};
use crate::domain::constants::{
    DEFAULT_COMMODITY, FILTER_LIMIT, FILTER_PREVIEW, PLAIN_LIMIT, PLAIN_PREVIEW,
};
use crate::domain::models::{ProbeOutcome, ProbeQuery, ProbeReport, Settings};

pub const PLAIN_PROBE: &str = "plain";
pub const FILTERED_PROBE: &str = "filtered";

pub fn default_plain_query() -> ProbeQuery {
    ProbeQuery::new(PLAIN_LIMIT, 0)
}

pub fn default_filtered_query() -> ProbeQuery {
    ProbeQuery::new(FILTER_LIMIT, 0).filter("commodity", DEFAULT_COMMODITY)
}

/// One GET against the resource, folded into a report. Never fails:
/// every error becomes an outcome variant.
pub fn run_probe(
    settings: &Settings,
    name: &str,
    query: &ProbeQuery,
    preview: usize,
) -> ProbeReport {
    let outcome = match MandiClient::new(settings).and_then(|c| c.fetch(query)) {
        Ok(raw) => classify(raw, preview),
        Err(e) => outcome_for_error(e),
    };
    ProbeReport {
        name: name.to_string(),
        url: api::endpoint(settings),
        filters: query.describe_filters(),
        params: api::display_params(settings, query),
        outcome,
    }
}

pub fn run_default_probes(settings: &Settings) -> Vec<ProbeReport> {
    vec![
        run_probe(settings, PLAIN_PROBE, &default_plain_query(), PLAIN_PREVIEW),
        run_probe(
            settings,
            FILTERED_PROBE,
            &default_filtered_query(),
            FILTER_PREVIEW,
        ),
    ]
}

fn classify(raw: RawResponse, preview: usize) -> ProbeOutcome {
    if raw.status != 200 {
        tracing::warn!(status = raw.status, "non-200 response");
        return ProbeOutcome::HttpError {
            status_code: raw.status,
            headers: raw.headers,
            body: raw.body,
        };
    }
    match raw.envelope() {
        Ok(envelope) => {
            let records_returned = envelope.records.len();
            let preview = envelope.records.into_iter().take(preview).collect();
            ProbeOutcome::Success {
                status_code: raw.status,
                headers: raw.headers,
                total: envelope.total,
                count: envelope.count,
                api_status: envelope.status,
                records_returned,
                preview,
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "response body is not a JSON envelope");
            ProbeOutcome::DecodeError {
                status_code: raw.status,
                headers: raw.headers,
                message: e.to_string(),
                body: raw.body,
            }
        }
    }
}

fn outcome_for_error(err: ProbeError) -> ProbeOutcome {
    match err {
        ProbeError::Network(e) => {
            let message = error_chain(&e);
            tracing::warn!(error = %message, timeout = e.is_timeout(), "request failed");
            ProbeOutcome::NetworkError { message }
        }
        ProbeError::Unexpected(message) => {
            tracing::warn!(%message, "probe aborted");
            ProbeOutcome::UnexpectedError { message }
        }
    }
}

/// One line per probe, then static notes about the data source.
pub fn summarize(settings: &Settings, reports: &[ProbeReport]) -> Vec<String> {
    let mut lines: Vec<String> = reports
        .iter()
        .map(|r| {
            if r.filters == "none" {
                format!("- {} fetch: {}", r.name, r.outcome.label())
            } else {
                format!("- {} fetch ({}): {}", r.name, r.filters, r.outcome.label())
            }
        })
        .collect();
    lines.push(format!("- data source: {}", api::endpoint(settings)));
    lines.push("- prices are quoted in rupees per quintal (100 kg)".to_string());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn raw(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            headers: BTreeMap::new(),
            body: body.to_string(),
        }
    }

    fn settings() -> Settings {
        Settings {
            base_url: "http://127.0.0.1:1".to_string(),
            resource_id: "res".to_string(),
            api_key: "abcdefghijk".to_string(),
            timeout_secs: 2,
        }
    }

    #[test]
    fn success_keeps_bounded_preview() {
        let body = r#"{"total": 40, "count": 4, "status": "ok",
            "records": [{"commodity":"A"},{"commodity":"B"},{"commodity":"C"},{"commodity":"D"}]}"#;
        match classify(raw(200, body), 3) {
            ProbeOutcome::Success {
                records_returned,
                preview,
                ..
            } => {
                assert_eq!(records_returned, 4);
                assert_eq!(preview.len(), 3);
                assert_eq!(preview[2].field("commodity"), "C");
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn preview_shorter_than_limit_when_few_records() {
        match classify(raw(200, r#"{"records":[{"commodity":"A"}]}"#), 3) {
            ProbeOutcome::Success { preview, .. } => assert_eq!(preview.len(), 1),
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn non_200_is_not_decoded() {
        match classify(raw(403, "{\"error\": \"Invalid key\"}"), 3) {
            ProbeOutcome::HttpError {
                status_code, body, ..
            } => {
                assert_eq!(status_code, 403);
                assert!(body.contains("Invalid key"));
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn garbage_body_is_a_decode_error() {
        match classify(raw(200, "not json"), 3) {
            ProbeOutcome::DecodeError { body, .. } => assert_eq!(body, "not json"),
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn unreachable_host_reports_network_error() {
        let report = run_probe(&settings(), PLAIN_PROBE, &default_plain_query(), 3);
        assert_eq!(report.url, "http://127.0.0.1:1/res");
        assert_eq!(report.params[0].value, "abcdef...");
        match report.outcome {
            ProbeOutcome::NetworkError { message } => {
                assert!(!message.contains("abcdefghijk"), "leaked key: {}", message);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn summary_names_each_probe_and_source() {
        let reports = vec![
            ProbeReport {
                name: PLAIN_PROBE.to_string(),
                url: String::new(),
                filters: "none".to_string(),
                params: vec![],
                outcome: ProbeOutcome::NetworkError {
                    message: "down".to_string(),
                },
            },
            ProbeReport {
                name: FILTERED_PROBE.to_string(),
                url: String::new(),
                filters: "commodity=Wheat".to_string(),
                params: vec![],
                outcome: ProbeOutcome::HttpError {
                    status_code: 429,
                    headers: BTreeMap::new(),
                    body: String::new(),
                },
            },
        ];
        let lines = summarize(&settings(), &reports);
        assert_eq!(lines[0], "- plain fetch: network error");
        assert_eq!(lines[1], "- filtered fetch (commodity=Wheat): http error 429");
        assert_eq!(lines[2], "- data source: http://127.0.0.1:1/res");
        assert_eq!(lines.len(), 4);
    }
}
