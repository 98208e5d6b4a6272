use crate::domain::constants::RECORD_FIELDS;
use crate::domain::models::{display_or_na, JsonOut, ProbeOutcome, ProbeReport};
use serde::Serialize;

const WIDE_RULE: usize = 60;
const NARROW_RULE: usize = 50;

pub fn print_one<T: Serialize>(
    json: bool,
    ok: bool,
    data: T,
    lines: impl Fn(&T) -> Vec<String>,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok, data })?
        );
    } else {
        for line in lines(&data) {
            println!("{}", line);
        }
    }
    Ok(())
}

pub fn banner(title: &str) -> Vec<String> {
    vec!["=".repeat(WIDE_RULE), title.to_string(), "=".repeat(WIDE_RULE)]
}

pub fn summary_block(summary: &[String]) -> Vec<String> {
    let mut out = vec![String::new(), "=".repeat(WIDE_RULE), "SUMMARY:".to_string()];
    out.extend(summary.iter().cloned());
    out.push("=".repeat(WIDE_RULE));
    out
}

/// Full report: request line, headers, envelope scalars and record blocks.
pub fn detailed_lines(report: &ProbeReport) -> Vec<String> {
    let rule = "-".repeat(NARROW_RULE);
    let params = report
        .params
        .iter()
        .map(|p| format!("{}={}", p.name, p.value))
        .collect::<Vec<_>>()
        .join(", ");
    let mut out = vec![
        "Testing mandi prices API...".to_string(),
        format!("URL: {}", report.url),
        format!("Parameters: {}", params),
        rule.clone(),
    ];

    match &report.outcome {
        ProbeOutcome::Success {
            status_code,
            headers,
            total,
            count,
            api_status,
            preview,
            ..
        } => {
            out.push(format!("Status Code: {}", status_code));
            out.extend(header_lines(headers));
            out.push(rule.clone());
            out.push("SUCCESS: mandi prices API response".to_string());
            out.push(format!("Total Records: {}", display_or_na(total.as_ref())));
            out.push(format!("Count: {}", display_or_na(count.as_ref())));
            out.push(format!("Status: {}", display_or_na(api_status.as_ref())));
            out.push(rule);
            out.push(format!("First {} records:", preview.len()));
            for (i, record) in preview.iter().enumerate() {
                out.push(String::new());
                out.push(format!("Record {}:", i + 1));
                for (key, label) in RECORD_FIELDS {
                    out.push(format!("  {}: {}", label, record.field(key)));
                }
            }
        }
        ProbeOutcome::HttpError {
            status_code,
            headers,
            body,
        } => {
            out.push(format!("Status Code: {}", status_code));
            out.extend(header_lines(headers));
            out.push(rule);
            out.push(format!("ERROR: HTTP {}", status_code));
            out.push(format!("Response: {}", body));
        }
        ProbeOutcome::DecodeError {
            status_code,
            headers,
            message,
            body,
        } => {
            out.push(format!("Status Code: {}", status_code));
            out.extend(header_lines(headers));
            out.push(rule);
            out.push(format!("JSON PARSE ERROR: {}", message));
            out.push(format!("Raw Response: {}", body));
        }
        ProbeOutcome::NetworkError { message } => {
            out.push(format!("NETWORK ERROR: {}", message));
        }
        ProbeOutcome::UnexpectedError { message } => {
            out.push(format!("UNEXPECTED ERROR: {}", message));
        }
    }
    out
}

/// Short report used for filtered probes.
pub fn compact_lines(report: &ProbeReport) -> Vec<String> {
    let label = filter_label(report);
    let mut out = vec![
        String::new(),
        format!("Testing with {} filter...", label),
    ];
    match &report.outcome {
        ProbeOutcome::Success {
            records_returned,
            preview,
            ..
        } => {
            out.push(format!("Found {} {} records", records_returned, label));
            for record in preview {
                out.push(format!(
                    "  - {} ({}) at {}, {}",
                    record.field("commodity"),
                    record.field("variety"),
                    record.field("market"),
                    record.field("state")
                ));
                out.push(format!(
                    "    Price: ₹{} per quintal",
                    record.field("modal_price")
                ));
            }
        }
        ProbeOutcome::HttpError { status_code, .. } => {
            out.push(format!("Filter test failed: {}", status_code));
        }
        ProbeOutcome::DecodeError { message, .. }
        | ProbeOutcome::NetworkError { message }
        | ProbeOutcome::UnexpectedError { message } => {
            out.push(format!("Filter test error: {}", message));
        }
    }
    out
}

fn header_lines(headers: &std::collections::BTreeMap<String, String>) -> Vec<String> {
    let mut out = vec!["Response Headers:".to_string()];
    for (name, value) in headers {
        out.push(format!("  {}: {}", name, value));
    }
    out
}

fn filter_label(report: &ProbeReport) -> String {
    let values: Vec<&str> = report
        .params
        .iter()
        .filter(|p| p.name.starts_with("filters["))
        .map(|p| p.value.as_str())
        .collect();
    if values.is_empty() {
        "no".to_string()
    } else {
        values.join(" ")
    }
}
