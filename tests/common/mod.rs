#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::{json, Value};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use tokio::runtime::Runtime;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const RESOURCE: &str = "mandi-test";

pub struct TestEnv {
    pub server: MockServer,
    rt: Runtime,
    _tmp: TempDir,
    pub home: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");

        let rt = Runtime::new().expect("tokio runtime");
        let server = rt.block_on(MockServer::start());

        Self {
            server,
            rt,
            _tmp: tmp,
            home,
        }
    }

    pub fn mount(&self, mock: Mock) {
        self.rt.block_on(mock.mount(&self.server));
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("mandi-probe");
        cmd.env("HOME", &self.home)
            .env("MANDI_PROBE_BASE_URL", self.server.uri())
            .env("MANDI_PROBE_RESOURCE", RESOURCE)
            .env_remove("MANDI_API_KEY")
            .env_remove("MANDI_PROBE_LOG");
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn write_config(&self, body: &str) {
        let dir = self.home.join(".config/mandi-probe");
        fs::create_dir_all(&dir).expect("create config dir");
        fs::write(dir.join("config.toml"), body).expect("write config");
    }
}

pub fn resource_path() -> String {
    format!("/{}", RESOURCE)
}

/// Matches the unfiltered probe (limit 10).
pub fn plain_mock(response: ResponseTemplate) -> Mock {
    Mock::given(method("GET"))
        .and(path(resource_path()))
        .and(query_param("format", "json"))
        .and(query_param("limit", "10"))
        .and(query_param("offset", "0"))
        .respond_with(response)
}

/// Matches the wheat-filtered probe (limit 5).
pub fn wheat_mock(response: ResponseTemplate) -> Mock {
    Mock::given(method("GET"))
        .and(path(resource_path()))
        .and(query_param("limit", "5"))
        .and(query_param("filters[commodity]", "Wheat"))
        .respond_with(response)
}

pub fn record(commodity: &str, variety: &str, market: &str, state: &str, modal: u32) -> Value {
    json!({
        "state": state,
        "district": "Ludhiana",
        "market": market,
        "commodity": commodity,
        "variety": variety,
        "arrival_date": "18/10/2026",
        "min_price": (modal - 50).to_string(),
        "max_price": (modal + 50).to_string(),
        "modal_price": modal.to_string()
    })
}

pub fn envelope(total: u64, records: Vec<Value>) -> Value {
    let count = records.len();
    json!({
        "index_name": "9ef84268-d588-465a-a308-a864a43d0070",
        "title": "Current Daily Price of Various Commodities from Various Markets (Mandi)",
        "status": "ok",
        "total": total,
        "count": count,
        "limit": "10",
        "offset": "0",
        "records": records
    })
}

pub fn mixed_records(n: usize) -> Vec<Value> {
    let crops = [
        ("Onion", "Red", "Lasalgaon", "Maharashtra", 1800),
        ("Tomato", "Hybrid", "Kolar", "Karnataka", 1200),
        ("Potato", "Jyoti", "Agra", "Uttar Pradesh", 1100),
        ("Rice", "Sona", "Karnal", "Haryana", 3400),
        ("Cotton", "Desi", "Rajkot", "Gujarat", 7000),
    ];
    crops
        .iter()
        .cycle()
        .take(n)
        .map(|(c, v, m, s, p)| record(c, v, m, s, *p))
        .collect()
}

pub fn json_ok(body: Value) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("x-ratelimit-remaining", "99")
        .set_body_json(body)
}
