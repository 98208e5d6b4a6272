use crate::domain::constants::{
    DEFAULT_COMMODITY, FILTER_LIMIT, FILTER_PREVIEW, PLAIN_LIMIT, PLAIN_PREVIEW,
};
use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "mandi-probe",
    version,
    about = "Smoke test for the data.gov.in mandi prices API"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        env = "MANDI_PROBE_BASE_URL",
        help = "API base URL (resource id is appended)"
    )]
    pub base_url: Option<String>,
    #[arg(
        long,
        global = true,
        env = "MANDI_PROBE_RESOURCE",
        help = "Dataset resource id"
    )]
    pub resource: Option<String>,
    #[arg(
        long,
        global = true,
        env = "MANDI_API_KEY",
        hide_env_values = true,
        help = "data.gov.in API key (defaults to the public sample key)"
    )]
    pub api_key: Option<String>,
    #[arg(long, global = true, help = "Request timeout in seconds")]
    pub timeout_secs: Option<u64>,
    #[arg(short, long, global = true, action = ArgAction::Count, help = "Increase log verbosity")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Plain probe, filtered probe and summary (default)
    All,
    /// Unfiltered fetch with the detailed report
    Fetch {
        #[arg(long, default_value_t = PLAIN_LIMIT)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        offset: u32,
        #[arg(long, default_value_t = PLAIN_PREVIEW, help = "Records to print")]
        show: usize,
        #[command(flatten)]
        shape: ShapeArgs,
    },
    /// Filtered fetch with the compact report
    Filter {
        #[arg(long, default_value = DEFAULT_COMMODITY)]
        commodity: String,
        #[arg(long)]
        state: Option<String>,
        #[arg(long)]
        district: Option<String>,
        #[arg(long)]
        market: Option<String>,
        #[arg(long, default_value_t = FILTER_LIMIT)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        offset: u32,
        #[arg(long, default_value_t = FILTER_PREVIEW, help = "Records to print")]
        show: usize,
        #[command(flatten)]
        shape: ShapeArgs,
    },
}

/// Response shaping passed through to the API untouched.
#[derive(Args, Debug, Default)]
pub struct ShapeArgs {
    #[arg(long, help = "Comma-separated fields to return (`select`)")]
    pub select: Option<String>,
    #[arg(long, help = "Sort field (`order`)")]
    pub order: Option<String>,
}
