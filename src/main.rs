use clap::Parser;

mod api;
mod cli;
mod commands;
mod domain;
mod logging;
mod services;

use cli::Cli;
use services::config::{load_config, resolve_settings, Overrides};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let file = load_config()?;
    let settings = resolve_settings(
        file,
        Overrides {
            base_url: cli.base_url.clone(),
            resource_id: cli.resource.clone(),
            api_key: cli.api_key.clone(),
            timeout_secs: cli.timeout_secs,
        },
    );
    tracing::debug!(
        base_url = %settings.base_url,
        resource = %settings.resource_id,
        timeout_secs = settings.timeout_secs,
        "settings resolved"
    );

    commands::handle_runtime_commands(&cli, &settings)
}
