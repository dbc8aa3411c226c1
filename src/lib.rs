pub mod cli;
pub mod config;
pub mod credential;
pub mod error;
pub mod logging;
pub mod model_gateway;
pub mod processor;
pub mod providers;
pub mod task;

use anyhow::{Context, Result};
use clap::Parser;
use reqwest::Client;
use std::io;
use std::time::Duration;
use tracing::info;

use cli::Cli;
use config::Config;
use credential::ApiKey;
use model_gateway::HostModelGateway;
use processor::Processor;

pub async fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let _log_guard = logging::init();

    let cfg = Config::from_cli(Cli::parse());
    info!(
        model = %cfg.model,
        task = %cfg.task,
        only_result = cfg.only_result,
        api_base_url = %cfg.api_base_url,
        key_file = %cfg.key_file.display(),
        "loaded runtime configuration"
    );

    let api_key = ApiKey::load(&cfg.key_file).context("Failed to load OpenRouter API key")?;
    let client = build_client(&cfg)?;
    let gateway = HostModelGateway::new(&client, &cfg, &api_key);

    Processor::new(&cfg, gateway)
        .run(io::stdin().lock(), io::stdout().lock())
        .await?;
    Ok(())
}

fn build_client(cfg: &Config) -> Result<Client> {
    let mut builder = Client::builder();
    if let Some(secs) = cfg.model_timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder.build().context("Failed to initialize HTTP client")
}
