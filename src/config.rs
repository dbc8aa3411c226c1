use std::env;
use std::path::PathBuf;

use crate::cli::Cli;

pub const DEFAULT_API_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_KEY_FILE: &str = "~/.openrouter.key";

/// Runtime settings for one invocation. Built once at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub model: String,
    pub task: String,
    pub only_result: bool,
    pub api_base_url: String,
    /// `None` leaves the request without a deadline.
    pub model_timeout_secs: Option<u64>,
    pub key_file: PathBuf,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Self {
        Self::from_cli_with(cli, |key| env::var(key).ok())
    }

    fn from_cli_with(cli: Cli, mut get_var: impl FnMut(&str) -> Option<String>) -> Self {
        let api_base_url = parse_api_base_url(get_var("OPENROUTER_BASE_URL").as_deref());
        let model_timeout_secs = parse_model_timeout_secs(get_var("MODEL_TIMEOUT_SECS").as_deref());
        let key_file = cli
            .key_file
            .or_else(|| non_empty(get_var("OPENROUTER_KEY_FILE").as_deref()).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_KEY_FILE));

        Self {
            model: cli.model,
            task: cli.task,
            only_result: cli.only_result,
            api_base_url,
            model_timeout_secs,
            key_file,
        }
    }
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|value| !value.is_empty())
}

fn parse_api_base_url(raw: Option<&str>) -> String {
    non_empty(raw)
        .unwrap_or(DEFAULT_API_BASE_URL)
        .trim_end_matches('/')
        .to_string()
}

fn parse_model_timeout_secs(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| *value > 0)
}
