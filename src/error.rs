use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("cannot resolve home directory for key file '{0}'")]
    NoHomeDir(String),
    #[error("failed to read API key from '{path}'")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("API key file '{0}' is empty")]
    Empty(PathBuf),
}

#[derive(Error, Debug)]
pub enum CompletionError {
    #[error(
        "Connection refused by completion API at '{url}'. \
         Check OPENROUTER_BASE_URL and network connectivity."
    )]
    ConnectionRefused { url: String },
    #[error(
        "Failed to connect to completion API at '{url}'. \
         Check OPENROUTER_BASE_URL and network connectivity."
    )]
    Connect { url: String },
    #[error(
        "Completion request timed out while calling '{url}'. \
         Increase MODEL_TIMEOUT_SECS or try another model."
    )]
    Timeout { url: String },
    #[error("Failed to call completion API at '{url}'")]
    Request { url: String, source: reqwest::Error },
    #[error("Completion request failed with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Completion API reported an error: {0}")]
    Api(String),
    #[error("Failed to parse completion response")]
    Decode(#[from] serde_json::Error),
    #[error("Model returned no completion text")]
    EmptyCompletion,
}

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Unsupported task '{0}'")]
    UnsupportedTask(String),
    #[error("failed to read stdin")]
    Input(#[source] std::io::Error),
    #[error("failed to write output")]
    Output(#[source] std::io::Error),
    #[error(transparent)]
    Completion(#[from] CompletionError),
}
