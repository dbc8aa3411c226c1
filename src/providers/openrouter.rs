use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::Config;
use crate::credential::ApiKey;
use crate::error::CompletionError;
use crate::providers::http_errors::completion_request_error;

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    error: Option<ApiErrorBody>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

fn completions_url(base_url: &str) -> String {
    format!("{}/completions", base_url.trim_end_matches('/'))
}

fn first_choice_text(body: &str) -> Result<String, CompletionError> {
    let parsed: CompletionResponse = serde_json::from_str(body)?;
    if let Some(error) = parsed.error {
        return Err(CompletionError::Api(error.message));
    }
    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.text)
        .ok_or(CompletionError::EmptyCompletion)
}

pub async fn complete(
    client: &Client,
    cfg: &Config,
    api_key: &ApiKey,
    prompt: &str,
) -> Result<String, CompletionError> {
    let api_url = completions_url(&cfg.api_base_url);
    let body = CompletionRequest {
        model: &cfg.model,
        prompt,
    };
    debug!(
        api_url = %api_url,
        model = %cfg.model,
        prompt_len = prompt.len(),
        "sending completion request"
    );

    let response = client
        .post(&api_url)
        .bearer_auth(api_key.expose())
        .json(&body)
        .send()
        .await
        .map_err(|err| {
            warn!(
                api_url = %api_url,
                model = %cfg.model,
                error = %err,
                "completion request failed"
            );
            completion_request_error(err, &api_url)
        })?;

    let status = response.status();
    let response_body = response
        .text()
        .await
        .map_err(|err| completion_request_error(err, &api_url))?;

    if !status.is_success() {
        warn!(
            api_url = %api_url,
            model = %cfg.model,
            status = %status,
            response_body_len = response_body.len(),
            "completion API returned non-success status"
        );
        return Err(CompletionError::Status {
            status: status.as_u16(),
            body: response_body,
        });
    }

    let text = first_choice_text(&response_body)?;
    debug!(
        model = %cfg.model,
        response_len = text.len(),
        "received completion"
    );
    Ok(text)
}
