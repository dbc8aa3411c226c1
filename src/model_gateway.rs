use reqwest::Client;
use std::future::Future;
use std::pin::Pin;

use crate::config::Config;
use crate::credential::ApiKey;
use crate::error::CompletionError;
use crate::providers;

pub struct ModelGatewayRequest {
    pub prompt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelGatewayResponse {
    pub text: String,
}

pub type ModelGatewayFuture<'a> =
    Pin<Box<dyn Future<Output = Result<ModelGatewayResponse, CompletionError>> + 'a>>;

pub trait ModelGateway {
    fn complete<'a>(&'a self, request: ModelGatewayRequest) -> ModelGatewayFuture<'a>;
}

type CompletionFuture<'a> = Pin<Box<dyn Future<Output = Result<String, CompletionError>> + 'a>>;

pub(crate) trait CompletionBackend {
    fn complete<'a>(
        &'a self,
        client: &'a Client,
        cfg: &'a Config,
        api_key: &'a ApiKey,
        prompt: &'a str,
    ) -> CompletionFuture<'a>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OpenRouterBackend;

impl CompletionBackend for OpenRouterBackend {
    fn complete<'a>(
        &'a self,
        client: &'a Client,
        cfg: &'a Config,
        api_key: &'a ApiKey,
        prompt: &'a str,
    ) -> CompletionFuture<'a> {
        Box::pin(async move { providers::openrouter::complete(client, cfg, api_key, prompt).await })
    }
}

pub struct HostModelGateway<'a, B = OpenRouterBackend> {
    client: &'a Client,
    cfg: &'a Config,
    api_key: &'a ApiKey,
    backend: B,
}

impl<'a> HostModelGateway<'a, OpenRouterBackend> {
    pub fn new(client: &'a Client, cfg: &'a Config, api_key: &'a ApiKey) -> Self {
        Self {
            client,
            cfg,
            api_key,
            backend: OpenRouterBackend,
        }
    }
}

impl<'a, B> HostModelGateway<'a, B> {
    #[cfg(test)]
    fn with_backend(client: &'a Client, cfg: &'a Config, api_key: &'a ApiKey, backend: B) -> Self {
        Self {
            client,
            cfg,
            api_key,
            backend,
        }
    }
}

impl<'a, B> ModelGateway for HostModelGateway<'a, B>
where
    B: CompletionBackend,
{
    fn complete<'b>(&'b self, request: ModelGatewayRequest) -> ModelGatewayFuture<'b> {
        Box::pin(async move {
            let text = self
                .backend
                .complete(self.client, self.cfg, self.api_key, &request.prompt)
                .await?;
            Ok(ModelGatewayResponse { text })
        })
    }
}
