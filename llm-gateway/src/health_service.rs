//! Health checks for the chat providers.
//!
//! Lightweight probes suitable for a `/health` endpoint:
//! - Ollama: `GET {endpoint}/api/tags` (best-effort model existence check)
//! - Groq:   `GET {endpoint}/openai/v1/models` with Bearer auth
//!
//! [`HealthService::check`] is resilient and never fails (probe errors are
//! mapped into `ok = false` with a message). The provider-specific `try_*`
//! probes return strict `Result`s.

use std::time::{Duration, Instant};

use reqwest::header;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{
    config::{chat_model_config::ChatModelConfig, chat_provider::ChatProvider},
    error_handler::{LlmGatewayError, ProviderError, ProviderErrorKind, make_snippet},
};

/// A serializable health snapshot for a single provider/config.
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    /// Backend name (e.g. "Groq", "Ollama").
    pub provider: String,
    /// Target endpoint base URL.
    pub endpoint: String,
    /// Model the probe looked for, if any.
    pub model: Option<String>,
    /// Overall health flag.
    pub ok: bool,
    /// Measured HTTP latency of the probe in milliseconds.
    pub latency_ms: u128,
    /// Short human-readable message with details.
    pub message: String,
}

/// A health checker reusing a single HTTP client.
pub struct HealthService {
    client: reqwest::Client,
}

impl HealthService {
    /// Creates a new health service with an optional probe timeout (seconds).
    ///
    /// # Errors
    /// [`LlmGatewayError::HttpTransport`] if the HTTP client cannot be built.
    pub fn new(timeout_secs: Option<u64>) -> Result<Self, LlmGatewayError> {
        let timeout = Duration::from_secs(timeout_secs.unwrap_or(10));
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Probes the provider named by `cfg`. Never fails; errors become
    /// `ok = false` snapshots.
    pub async fn check(&self, cfg: &ChatModelConfig) -> HealthStatus {
        let started = Instant::now();
        let result = match cfg.provider {
            ChatProvider::Ollama => self.try_ollama(cfg).await,
            ChatProvider::Groq => self.try_groq(cfg).await,
        };
        let latency_ms = started.elapsed().as_millis();

        match result {
            Ok(message) => HealthStatus {
                provider: format!("{:?}", cfg.provider),
                endpoint: cfg.endpoint.clone(),
                model: Some(cfg.model.clone()),
                ok: true,
                latency_ms,
                message,
            },
            Err(e) => {
                warn!(provider = ?cfg.provider, error = %e, "health probe failed");
                HealthStatus {
                    provider: format!("{:?}", cfg.provider),
                    endpoint: cfg.endpoint.clone(),
                    model: Some(cfg.model.clone()),
                    ok: false,
                    latency_ms,
                    message: e.to_string(),
                }
            }
        }
    }

    /// Strict Ollama probe: lists local tags and looks for the model.
    ///
    /// # Errors
    /// [`ProviderErrorKind::HttpStatus`] / [`ProviderErrorKind::Decode`] /
    /// transport errors.
    async fn try_ollama(&self, cfg: &ChatModelConfig) -> Result<String, LlmGatewayError> {
        let url = format!("{}/api/tags", cfg.endpoint.trim_end_matches('/'));
        debug!("GET {}", url);

        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(ProviderError::new(
                ChatProvider::Ollama,
                ProviderErrorKind::HttpStatus {
                    status,
                    url,
                    snippet: make_snippet(&text),
                },
            )
            .into());
        }

        let tags: OllamaTags = resp.json().await.map_err(|e| {
            ProviderError::new(
                ChatProvider::Ollama,
                ProviderErrorKind::Decode(format!("serde error: {e}")),
            )
        })?;

        let known = tags.models.iter().any(|m| m.name.starts_with(&cfg.model));
        Ok(if known {
            format!("model `{}` available", cfg.model)
        } else {
            // Reachable but the model is not pulled; still healthy transport-wise.
            format!("reachable; model `{}` not in local tags", cfg.model)
        })
    }

    /// Strict Groq probe: lists models with Bearer auth.
    ///
    /// # Errors
    /// [`ProviderErrorKind::MissingApiKey`] /
    /// [`ProviderErrorKind::HttpStatus`] / transport errors.
    async fn try_groq(&self, cfg: &ChatModelConfig) -> Result<String, LlmGatewayError> {
        let api_key = cfg.api_key.as_deref().ok_or_else(|| {
            ProviderError::new(ChatProvider::Groq, ProviderErrorKind::MissingApiKey)
        })?;

        let url = format!("{}/openai/v1/models", cfg.endpoint.trim_end_matches('/'));
        debug!("GET {}", url);

        let resp = self
            .client
            .get(&url)
            .header(header::AUTHORIZATION, format!("Bearer {}", api_key))
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(ProviderError::new(
                ChatProvider::Groq,
                ProviderErrorKind::HttpStatus {
                    status,
                    url,
                    snippet: make_snippet(&text),
                },
            )
            .into());
        }

        Ok("authenticated".to_string())
    }
}

/// Response shape of `GET /api/tags` (subset).
#[derive(Debug, Deserialize)]
struct OllamaTags {
    #[serde(default)]
    models: Vec<OllamaTag>,
}

#[derive(Debug, Deserialize)]
struct OllamaTag {
    name: String,
}
