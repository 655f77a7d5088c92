//! Provider-agnostic gateway facade.
//!
//! [`LlmGateway`] owns one configured provider service and exposes a single
//! [`LlmGateway::chat`] call over the ordered turn history. Dispatch
//! between providers is enum-based; no trait objects.

use tracing::info;

use crate::{
    chat::ChatTurn,
    config::{
        chat_model_config::ChatModelConfig, chat_provider::ChatProvider,
        default_config::chat_config_from_env,
    },
    error_handler::LlmGatewayError,
    services::{groq_service::GroqService, ollama_service::OllamaService},
};

/// One backend client, selected by the config's provider.
enum ChatBackend {
    Groq(GroqService),
    Ollama(OllamaService),
}

/// Shared chat gateway. Construct once, wrap in `Arc`, clone the `Arc`.
pub struct LlmGateway {
    cfg: ChatModelConfig,
    backend: ChatBackend,
}

impl LlmGateway {
    /// Creates a gateway for the given config.
    ///
    /// # Errors
    /// Propagates the selected service's constructor validation
    /// ([`LlmGatewayError::Provider`], [`LlmGatewayError::HttpTransport`]).
    pub fn new(cfg: ChatModelConfig) -> Result<Self, LlmGatewayError> {
        let backend = match cfg.provider {
            ChatProvider::Groq => ChatBackend::Groq(GroqService::new(cfg.clone())?),
            ChatProvider::Ollama => ChatBackend::Ollama(OllamaService::new(cfg.clone())?),
        };

        info!(provider = ?cfg.provider, model = %cfg.model, "LlmGateway ready");

        Ok(Self { cfg, backend })
    }

    /// Creates a gateway from environment variables (`LLM_KIND` et al.).
    ///
    /// # Errors
    /// [`LlmGatewayError::Config`] for missing/invalid variables, plus the
    /// constructor errors of [`LlmGateway::new`].
    pub fn from_env() -> Result<Self, LlmGatewayError> {
        Self::new(chat_config_from_env()?)
    }

    /// Sends the ordered turn history and returns the model's answer text.
    ///
    /// # Errors
    /// Propagates the provider's transport/status/decode failures.
    pub async fn chat(&self, turns: &[ChatTurn]) -> Result<String, LlmGatewayError> {
        match &self.backend {
            ChatBackend::Groq(svc) => svc.chat(turns).await,
            ChatBackend::Ollama(svc) => svc.chat(turns).await,
        }
    }

    /// The config this gateway was built from.
    pub fn config(&self) -> &ChatModelConfig {
        &self.cfg
    }
}
