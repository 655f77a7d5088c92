//! Chat configs loaded strictly from environment variables.
//!
//! # Environment variables
//!
//! Common:
//! - `LLM_KIND` = provider kind (`groq` | `ollama`), defaults to `groq`
//! - `LLM_MAX_TOKENS` = optional max tokens (u32)
//! - `LLM_TIMEOUT_SECS` = optional request timeout (u64)
//!
//! Groq-specific:
//! - `GROQ_API_KEY` = API key (mandatory)
//! - `GROQ_MODEL`   = chat model (mandatory)
//! - `GROQ_URL`     = base URL, defaults to `https://api.groq.com`
//!
//! Ollama-specific:
//! - `OLLAMA_URL` or `OLLAMA_PORT` = endpoint (mandatory)
//! - `OLLAMA_MODEL`                = chat model (mandatory)

use crate::{
    config::{chat_model_config::ChatModelConfig, chat_provider::ChatProvider},
    error_handler::{ConfigError, LlmGatewayError, env_opt_u32, env_opt_u64, must_env},
};

/// Resolves the chat config from `LLM_KIND`.
///
/// Unset or empty `LLM_KIND` selects Groq, matching the hosted default.
///
/// # Errors
/// - [`ConfigError::UnsupportedProvider`] for an unknown kind
/// - whatever the selected provider constructor returns
pub fn chat_config_from_env() -> Result<ChatModelConfig, LlmGatewayError> {
    let kind = std::env::var("LLM_KIND").unwrap_or_default();
    match kind.trim().to_ascii_lowercase().as_str() {
        "" | "groq" => config_groq_chat(),
        "ollama" => config_ollama_chat(),
        other => Err(ConfigError::UnsupportedProvider(other.to_string()).into()),
    }
}

/// Constructs the **Groq** chat config.
///
/// # Env
/// - `GROQ_API_KEY`, `GROQ_MODEL` (required)
/// - `GROQ_URL`, `LLM_MAX_TOKENS`, `LLM_TIMEOUT_SECS` (optional)
///
/// # Defaults
/// - `endpoint = "https://api.groq.com"`
/// - `temperature = Some(0.5)`
/// - `timeout_secs = Some(60)`
pub fn config_groq_chat() -> Result<ChatModelConfig, LlmGatewayError> {
    let api_key = must_env("GROQ_API_KEY")?;
    let model = must_env("GROQ_MODEL")?;
    let endpoint = std::env::var("GROQ_URL")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| "https://api.groq.com".to_string());
    let max_tokens = env_opt_u32("LLM_MAX_TOKENS")?;
    let timeout_secs = env_opt_u64("LLM_TIMEOUT_SECS")?.or(Some(60));

    Ok(ChatModelConfig {
        provider: ChatProvider::Groq,
        model,
        endpoint,
        api_key: Some(api_key),
        max_tokens,
        temperature: Some(0.5),
        top_p: None,
        timeout_secs,
    })
}

/// Constructs the **Ollama** chat config.
///
/// # Env
/// - `OLLAMA_URL` or `OLLAMA_PORT`, `OLLAMA_MODEL` (required)
/// - `LLM_MAX_TOKENS`, `LLM_TIMEOUT_SECS` (optional)
///
/// # Defaults
/// - `temperature = Some(0.5)`
/// - `top_p = Some(0.9)`
/// - `timeout_secs = Some(60)`
pub fn config_ollama_chat() -> Result<ChatModelConfig, LlmGatewayError> {
    let endpoint = ollama_endpoint()?;
    let model = must_env("OLLAMA_MODEL")?;
    let max_tokens = env_opt_u32("LLM_MAX_TOKENS")?;
    let timeout_secs = env_opt_u64("LLM_TIMEOUT_SECS")?.or(Some(60));

    Ok(ChatModelConfig {
        provider: ChatProvider::Ollama,
        model,
        endpoint,
        api_key: None,
        max_tokens,
        temperature: Some(0.5),
        top_p: Some(0.9),
        timeout_secs,
    })
}

/// Resolves the Ollama endpoint strictly from environment.
///
/// Precedence:
/// 1. `OLLAMA_URL` if present and non-empty
/// 2. `OLLAMA_PORT` → `http://localhost:{port}`
///
/// # Errors
/// - [`ConfigError::MissingVar`] if both are missing
/// - [`ConfigError::InvalidNumber`] if `OLLAMA_PORT` is invalid
fn ollama_endpoint() -> Result<String, LlmGatewayError> {
    if let Ok(url) = std::env::var("OLLAMA_URL") {
        if !url.trim().is_empty() {
            return Ok(url);
        }
    }
    if let Ok(port) = std::env::var("OLLAMA_PORT") {
        if !port.trim().is_empty() {
            let _ = port
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidNumber {
                    var: "OLLAMA_PORT",
                    reason: "expected u16 (1..=65535)",
                })?;
            return Ok(format!("http://localhost:{port}"));
        }
    }
    Err(LlmGatewayError::Config(ConfigError::MissingVar(
        "OLLAMA_URL or OLLAMA_PORT",
    )))
}
