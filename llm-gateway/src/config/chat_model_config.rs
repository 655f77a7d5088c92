use crate::config::chat_provider::ChatProvider;

/// Configuration for a chat model invocation.
///
/// One instance fully describes a provider + model + endpoint combination
/// together with the sampling knobs applied to every request.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatModelConfig {
    /// Which backend to call.
    pub provider: ChatProvider,

    /// Model identifier (e.g. `"llama3-8b-8192"`, `"qwen3:14b"`).
    pub model: String,

    /// Base endpoint URL (e.g. `"https://api.groq.com"`,
    /// `"http://localhost:11434"`). Provider-specific paths are appended
    /// by the service.
    pub endpoint: String,

    /// API key for providers that require authentication (Groq).
    pub api_key: Option<String>,

    /// Maximum number of tokens to generate.
    pub max_tokens: Option<u32>,

    /// Sampling temperature.
    pub temperature: Option<f32>,

    /// Nucleus sampling cutoff.
    pub top_p: Option<f32>,

    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
}
