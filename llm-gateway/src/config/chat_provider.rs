/// Backend used for chat inference.
///
/// Adding another provider (e.g. a further OpenAI-compatible host) means
/// extending this enum plus one service module under `services/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChatProvider {
    /// Hosted Groq API (OpenAI-compatible chat completions).
    Groq,
    /// Local Ollama runtime.
    Ollama,
}
