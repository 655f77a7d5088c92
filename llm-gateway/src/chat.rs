//! Chat message types shared by all providers.
//!
//! A prompt is an ordered sequence of [`ChatTurn`]s: at most one leading
//! system instruction, then prior conversation turns in chronological
//! order, then the final user text. Providers map these onto their own
//! wire formats.

/// Speaker of a single chat turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    /// Fixed behavioral instruction, first in the sequence.
    System,
    /// End-user input.
    User,
    /// A previous model answer.
    Assistant,
}

impl ChatRole {
    /// Wire-level role name ("system" | "user" | "assistant").
    ///
    /// Both Groq and Ollama use the same role strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::System => "system",
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// One turn of a chat prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    /// Who is speaking.
    pub role: ChatRole,
    /// Plain text content of the turn.
    pub content: String,
}

impl ChatTurn {
    /// A system-instruction turn.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    /// A user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    /// An assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}
