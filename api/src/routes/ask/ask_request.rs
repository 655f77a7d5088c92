use serde::{Deserialize, Serialize};
use uuid::Uuid;

use cooking_pipeline::assistant::ConversationTurn;

/// Request payload for /ask_question.
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    /// Session opened by /select_recipe.
    pub session_id: Uuid,
    /// Natural-language follow-up question about the session's recipe.
    pub question: String,
}

/// Response payload for /ask_question.
#[derive(Debug, Serialize)]
pub struct AskResponse {
    /// The assistant's answer (plain text, never empty).
    pub answer: String,
    /// Retained conversation turns after this exchange, oldest first.
    pub history: Vec<ConversationTurn>,
}
