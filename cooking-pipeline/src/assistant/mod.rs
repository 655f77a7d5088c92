//! Conversational recipe assistant with bounded-window memory.
//!
//! One assistant instance is bound to exactly one recipe for its whole
//! lifetime; switching recipes means constructing a fresh instance (there
//! is no operation to swap the recipe while preserving history, since the
//! history would then reference a recipe no longer represented in its own
//! turns).

mod prompt;
mod window;

use std::sync::Arc;

use tracing::{debug, warn};

use recipe_directory::DetailedRecipe;

use crate::capabilities::ChatModel;

pub use prompt::{SYSTEM_PROMPT, compose, render_recipe};
pub use window::{
    ConversationRole, ConversationTurn, ConversationWindow, DEFAULT_WINDOW_EXCHANGES,
};

/// Fixed answer substituted when the model call fails.
pub const FALLBACK_ANSWER: &str = "Sorry, I couldn't process that right now.";

/// Answers follow-up questions about one fixed recipe.
pub struct RecipeAssistant {
    recipe: DetailedRecipe,
    window: ConversationWindow,
    model: Arc<dyn ChatModel>,
}

impl RecipeAssistant {
    /// Binds a fresh assistant (empty window) to `recipe`.
    pub fn new(model: Arc<dyn ChatModel>, recipe: DetailedRecipe) -> Self {
        Self {
            recipe,
            window: ConversationWindow::default(),
            model,
        }
    }

    /// Answers one question about the bound recipe.
    ///
    /// The recipe text is re-rendered from the immutable recipe on every
    /// call; the prompt carries the retained window turns in
    /// chronological order.
    ///
    /// Model failures are deliberately masked: the caller always gets a
    /// non-empty answer (the fixed [`FALLBACK_ANSWER`] in the failure
    /// case) and the exchange is recorded either way. The underlying
    /// fault is still observable through the log side channel.
    ///
    /// Callers must not invoke this with input that is empty after
    /// trimming; the question is only trimmed here, not validated.
    pub async fn ask(&mut self, question: &str) -> String {
        let question = question.trim();

        let turns = compose(&self.recipe, &self.window, question);
        debug!(
            recipe_id = self.recipe.id,
            history_turns = turns.len() - 2,
            "asking model about recipe"
        );

        let answer = match self.model.chat(&turns).await {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                warn!(
                    recipe_id = self.recipe.id,
                    error = %e,
                    "model call failed; returning fallback answer"
                );
                FALLBACK_ANSWER.to_string()
            }
        };

        self.window.push(question, answer.clone());
        answer
    }

    /// The recipe this assistant is bound to.
    pub fn recipe(&self) -> &DetailedRecipe {
        &self.recipe
    }

    /// The retained conversation turns, oldest first.
    pub fn history(&self) -> Vec<ConversationTurn> {
        self.window.turns().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use std::sync::Mutex;

    use llm_gateway::{ChatProvider, ChatRole, ChatTurn, LlmGatewayError};
    use llm_gateway::error_handler::{ProviderError, ProviderErrorKind};

    use crate::capabilities::ChatModel;

    /// Scripted model: answers in order, `None` entries simulate failures.
    struct ScriptedModel {
        script: Mutex<Vec<Option<String>>>,
        seen: Mutex<Vec<Vec<ChatTurn>>>,
    }

    impl ScriptedModel {
        fn new(script: Vec<Option<&str>>) -> Arc<Self> {
            Arc::new(Self {
                script: Mutex::new(
                    script
                        .into_iter()
                        .map(|s| s.map(str::to_string))
                        .collect(),
                ),
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl ChatModel for ScriptedModel {
        async fn chat(&self, turns: &[ChatTurn]) -> Result<String, LlmGatewayError> {
            self.seen.lock().unwrap().push(turns.to_vec());
            let mut script = self.script.lock().unwrap();
            match script.remove(0) {
                Some(text) => Ok(text),
                None => Err(ProviderError::new(
                    ChatProvider::Groq,
                    ProviderErrorKind::EmptyChoices,
                )
                .into()),
            }
        }
    }

    fn recipe() -> DetailedRecipe {
        DetailedRecipe {
            id: 123,
            title: "Spaghetti Carbonara".into(),
            summary: None,
            instructions: Some("Cook pasta, combine with eggs and cheese.".into()),
            ready_in_minutes: Some(25),
            servings: Some(2),
            ingredients: vec!["spaghetti".into(), "eggs".into()],
        }
    }

    #[tokio::test]
    async fn answers_and_records_the_exchange() {
        let model = ScriptedModel::new(vec![Some("About 25 minutes.")]);
        let mut assistant = RecipeAssistant::new(model, recipe());

        let answer = assistant.ask("  How long does it take?  ").await;
        assert_eq!(answer, "About 25 minutes.");

        let history = assistant.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role, ConversationRole::User);
        // The recorded question is the trimmed one.
        assert_eq!(history[0].text, "How long does it take?");
        assert_eq!(history[1].text, "About 25 minutes.");
    }

    #[tokio::test]
    async fn model_failure_is_masked_into_fallback() {
        let model = ScriptedModel::new(vec![None]);
        let mut assistant = RecipeAssistant::new(model, recipe());

        let answer = assistant.ask("Can I use bacon?").await;
        assert!(!answer.is_empty());
        assert_eq!(answer, FALLBACK_ANSWER);

        // The failed exchange is recorded like any other.
        let history = assistant.history();
        assert_eq!(history[1].text, FALLBACK_ANSWER);
    }

    #[tokio::test]
    async fn window_keeps_only_last_two_exchanges() {
        let model = ScriptedModel::new(vec![Some("A1"), Some("A2"), Some("A3")]);
        let mut assistant = RecipeAssistant::new(model, recipe());

        assistant.ask("Q1").await;
        assistant.ask("Q2").await;
        assistant.ask("Q3").await;

        let texts: Vec<_> = assistant.history().into_iter().map(|t| t.text).collect();
        assert_eq!(texts, ["Q2", "A2", "Q3", "A3"]);
    }

    #[tokio::test]
    async fn prompt_carries_history_and_fresh_recipe_each_call() {
        let model = ScriptedModel::new(vec![Some("A1"), Some("A2")]);
        let mut assistant = RecipeAssistant::new(model.clone(), recipe());

        assistant.ask("Q1").await;
        assistant.ask("Q2").await;

        let seen = model.seen.lock().unwrap();
        // First call: system + question only.
        assert_eq!(seen[0].len(), 2);
        assert_eq!(seen[0][0].role, ChatRole::System);
        // Second call: system + Q1/A1 + question, recipe re-rendered.
        assert_eq!(seen[1].len(), 4);
        assert_eq!(seen[1][1].content, "Q1");
        assert_eq!(seen[1][2].content, "A1");
        assert!(seen[1][3].content.contains("Spaghetti Carbonara"));
    }
}
