//! Blocking facade over the async pipeline.
//!
//! The async functions are the single implementation; these wrappers
//! drive the very same futures to completion on a current-thread Tokio
//! runtime, so the blocking and suspending forms cannot diverge in
//! observable behavior. Suspension happens only at the network calls.
//!
//! Must not be called from within an async context (the runtime would
//! panic on nested `block_on`).

use crate::assistant::RecipeAssistant;
use crate::capabilities::{ChatModel, RecipeSource};
use crate::errors::{ExtractionError, PipelineResult, SelectionError};
use crate::schema::{DishName, PipelineState};
use crate::{RecipeSummary, extract, find_recipes, run_pipeline};

fn block_on<F: Future>(fut: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("current-thread runtime")
        .block_on(fut)
}

/// Blocking form of [`extract::extract`], identical contract and failure
/// semantics.
pub fn extract_blocking<M>(model: &M, query: &str) -> Result<DishName, ExtractionError>
where
    M: ChatModel + ?Sized,
{
    block_on(extract::extract(model, query))
}

/// Blocking form of [`find_recipes`].
pub fn find_recipes_blocking<M, S>(
    model: &M,
    source: &S,
    query: &str,
    limit: u32,
) -> PipelineResult<PipelineState>
where
    M: ChatModel + ?Sized,
    S: RecipeSource + ?Sized,
{
    block_on(find_recipes(model, source, query, limit))
}

/// Blocking form of [`run_pipeline`].
pub fn run_pipeline_blocking<M, S, F>(
    model: &M,
    source: &S,
    query: &str,
    limit: u32,
    choice_provider: F,
) -> PipelineResult<PipelineState>
where
    M: ChatModel + ?Sized,
    S: RecipeSource + ?Sized,
    F: FnOnce(&[RecipeSummary]) -> Result<i64, SelectionError>,
{
    block_on(run_pipeline(model, source, query, limit, choice_provider))
}

/// Blocking form of [`RecipeAssistant::ask`].
pub fn ask_blocking(assistant: &mut RecipeAssistant, question: &str) -> String {
    block_on(assistant.ask(question))
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;

    use llm_gateway::{ChatTurn, LlmGatewayError};

    struct FixedModel(&'static str);

    #[async_trait]
    impl ChatModel for FixedModel {
        async fn chat(&self, _turns: &[ChatTurn]) -> Result<String, LlmGatewayError> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn blocking_extract_matches_the_async_contract() {
        let model = FixedModel(r#"{"name": "Butter Chicken"}"#);
        let dish = extract_blocking(&model, "how do I make butter chicken?").unwrap();
        assert_eq!(dish.name, "Butter Chicken");
    }

    #[test]
    fn blocking_extract_surfaces_schema_failures() {
        let model = FixedModel("no json here");
        let err = extract_blocking(&model, "anything").unwrap_err();
        assert!(matches!(err, ExtractionError::Schema { .. }));
    }
}
