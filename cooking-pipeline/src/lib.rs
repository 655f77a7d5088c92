//! Public entry for the cooking-assistant pipeline.
//!
//! Single high-level function to run the fixed stage chain for one query:
//!
//! 1) **Extract** — ask the model for the dish name, parse against schema
//! 2) **Search**  — ranked candidate lookup in the recipe directory
//! 3) **Select**  — externally-driven, validated 1-based pick
//! 4) **Fetch**   — full detail for the selected recipe
//!
//! Each stage consumes the current [`PipelineState`] and contributes a
//! partial update that is merged additively: stages add or overwrite
//! their own fields, never delete others'. A failing stage aborts the run
//! with its stage-specific error; nothing is retried and no stage has a
//! timeout beyond the underlying HTTP clients' own.
//!
//! The follow-up conversation about the fetched recipe lives in
//! [`assistant::RecipeAssistant`] and is driven by the caller (console
//! loop or per-session web handler), not by the pipeline itself.

pub mod assistant;
pub mod blocking;
pub mod capabilities;
pub mod errors;
pub mod extract;
pub mod schema;
pub mod select;

use std::time::Instant;

use tracing::debug;

pub use capabilities::{ChatModel, RecipeSource};
pub use errors::{ExtractionError, PipelineError, PipelineResult, SelectionError};
pub use schema::{DishName, PipelineState};

pub use recipe_directory::{DetailedRecipe, RecipeSummary};

/// Default number of candidates requested from the search stage.
pub const DEFAULT_SEARCH_LIMIT: u32 = 5;

/// Runs the extract and search stages only.
///
/// This is the partial run used by the web flow to present candidates
/// before the user has chosen; the console flow goes straight through
/// [`run_pipeline`].
///
/// # Errors
/// [`PipelineError::Extraction`] or [`PipelineError::Directory`] from the
/// respective stage.
pub async fn find_recipes<M, S>(
    model: &M,
    source: &S,
    query: &str,
    limit: u32,
) -> PipelineResult<PipelineState>
where
    M: ChatModel + ?Sized,
    S: RecipeSource + ?Sized,
{
    let mut state = PipelineState::new(query);

    let t0 = Instant::now();
    debug!("stage extract: ask model for dish name");
    let dish = extract::extract(model, &state.user_query).await?;
    debug!(
        "stage extract: dish=`{}` ({} ms)",
        dish.name,
        t0.elapsed().as_millis()
    );
    let dish_name = dish.name.clone();
    state.dish_name = Some(dish.name);

    let t1 = Instant::now();
    debug!("stage search: query directory for `{}`", dish_name);
    let recipes = source.search_recipes(&dish_name, limit).await?;
    debug!(
        "stage search: {} candidates ({} ms)",
        recipes.len(),
        t1.elapsed().as_millis()
    );
    state.recipes = Some(recipes);

    Ok(state)
}

/// Runs the full stage chain: extract → search → select → fetch detail.
///
/// `choice_provider` supplies the externally-driven 1-based choice once
/// the ranked candidates are known (console prompt, HTTP request field).
/// It may itself fail with a [`SelectionError`]; either way the choice is
/// validated by the select stage before any further I/O happens.
///
/// # Errors
/// The first failing stage's error; downstream stages are not attempted.
/// Zero search results fail with [`PipelineError::NoResults`] before the
/// selection stage is entered.
pub async fn run_pipeline<M, S, F>(
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
    let mut state = find_recipes(model, source, query, limit).await?;

    let recipes = state.recipes.as_deref().unwrap_or_default();
    if recipes.is_empty() {
        return Err(PipelineError::NoResults {
            dish: state.dish_name.clone().unwrap_or_default(),
        });
    }

    debug!("stage select: awaiting 1-based choice of {}", recipes.len());
    let choice = choice_provider(recipes)?;
    let selected = select::select(recipes, choice)?;
    debug!(
        "stage select: choice={} → id={} `{}`",
        choice, selected.id, selected.title
    );
    state.selected_recipe = Some(selected.clone());

    let t3 = Instant::now();
    debug!("stage fetch: detail for id={}", selected.id);
    let detailed = source.fetch_detail(selected.id).await?;
    debug!(
        "stage fetch: `{}` with {} ingredients ({} ms)",
        detailed.title,
        detailed.ingredients.len(),
        t3.elapsed().as_millis()
    );
    state.detailed_recipe = Some(detailed);

    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use std::sync::Arc;

    use llm_gateway::{ChatTurn, LlmGatewayError};
    use recipe_directory::{RecipeDirectoryError, RecipeDirectoryResult};

    struct FixedModel(&'static str);

    #[async_trait]
    impl ChatModel for FixedModel {
        async fn chat(&self, _turns: &[ChatTurn]) -> Result<String, LlmGatewayError> {
            Ok(self.0.to_string())
        }
    }

    /// In-memory directory with a fixed candidate list and detail table.
    struct FakeDirectory {
        results: Vec<RecipeSummary>,
        detail: fn(i64) -> RecipeDirectoryResult<DetailedRecipe>,
    }

    #[async_trait]
    impl RecipeSource for FakeDirectory {
        async fn search_recipes(
            &self,
            _name: &str,
            _limit: u32,
        ) -> RecipeDirectoryResult<Vec<RecipeSummary>> {
            Ok(self.results.clone())
        }

        async fn fetch_detail(&self, id: i64) -> RecipeDirectoryResult<DetailedRecipe> {
            (self.detail)(id)
        }
    }

    fn candidates() -> Vec<RecipeSummary> {
        vec![
            RecipeSummary {
                id: 1,
                title: "Butter Chicken".into(),
            },
            RecipeSummary {
                id: 2,
                title: "Chicken Tikka".into(),
            },
        ]
    }

    fn full_detail(id: i64) -> RecipeDirectoryResult<DetailedRecipe> {
        Ok(DetailedRecipe {
            id,
            title: "Chicken Tikka".into(),
            summary: None,
            instructions: None,
            ready_in_minutes: Some(40),
            servings: Some(4),
            ingredients: vec!["chicken".into(), "yogurt".into()],
        })
    }

    #[tokio::test]
    async fn full_run_accumulates_every_stage_field() {
        let model = FixedModel(r#"{"name": "Chicken Tikka"}"#);
        let source = FakeDirectory {
            results: candidates(),
            detail: full_detail,
        };

        let state = run_pipeline(&model, &source, "how do I make chicken tikka?", 5, |_| Ok(2))
            .await
            .unwrap();

        assert_eq!(state.user_query, "how do I make chicken tikka?");
        assert_eq!(state.dish_name.as_deref(), Some("Chicken Tikka"));
        assert_eq!(state.recipes.as_ref().unwrap().len(), 2);
        let selected = state.selected_recipe.unwrap();
        assert_eq!((selected.id, selected.title.as_str()), (2, "Chicken Tikka"));
        assert_eq!(state.detailed_recipe.unwrap().id, 2);
    }

    #[tokio::test]
    async fn zero_results_abort_before_selection() {
        let model = FixedModel(r#"{"name": "Unobtainium Stew"}"#);
        let source = FakeDirectory {
            results: vec![],
            detail: full_detail,
        };

        let err = run_pipeline(&model, &source, "weird dish", 5, |_| {
            panic!("choice provider must not run on zero results")
        })
        .await
        .unwrap_err();

        assert!(matches!(err, PipelineError::NoResults { dish } if dish == "Unobtainium Stew"));
    }

    #[tokio::test]
    async fn out_of_range_choice_fails_the_select_stage() {
        let model = FixedModel(r#"{"name": "Butter Chicken"}"#);
        let source = FakeDirectory {
            results: candidates(),
            detail: full_detail,
        };

        let err = run_pipeline(&model, &source, "butter chicken", 5, |_| Ok(9))
            .await
            .unwrap_err();

        assert!(matches!(err, PipelineError::Selection(_)));
    }

    #[tokio::test]
    async fn incomplete_detail_stops_the_pipeline() {
        let model = FixedModel(r#"{"name": "Butter Chicken"}"#);
        let source = FakeDirectory {
            results: candidates(),
            detail: |_| Err(RecipeDirectoryError::IncompleteData { missing: "title" }),
        };

        let err = run_pipeline(&model, &source, "butter chicken", 5, |_| Ok(1))
            .await
            .unwrap_err();

        // The run ends here: no detailed recipe, so no conversation can start.
        assert!(matches!(
            err,
            PipelineError::Directory(RecipeDirectoryError::IncompleteData { missing: "title" })
        ));
    }

    #[tokio::test]
    async fn unparseable_model_output_fails_extraction() {
        let model = FixedModel("I think you want butter chicken!");
        let source = FakeDirectory {
            results: candidates(),
            detail: full_detail,
        };

        let err = find_recipes(&model, &source, "butter chicken", 5)
            .await
            .unwrap_err();

        assert!(matches!(err, PipelineError::Extraction(_)));
    }

    #[tokio::test]
    async fn partial_run_stops_after_search() {
        let model = FixedModel(r#"{"name": "Butter Chicken"}"#);
        let source = FakeDirectory {
            results: candidates(),
            detail: full_detail,
        };

        let state = find_recipes(&model, &source, "butter chicken", 5)
            .await
            .unwrap();

        assert!(state.recipes.is_some());
        assert!(state.selected_recipe.is_none());
        assert!(state.detailed_recipe.is_none());
    }

    #[test]
    fn assistant_is_reachable_through_the_pipeline_types() {
        // Assistant construction over the trait object used by the UIs.
        let model: Arc<dyn ChatModel> = Arc::new(FixedModel("ok"));
        let recipe = full_detail(2).unwrap();
        let assistant = assistant::RecipeAssistant::new(model, recipe);
        assert_eq!(assistant.recipe().id, 2);
    }
}
