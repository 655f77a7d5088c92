//! Pipeline data model.

use serde::{Deserialize, Serialize};

use recipe_directory::{DetailedRecipe, RecipeSummary};

/// Structured result of dish-name extraction.
///
/// Parsed from the model's text against this exact shape; a successful
/// parse guarantees a non-empty `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishName {
    /// The dish the user is asking about.
    pub name: String,
}

/// The accumulating record threaded through the pipeline.
///
/// Each stage only ever adds or overwrites its own fields; nothing is
/// deleted. The orchestrator owns the state and merges each stage's
/// partial update into it before the next stage runs.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineState {
    /// Raw free-text query the run started from.
    pub user_query: String,
    /// Filled by the extract stage.
    pub dish_name: Option<String>,
    /// Filled by the search stage, upstream ranking order.
    pub recipes: Option<Vec<RecipeSummary>>,
    /// Filled by the select stage.
    pub selected_recipe: Option<RecipeSummary>,
    /// Filled by the fetch-detail stage.
    pub detailed_recipe: Option<DetailedRecipe>,
}

impl PipelineState {
    /// Fresh state for one pipeline run.
    pub fn new(user_query: impl Into<String>) -> Self {
        Self {
            user_query: user_query.into(),
            dish_name: None,
            recipes: None,
            selected_recipe: None,
            detailed_recipe: None,
        }
    }
}
