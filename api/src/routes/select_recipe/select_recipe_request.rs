use serde::{Deserialize, Serialize};
use uuid::Uuid;

use recipe_directory::DetailedRecipe;

/// Request payload for /select_recipe.
#[derive(Debug, Deserialize)]
pub struct SelectRecipeRequest {
    /// The original free-text query.
    pub query: String,
    /// 1-based position within the candidate list.
    pub choice: i64,
    /// Optional override of the candidate count.
    #[serde(default)]
    pub limit: Option<u32>,
}

/// Response payload for /select_recipe.
#[derive(Debug, Serialize)]
pub struct SelectRecipeResponse {
    /// Conversation session opened for the selected recipe.
    pub session_id: Uuid,
    /// Full detail of the selected recipe.
    pub recipe: DetailedRecipe,
}
