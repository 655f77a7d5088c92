use serde::{Deserialize, Serialize};

use recipe_directory::RecipeSummary;

/// Request payload for /find_recipes.
#[derive(Debug, Deserialize)]
pub struct FindRecipesRequest {
    /// Free-text cooking query ("How do I make butter chicken?").
    pub query: String,
    /// Optional override of the candidate count.
    #[serde(default)]
    pub limit: Option<u32>,
}

/// Response payload for /find_recipes.
#[derive(Debug, Serialize)]
pub struct FindRecipesResponse {
    /// Dish name the model extracted from the query.
    pub dish_name: String,
    /// Ranked candidates; pick one by 1-based position via /select_recipe.
    pub recipes: Vec<RecipeSummary>,
}
