//! POST /find_recipes — extract the dish name and list candidates.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    error_handler::{AppError, AppResult},
    routes::find_recipes::find_recipes_request::{FindRecipesRequest, FindRecipesResponse},
};

/// Handler: POST /find_recipes
///
/// Runs the extract and search stages only; the caller picks a candidate
/// afterwards via `/select_recipe`.
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8080/find_recipes \
///   -H 'content-type: application/json' \
///   -d '{"query":"How do I make butter chicken?"}'
/// ```
pub async fn find_recipes(
    State(state): State<Arc<AppState>>,
    Json(body): Json<FindRecipesRequest>,
) -> AppResult<Json<ApiResponse<FindRecipesResponse>>> {
    if body.query.trim().is_empty() {
        return Err(AppError::BadRequest("query must not be empty".into()));
    }
    let limit = body.limit.unwrap_or(state.search_limit);

    let run = cooking_pipeline::find_recipes(
        state.llm.as_ref(),
        &state.directory,
        body.query.trim(),
        limit,
    )
    .await?;

    Ok(Json(ApiResponse::success(FindRecipesResponse {
        dish_name: run.dish_name.unwrap_or_default(),
        recipes: run.recipes.unwrap_or_default(),
    })))
}
