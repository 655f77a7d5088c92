//! POST /select_recipe — run the pipeline for a choice and open a session.

use std::sync::Arc;

use axum::{Json, extract::State};
use tracing::info;

use cooking_pipeline::assistant::RecipeAssistant;

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    error_handler::{AppError, AppResult},
    routes::select_recipe::select_recipe_request::{SelectRecipeRequest, SelectRecipeResponse},
};

/// Handler: POST /select_recipe
///
/// Re-runs the entire pipeline (including the dish-name extraction) with
/// the supplied 1-based choice, then binds a fresh conversation session
/// to the fetched recipe and returns its id.
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8080/select_recipe \
///   -H 'content-type: application/json' \
///   -d '{"query":"How do I make butter chicken?","choice":2}'
/// ```
pub async fn select_recipe(
    State(state): State<Arc<AppState>>,
    Json(body): Json<SelectRecipeRequest>,
) -> AppResult<Json<ApiResponse<SelectRecipeResponse>>> {
    if body.query.trim().is_empty() {
        return Err(AppError::BadRequest("query must not be empty".into()));
    }
    let limit = body.limit.unwrap_or(state.search_limit);
    let choice = body.choice;

    let run = cooking_pipeline::run_pipeline(
        state.llm.as_ref(),
        &state.directory,
        body.query.trim(),
        limit,
        |_| Ok(choice),
    )
    .await?;

    // run_pipeline only succeeds with the detail present.
    let recipe = run.detailed_recipe.ok_or_else(|| AppError::Http {
        status: axum::http::StatusCode::INTERNAL_SERVER_ERROR,
        code: "MISSING_DETAIL",
        message: "pipeline completed without a detailed recipe".into(),
    })?;

    let assistant = RecipeAssistant::new(state.llm.clone(), recipe.clone());
    let session_id = state.insert_session(assistant).await;

    info!(%session_id, recipe_id = recipe.id, "conversation session opened");

    Ok(Json(ApiResponse::success(SelectRecipeResponse {
        session_id,
        recipe,
    })))
}
