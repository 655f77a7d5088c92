//! POST /ask_question — follow-up question within a conversation session.

use std::sync::Arc;

use axum::{Json, extract::State};

use crate::{
    core::{app_state::AppState, http::response_envelope::ApiResponse},
    error_handler::{AppError, AppResult},
    routes::ask::ask_request::{AskRequest, AskResponse},
};

/// Handler: POST /ask_question
///
/// Answers one question about the session's recipe. Model failures never
/// surface here; the assistant degrades to its fixed fallback text.
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8080/ask_question \
///   -H 'content-type: application/json' \
///   -d '{"session_id":"...","question":"Can I use bacon instead?"}'
/// ```
pub async fn ask_question(
    State(state): State<Arc<AppState>>,
    Json(body): Json<AskRequest>,
) -> AppResult<Json<ApiResponse<AskResponse>>> {
    if body.question.trim().is_empty() {
        return Err(AppError::BadRequest("question must not be empty".into()));
    }

    let session = state
        .session(&body.session_id)
        .await
        .ok_or(AppError::UnknownSession)?;

    // One caller at a time per session; other sessions are unaffected.
    let mut assistant = session.lock().await;
    let answer = assistant.ask(&body.question).await;
    let history = assistant.history();

    Ok(Json(ApiResponse::success(AskResponse { answer, history })))
}
