//! HTTP layer for the cooking assistant.
//!
//! Routes:
//! - `POST /find_recipes`  — extract the dish name and list candidates
//! - `POST /select_recipe` — run the pipeline for a choice, open a session
//! - `POST /ask_question`  — follow-up question within a session
//! - `GET  /health`        — chat-provider health snapshot

mod core;
mod error_handler;
mod routes;

use std::{env, sync::Arc};

use axum::{
    Router,
    routing::{get, post},
};
use tokio::signal;
use tracing::info;

use crate::core::app_state::AppState;
use crate::error_handler::AppError;
use crate::routes::{
    ask::ask_question_route::ask_question, find_recipes::find_recipes_route::find_recipes,
    health_route::health, select_recipe::select_recipe_route::select_recipe,
};

/// Binds the listener and serves until Ctrl+C.
///
/// # Env
/// - `API_ADDRESS` (e.g. `127.0.0.1:8080`, required)
/// - plus everything [`AppState::from_env`] reads.
///
/// # Errors
/// [`AppError`] on missing config, bind failure or server failure.
pub async fn start() -> Result<(), AppError> {
    let host_url = env::var("API_ADDRESS").map_err(|_| AppError::MissingEnv("API_ADDRESS"))?;

    let state = Arc::new(AppState::from_env()?);

    let app = Router::new()
        .route("/find_recipes", post(find_recipes))
        .route("/select_recipe", post(select_recipe))
        .route("/ask_question", post(ask_question))
        .route("/health", get(health))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&host_url)
        .await
        .map_err(AppError::Bind)?;
    info!("listening on {}", host_url);

    // Serve with graceful shutdown on Ctrl+C.
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

/// Resolves when Ctrl+C is pressed.
async fn shutdown_signal() {
    signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
}
