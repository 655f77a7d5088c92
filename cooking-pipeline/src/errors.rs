//! Error taxonomy for the pipeline and its stages.

use thiserror::Error;

use llm_gateway::LlmGatewayError;
use recipe_directory::RecipeDirectoryError;

/// Convenient alias for pipeline results.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Stage-specific failures surfaced by the orchestrator.
///
/// A failing stage aborts the run; downstream stages are never attempted
/// and nothing is retried.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The model's output did not parse as a dish name.
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    /// The externally-driven choice was out of range.
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// The recipe directory failed (bad status, malformed or partial payload).
    #[error(transparent)]
    Directory(#[from] RecipeDirectoryError),

    /// The search stage produced zero candidates; the selection stage
    /// must not be entered.
    #[error("no recipes found for `{dish}`")]
    NoResults {
        /// The extracted dish name that produced no hits.
        dish: String,
    },
}

/// Dish-name extraction failure. No fallback guessing is attempted.
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// The language-model call itself failed.
    #[error("model call failed: {0}")]
    Model(#[source] LlmGatewayError),

    /// The model answered, but the text did not parse against the
    /// expected `{"name": ...}` schema.
    #[error("model output did not match the dish-name schema: {raw}")]
    Schema {
        /// Short snippet of the offending output.
        raw: String,
    },

    /// The parsed name was empty after trimming.
    #[error("model returned an empty dish name")]
    EmptyName,
}

/// Invalid 1-based recipe selection.
#[derive(Debug, Error)]
pub enum SelectionError {
    /// `choice` is outside `[1, len]`. Never silently clamped.
    #[error("invalid choice {choice}, must be 1-{len}")]
    InvalidSelection {
        /// The rejected 1-based choice.
        choice: i64,
        /// Number of available options.
        len: usize,
    },
}
