//! Public application error type and its HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use cooking_pipeline::PipelineError;
use recipe_directory::RecipeDirectoryError;

use crate::core::http::response_envelope::ApiResponse;

/// Errors surfaced by the HTTP layer.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error("missing required environment variable: {0}")]
    MissingEnv(&'static str),

    #[error("startup failed: {0}")]
    Startup(String),

    // --- IO / network / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request / routing ---
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("unknown session")]
    UnknownSession,

    /// Rich HTTP error mapped from lower layers with specific status & code.
    #[error("{message}")]
    Http {
        status: StatusCode,
        code: &'static str,
        message: String,
    },
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingEnv(_) | AppError::Startup(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::UnknownSession => StatusCode::NOT_FOUND,
            AppError::Http { status, .. } => *status,
            AppError::Bind(_) | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::MissingEnv(_) => "MISSING_ENV",
            AppError::Startup(_) => "STARTUP_ERROR",
            AppError::Bind(_) => "BIND_ERROR",
            AppError::Server(_) => "SERVER_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::UnknownSession => "UNKNOWN_SESSION",
            AppError::Http { code, .. } => code,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        ApiResponse::<()>::error(self.error_code(), self.to_string())
            .into_response_with_status(status)
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Maps pipeline stage failures to precise HTTP statuses & codes.
///
/// Upstream/model failures surface as 502 (the fault is behind us), an
/// invalid choice is the client's 400, zero hits a 404.
impl From<PipelineError> for AppError {
    fn from(err: PipelineError) -> Self {
        match err {
            PipelineError::Selection(e) => AppError::Http {
                status: StatusCode::BAD_REQUEST,
                code: "INVALID_SELECTION",
                message: e.to_string(),
            },
            PipelineError::Extraction(e) => AppError::Http {
                status: StatusCode::BAD_GATEWAY,
                code: "EXTRACTION_FAILED",
                message: e.to_string(),
            },
            PipelineError::NoResults { dish } => AppError::Http {
                status: StatusCode::NOT_FOUND,
                code: "NO_RESULTS",
                message: format!("no recipes found for `{dish}`"),
            },
            PipelineError::Directory(RecipeDirectoryError::IncompleteData { missing }) => {
                AppError::Http {
                    status: StatusCode::BAD_GATEWAY,
                    code: "INCOMPLETE_RECIPE",
                    message: format!("upstream payload missing `{missing}`"),
                }
            }
            PipelineError::Directory(e) => AppError::Http {
                status: StatusCode::BAD_GATEWAY,
                code: "UPSTREAM_ERROR",
                message: e.to_string(),
            },
        }
    }
}
