//! Crate-wide error hierarchy for recipe-directory.

use thiserror::Error;

/// Convenient alias for crate-wide results.
pub type RecipeDirectoryResult<T> = Result<T, RecipeDirectoryError>;

/// Root error type for the recipe-directory crate.
#[derive(Debug, Error)]
pub enum RecipeDirectoryError {
    /// Upstream HTTP/transport/decoding failure.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// The detail payload decoded but lacks a required minimum field.
    ///
    /// Recoverable: the caller may skip this recipe or retry another.
    #[error("incomplete recipe payload: missing `{missing}`")]
    IncompleteData {
        /// Name of the absent field (`id` or `title`).
        missing: &'static str,
    },

    /// Configuration problems (missing key, bad base URL).
    #[error(transparent)]
    Config(#[from] DirectoryConfigError),
}

/// Upstream HTTP failure, mapped from status codes and transport errors.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Unauthorized (HTTP 401), usually a bad API key.
    #[error("unauthorized")]
    Unauthorized,

    /// Payment/quota exhausted (HTTP 402, used by the upstream for quota).
    #[error("quota exhausted")]
    QuotaExhausted,

    /// Not found (HTTP 404).
    #[error("not found")]
    NotFound,

    /// Rate limited (HTTP 429).
    #[error("rate limited")]
    RateLimited,

    /// Gateway / server error (HTTP 5xx).
    #[error("server error: status {0}")]
    Server(u16),

    /// Other non-2xx status not covered by specific variants.
    #[error("http status error: status {0}")]
    HttpStatus(u16),

    /// Timeout at transport level.
    #[error("timeout")]
    Timeout,

    /// Response body could not be decoded as the expected JSON shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// Network/transport failure without HTTP status (DNS/connect/reset).
    #[error("network error: {0}")]
    Network(String),
}

/// Configuration and setup errors.
#[derive(Debug, Error)]
pub enum DirectoryConfigError {
    /// Missing required upstream API key.
    #[error("missing upstream api key")]
    MissingApiKey,

    /// Invalid base API URL.
    #[error("invalid base api url: {0}")]
    InvalidBaseUrl(String),
}

// ===== Mapping from reqwest::Error for `?` ergonomics =====

impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            return UpstreamError::Timeout;
        }
        if e.is_decode() {
            return UpstreamError::Decode(e.to_string());
        }

        if let Some(status) = e.status() {
            let code = status.as_u16();
            return match code {
                401 => UpstreamError::Unauthorized,
                402 => UpstreamError::QuotaExhausted,
                404 => UpstreamError::NotFound,
                429 => UpstreamError::RateLimited,
                500..=599 => UpstreamError::Server(code),
                _ => UpstreamError::HttpStatus(code),
            };
        }

        UpstreamError::Network(e.to_string())
    }
}

impl From<reqwest::Error> for RecipeDirectoryError {
    fn from(e: reqwest::Error) -> Self {
        RecipeDirectoryError::Upstream(UpstreamError::from(e))
    }
}
