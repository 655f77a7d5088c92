//! Client for the upstream recipe directory (Spoonacular-shaped REST API).
//!
//! Two read-only endpoints are wrapped:
//!   * GET /recipes/complexSearch?query=<name>&number=<n> — ranked search
//!   * GET /recipes/<id>/information — full recipe detail
//!
//! The client performs outbound network calls only; no local mutation.

mod client;
mod errors;
mod types;

pub use client::RecipeDirectoryClient;
pub use errors::{
    DirectoryConfigError, RecipeDirectoryError, RecipeDirectoryResult, UpstreamError,
};
pub use types::{DetailedRecipe, RecipeSummary};
