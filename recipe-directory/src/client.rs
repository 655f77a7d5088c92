//! HTTP client wrapper for the recipe directory.

use reqwest::Client;
use tracing::debug;

use crate::errors::{DirectoryConfigError, RecipeDirectoryResult};
use crate::types::{DetailPayload, DetailedRecipe, RecipeSummary, SearchPayload};

/// Recipe directory HTTP client.
///
/// Holds a shared `reqwest::Client`, the API base URL and the API key.
/// The key is sent as the `apiKey` query parameter (upstream convention)
/// and is never included in log output.
#[derive(Debug, Clone)]
pub struct RecipeDirectoryClient {
    http: Client,
    base_api: String, // e.g. "https://api.spoonacular.com"
    api_key: String,
}

impl RecipeDirectoryClient {
    /// Constructs a client with a shared HTTP instance and auth key.
    pub fn new(http: Client, base_api: String, api_key: String) -> Self {
        debug!("Creating RecipeDirectoryClient with base_api={}", base_api);
        Self {
            http,
            base_api: base_api.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Constructs a client from environment variables.
    ///
    /// # Env
    /// - `SPOONACULAR_API_KEY` (required)
    /// - `SPOONACULAR_URL` (optional, defaults to the hosted service)
    ///
    /// # Errors
    /// [`DirectoryConfigError::MissingApiKey`] when the key is absent,
    /// [`DirectoryConfigError::InvalidBaseUrl`] for a non-HTTP base URL.
    pub fn from_env() -> RecipeDirectoryResult<Self> {
        let api_key = std::env::var("SPOONACULAR_API_KEY")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .ok_or(DirectoryConfigError::MissingApiKey)?;

        let base_api = std::env::var("SPOONACULAR_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| "https://api.spoonacular.com".to_string());

        if !(base_api.starts_with("http://") || base_api.starts_with("https://")) {
            return Err(DirectoryConfigError::InvalidBaseUrl(base_api).into());
        }

        Ok(Self::new(Client::new(), base_api, api_key))
    }

    /// Searches recipes by name, returning hits in the upstream ranking
    /// order. An empty result sequence means zero matches and is valid.
    ///
    /// # Errors
    /// [`crate::UpstreamError`] on non-success status or malformed JSON.
    pub async fn search_recipes(
        &self,
        name: &str,
        limit: u32,
    ) -> RecipeDirectoryResult<Vec<RecipeSummary>> {
        let url = format!(
            "{}/recipes/complexSearch?query={}&number={}&apiKey={}",
            self.base_api,
            urlencoding::encode(name),
            limit,
            self.api_key
        );
        debug!(
            "GET {}/recipes/complexSearch?query={}&number={}",
            self.base_api,
            urlencoding::encode(name),
            limit
        );

        let payload: SearchPayload = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        debug!(hits = payload.results.len(), "search completed");
        Ok(payload.results)
    }

    /// Fetches the full detail for one recipe id.
    ///
    /// # Errors
    /// [`crate::UpstreamError`] on non-success status or malformed JSON;
    /// [`crate::RecipeDirectoryError::IncompleteData`] when the payload
    /// lacks `id` or `title` (recoverable; the caller may skip).
    pub async fn fetch_detail(&self, id: i64) -> RecipeDirectoryResult<DetailedRecipe> {
        let url = format!(
            "{}/recipes/{}/information?apiKey={}",
            self.base_api, id, self.api_key
        );
        debug!("GET {}/recipes/{}/information", self.base_api, id);

        let payload: DetailPayload = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        DetailedRecipe::from_payload(payload)
    }
}
