//! Capability seams for the two external collaborators.
//!
//! The orchestrator and the assistant are generic over these traits so
//! every stage is testable against in-memory fakes. Production
//! implementations are provided for [`llm_gateway::LlmGateway`] and
//! [`recipe_directory::RecipeDirectoryClient`].

use async_trait::async_trait;

use llm_gateway::{ChatTurn, LlmGateway, LlmGatewayError};
use recipe_directory::{
    DetailedRecipe, RecipeDirectoryClient, RecipeDirectoryResult, RecipeSummary,
};

/// A language model reachable through an ordered chat-turn prompt.
///
/// Failures are opaque transport/quota/decode errors; callers decide
/// whether to propagate (extraction) or mask (assistant).
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Sends the ordered turn history, returns the answer text.
    async fn chat(&self, turns: &[ChatTurn]) -> Result<String, LlmGatewayError>;
}

#[async_trait]
impl ChatModel for LlmGateway {
    async fn chat(&self, turns: &[ChatTurn]) -> Result<String, LlmGatewayError> {
        LlmGateway::chat(self, turns).await
    }
}

/// The upstream recipe directory: ranked search plus per-id detail.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Searches recipes by name; empty result means zero matches.
    async fn search_recipes(
        &self,
        name: &str,
        limit: u32,
    ) -> RecipeDirectoryResult<Vec<RecipeSummary>>;

    /// Fetches the full detail for one recipe id.
    async fn fetch_detail(&self, id: i64) -> RecipeDirectoryResult<DetailedRecipe>;
}

#[async_trait]
impl RecipeSource for RecipeDirectoryClient {
    async fn search_recipes(
        &self,
        name: &str,
        limit: u32,
    ) -> RecipeDirectoryResult<Vec<RecipeSummary>> {
        RecipeDirectoryClient::search_recipes(self, name, limit).await
    }

    async fn fetch_detail(&self, id: i64) -> RecipeDirectoryResult<DetailedRecipe> {
        RecipeDirectoryClient::fetch_detail(self, id).await
    }
}
