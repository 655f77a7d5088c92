//! Shared state for all HTTP handlers.

use std::{collections::HashMap, sync::Arc};

use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use cooking_pipeline::assistant::RecipeAssistant;
use llm_gateway::{HealthService, LlmGateway};
use recipe_directory::RecipeDirectoryClient;

use crate::error_handler::AppError;

/// Shared application state.
///
/// One assistant instance per open conversation session; sessions are
/// fully independent of each other (no cross-session sharing). Each
/// assistant sits behind its own `Mutex` so only one caller at a time
/// can drive a given session; the core itself requires no locking.
pub struct AppState {
    /// Chat gateway, shared by the pipeline and all assistants.
    pub llm: Arc<LlmGateway>,
    /// Upstream recipe directory client.
    pub directory: RecipeDirectoryClient,
    /// Candidates requested per search.
    pub search_limit: u32,
    /// Provider health prober for `/health`.
    pub health: HealthService,
    /// Open conversation sessions keyed by id.
    pub sessions: RwLock<HashMap<Uuid, Arc<Mutex<RecipeAssistant>>>>,
}

impl AppState {
    /// Loads shared state from environment variables.
    ///
    /// # Errors
    /// [`AppError::Startup`] when the gateway or directory config is
    /// missing/invalid.
    pub fn from_env() -> Result<Self, AppError> {
        let llm = LlmGateway::from_env().map_err(|e| AppError::Startup(e.to_string()))?;
        let directory =
            RecipeDirectoryClient::from_env().map_err(|e| AppError::Startup(e.to_string()))?;
        let health = HealthService::new(Some(10)).map_err(|e| AppError::Startup(e.to_string()))?;

        let search_limit = std::env::var("SEARCH_LIMIT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(cooking_pipeline::DEFAULT_SEARCH_LIMIT);

        Ok(Self {
            llm: Arc::new(llm),
            directory,
            search_limit,
            health,
            sessions: RwLock::new(HashMap::new()),
        })
    }

    /// Registers a new session and returns its id.
    pub async fn insert_session(&self, assistant: RecipeAssistant) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions
            .write()
            .await
            .insert(id, Arc::new(Mutex::new(assistant)));
        id
    }

    /// Looks up an open session.
    pub async fn session(&self, id: &Uuid) -> Option<Arc<Mutex<RecipeAssistant>>> {
        self.sessions.read().await.get(id).cloned()
    }
}
