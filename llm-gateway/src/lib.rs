//! Chat LLM gateway with two providers: **Groq** (hosted, OpenAI-compatible
//! API) and **Ollama** (local runtime).
//!
//! The gateway accepts a structured prompt, an ordered list of
//! [`ChatTurn`]s (system instruction, prior turns, final user text), and
//! returns the model's free-form answer as plain text. Streaming is not
//! used anywhere; every call is a single request/response pair.
//!
//! Construct once (usually via [`LlmGateway::from_env`]), wrap in `Arc`,
//! and pass clones to dependents.

pub mod chat;
pub mod config;
pub mod error_handler;
pub mod gateway;
pub mod health_service;
pub mod services;
pub mod telemetry;

pub use chat::{ChatRole, ChatTurn};
pub use config::chat_model_config::ChatModelConfig;
pub use config::chat_provider::ChatProvider;
pub use error_handler::{LlmGatewayError, Result};
pub use gateway::LlmGateway;
pub use health_service::{HealthService, HealthStatus};
