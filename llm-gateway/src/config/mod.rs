pub mod chat_model_config;
pub mod chat_provider;
pub mod default_config;
