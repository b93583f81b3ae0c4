mod chat_completions_client;
mod llm_client_factory;
mod mock_llm_client;
mod ollama_client;

pub use chat_completions_client::ChatCompletionsClient;
pub use llm_client_factory::{LlmClientFactory, LlmClientFactoryError};
pub use mock_llm_client::MockLlmClient;
pub use ollama_client::OllamaClient;
