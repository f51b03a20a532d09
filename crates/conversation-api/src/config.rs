//! Configuration types for the conversation service client.

use std::env;

use crate::error::ApiError;

/// Default base URL of the hosted conversation service.
pub const DEFAULT_BASE_URL: &str = "https://tavusapi.com";

/// Configuration for the conversation service client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the service (e.g., "https://tavusapi.com").
    pub base_url: String,
    /// API key sent as the x-api-key header.
    pub api_key: String,
}

impl ApiConfig {
    /// Create a configuration for the hosted service with the given key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Create a configuration with an explicit base URL.
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// Required:
    /// - `CONVERSATION_API_KEY` - API key for the conversation service
    ///
    /// Optional (with defaults):
    /// - `CONVERSATION_API_URL` - Default: https://tavusapi.com
    pub fn from_env() -> Result<Self, ApiError> {
        let api_key = env::var("CONVERSATION_API_KEY")
            .map_err(|_| ApiError::MissingEnvVar("CONVERSATION_API_KEY".to_string()))?;

        let base_url =
            env::var("CONVERSATION_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self { base_url, api_key })
    }

    /// Get the conversations collection URL.
    pub fn conversations_url(&self) -> String {
        format!("{}/v2/conversations", self.base_url)
    }

    /// Get the messages URL for a conversation.
    pub fn messages_url(&self, conversation_id: &str) -> String {
        format!("{}/v2/conversations/{}/messages", self.base_url, conversation_id)
    }

    /// Get the end-conversation URL.
    pub fn end_url(&self, conversation_id: &str) -> String {
        format!("{}/v2/conversations/{}/end", self.base_url, conversation_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let config = ApiConfig::new("key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api_key, "key");
    }

    #[test]
    fn test_url_builders() {
        let config = ApiConfig::with_base_url("http://localhost:8080", "key");
        assert_eq!(config.conversations_url(), "http://localhost:8080/v2/conversations");
        assert_eq!(
            config.messages_url("c-1"),
            "http://localhost:8080/v2/conversations/c-1/messages"
        );
        assert_eq!(config.end_url("c-1"), "http://localhost:8080/v2/conversations/c-1/end");
    }
}
