//! Conversation service HTTP client.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, info};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::types::{Conversation, CreateConversationRequest, MessagesResponse};

/// Request timeout for calls to the conversation service.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Header carrying the API key.
const API_KEY_HEADER: &str = "x-api-key";

/// Client for the hosted conversation service.
#[derive(Debug, Clone)]
pub struct ConversationClient {
    http: Client,
    config: ApiConfig,
}

impl ConversationClient {
    /// Create a new client for the given configuration.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ApiError::Http)?;

        Ok(Self { http, config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetch all messages of a conversation, in delivery order.
    ///
    /// An empty conversation id is a no-op and returns an empty list
    /// without touching the network. A 404 from the service means the
    /// conversation has no messages yet and also yields an empty list;
    /// any other failure is surfaced to the caller.
    pub async fn conversation_messages(
        &self,
        conversation_id: &str,
    ) -> Result<Vec<Value>, ApiError> {
        if conversation_id.trim().is_empty() {
            debug!("No conversation id provided, skipping message fetch");
            return Ok(Vec::new());
        }

        let url = self.config.messages_url(conversation_id);
        debug!("Fetching messages: {}", url);

        let response = self
            .http
            .get(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .send()
            .await
            .map_err(ApiError::Http)?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!("Conversation {} has no messages yet", conversation_id);
            return Ok(Vec::new());
        }

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: MessagesResponse = response.json().await.map_err(ApiError::Http)?;
        Ok(parsed.into_messages())
    }

    /// Create a new conversation on the service.
    pub async fn create_conversation(
        &self,
        request: &CreateConversationRequest,
    ) -> Result<Conversation, ApiError> {
        let url = self.config.conversations_url();

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(request)
            .send()
            .await
            .map_err(ApiError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let conversation: Conversation = response.json().await.map_err(ApiError::Http)?;
        info!("Created conversation {}", conversation.conversation_id);
        Ok(conversation)
    }

    /// End an active conversation.
    ///
    /// The service may answer a successful end with an empty or non-JSON
    /// body; only the status code is interpreted.
    pub async fn end_conversation(&self, conversation_id: &str) -> Result<(), ApiError> {
        if conversation_id.trim().is_empty() {
            return Err(ApiError::MissingConversationId);
        }

        let url = self.config.end_url(conversation_id);

        let response = self
            .http
            .post(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .send()
            .await
            .map_err(ApiError::Http)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        info!("Ended conversation {}", conversation_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_blank_conversation_id_is_a_no_op() {
        let client = ConversationClient::new(ApiConfig::new("key")).unwrap();

        // No network call is made for a missing id.
        assert!(client.conversation_messages("").await.unwrap().is_empty());
        assert!(client.conversation_messages("   ").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_end_requires_conversation_id() {
        let client = ConversationClient::new(ApiConfig::new("key")).unwrap();
        let result = client.end_conversation("").await;
        assert!(matches!(result, Err(ApiError::MissingConversationId)));
    }
}
