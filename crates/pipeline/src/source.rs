//! Transcript source trait and implementations.

use async_trait::async_trait;
use conversation_api::ConversationClient;
use serde_json::Value;

use crate::error::PipelineError;

/// Trait for fetching a conversation's messages.
///
/// Abstracted to support different sources (the hosted service, tests, etc.)
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Fetch the messages of a conversation in delivery order.
    ///
    /// An unknown or not-yet-started conversation yields an empty list;
    /// only transport-level failures are errors.
    async fn conversation_messages(
        &self,
        conversation_id: &str,
    ) -> Result<Vec<Value>, PipelineError>;
}

#[async_trait]
impl TranscriptSource for ConversationClient {
    async fn conversation_messages(
        &self,
        conversation_id: &str,
    ) -> Result<Vec<Value>, PipelineError> {
        ConversationClient::conversation_messages(self, conversation_id)
            .await
            .map_err(|e| PipelineError::Fetch(e.to_string()))
    }
}

/// A source that returns the same canned messages for every conversation.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    messages: Vec<Value>,
}

impl StaticSource {
    /// Create a source over the given messages.
    pub fn new(messages: Vec<Value>) -> Self {
        Self { messages }
    }
}

#[async_trait]
impl TranscriptSource for StaticSource {
    async fn conversation_messages(
        &self,
        _conversation_id: &str,
    ) -> Result<Vec<Value>, PipelineError> {
        Ok(self.messages.clone())
    }
}

/// A source with no messages for any conversation.
#[derive(Debug, Clone, Default)]
pub struct EmptySource;

#[async_trait]
impl TranscriptSource for EmptySource {
    async fn conversation_messages(
        &self,
        _conversation_id: &str,
    ) -> Result<Vec<Value>, PipelineError> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_static_source_replays_messages() {
        let source = StaticSource::new(vec![json!({"text": "hello"})]);
        let messages = source.conversation_messages("any").await.unwrap();
        assert_eq!(messages.len(), 1);
    }

    #[tokio::test]
    async fn test_empty_source() {
        let messages = EmptySource.conversation_messages("any").await.unwrap();
        assert!(messages.is_empty());
    }
}
