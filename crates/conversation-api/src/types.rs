//! Wire types for the conversation service.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body for creating a conversation.
#[derive(Debug, Clone, Serialize)]
pub struct CreateConversationRequest {
    /// Persona that runs the conversation.
    pub persona_id: String,
    /// Replica that joins the call.
    pub replica_id: String,
    /// Optional webhook URL for conversation lifecycle events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    /// When true, the conversation is created without the replica joining
    /// (no call costs).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_mode: Option<bool>,
}

impl CreateConversationRequest {
    /// Create a request for the given persona and replica.
    pub fn new(persona_id: impl Into<String>, replica_id: impl Into<String>) -> Self {
        Self {
            persona_id: persona_id.into(),
            replica_id: replica_id.into(),
            callback_url: None,
            test_mode: None,
        }
    }

    /// Builder method to set the lifecycle callback URL.
    pub fn with_callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }

    /// Builder method to enable test mode.
    pub fn with_test_mode(mut self, test_mode: bool) -> Self {
        self.test_mode = Some(test_mode);
        self
    }
}

/// A conversation created on the service.
#[derive(Debug, Clone, Deserialize)]
pub struct Conversation {
    /// Service-assigned conversation id.
    pub conversation_id: String,
    /// URL for embedding the live call.
    #[serde(default)]
    pub conversation_url: Option<String>,
    /// Service-reported status.
    #[serde(default)]
    pub status: Option<String>,
}

/// Messages response from the service.
///
/// The service returns either an envelope with a `data` array or a bare
/// list; anything else is treated as having no messages.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum MessagesResponse {
    /// Object with a data field.
    Envelope { data: Vec<Value> },
    /// Plain list response.
    List(Vec<Value>),
    /// Any other shape.
    Other(Value),
}

impl MessagesResponse {
    pub(crate) fn into_messages(self) -> Vec<Value> {
        match self {
            MessagesResponse::Envelope { data } => data,
            MessagesResponse::List(list) => list,
            MessagesResponse::Other(_) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_skips_unset_fields() {
        let request = CreateConversationRequest::new("p-1", "r-1");
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, json!({"persona_id": "p-1", "replica_id": "r-1"}));

        let request = CreateConversationRequest::new("p-1", "r-1")
            .with_callback_url("https://hooks.example.com/events")
            .with_test_mode(true);
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["callback_url"], "https://hooks.example.com/events");
        assert_eq!(body["test_mode"], true);
    }

    #[test]
    fn test_messages_response_envelope() {
        let body = json!({"data": [{"text": "hi"}]});
        let parsed: MessagesResponse = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.into_messages().len(), 1);
    }

    #[test]
    fn test_messages_response_bare_list() {
        let body = json!([{"text": "hi"}, {"text": "there"}]);
        let parsed: MessagesResponse = serde_json::from_value(body).unwrap();
        assert_eq!(parsed.into_messages().len(), 2);
    }

    #[test]
    fn test_messages_response_unexpected_shape() {
        let body = json!({"status": "pending"});
        let parsed: MessagesResponse = serde_json::from_value(body).unwrap();
        assert!(parsed.into_messages().is_empty());
    }

    #[test]
    fn test_conversation_tolerates_missing_fields() {
        let body = json!({"conversation_id": "c-9"});
        let conversation: Conversation = serde_json::from_value(body).unwrap();
        assert_eq!(conversation.conversation_id, "c-9");
        assert_eq!(conversation.conversation_url, None);
        assert_eq!(conversation.status, None);
    }
}
