//! Webhook payload construction.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// JSON body delivered to the webhook endpoint.
///
/// Missed extractions are sent as empty strings rather than nulls so the
/// receiving side always sees the same shape.
#[derive(Debug, Clone, Serialize)]
pub struct LeadPayload {
    /// Identifier of the source conversation.
    pub conversation_id: String,
    /// Extracted name, or empty when no pattern matched.
    pub name: String,
    /// Extracted email, or empty when no pattern matched.
    pub email: String,
    /// Full transcript text.
    pub transcript: String,
    /// UTC ISO-8601 timestamp taken at send time.
    pub timestamp: String,
}

impl LeadPayload {
    /// Build a payload for a conversation, stamped with the current time.
    pub fn new(
        conversation_id: &str,
        name: Option<&str>,
        email: Option<&str>,
        transcript: &str,
    ) -> Self {
        Self {
            conversation_id: conversation_id.to_string(),
            name: name.unwrap_or_default().to_string(),
            email: email.unwrap_or_default().to_string(),
            transcript: transcript.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}
