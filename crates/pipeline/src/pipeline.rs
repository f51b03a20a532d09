//! The capture pass itself.

use std::sync::Arc;

use database::{lead, Database};
use extraction::{assemble_transcript, extract_email, extract_name};
use tracing::{info, warn};
use webhook::{DeliveryOutcome, WebhookNotifier};

use crate::error::PipelineError;
use crate::source::TranscriptSource;

/// Result of one capture pass over a conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadCapture {
    /// Extracted name, if a name pattern matched.
    pub name: Option<String>,
    /// Extracted email, if the email pattern matched.
    pub email: Option<String>,
    /// The assembled transcript the fields were extracted from.
    pub transcript: String,
}

/// Sequences one capture pass: fetch, assemble, extract, notify, persist.
pub struct Pipeline {
    source: Arc<dyn TranscriptSource>,
    notifier: WebhookNotifier,
    db: Database,
}

impl Pipeline {
    /// Create a pipeline over a transcript source, notifier and store.
    pub fn new(source: Arc<dyn TranscriptSource>, notifier: WebhookNotifier, db: Database) -> Self {
        Self {
            source,
            notifier,
            db,
        }
    }

    /// Run one capture pass for a conversation.
    ///
    /// A conversation with no messages still runs to completion: the
    /// transcript is empty, both fields are null, and a lead row is
    /// written. A fetch failure aborts before anything is sent or
    /// persisted; a webhook failure is logged and the run continues.
    pub async fn process(&self, conversation_id: &str) -> Result<LeadCapture, PipelineError> {
        let messages = self.source.conversation_messages(conversation_id).await?;
        let transcript = assemble_transcript(&messages);

        let name = extract_name(&transcript);
        let email = extract_email(&transcript);
        info!(
            "Extracted from conversation {}: name={}, email={}",
            conversation_id,
            name.as_deref().unwrap_or("not found"),
            email.as_deref().unwrap_or("not found")
        );

        let outcome = self
            .notifier
            .notify(conversation_id, name.as_deref(), email.as_deref(), &transcript)
            .await;
        if outcome == DeliveryOutcome::Failed {
            warn!(
                "Webhook delivery failed for conversation {}, continuing",
                conversation_id
            );
        }

        let lead_id = lead::save_lead(
            self.db.pool(),
            conversation_id,
            name.as_deref(),
            email.as_deref(),
        )
        .await?;
        info!("Saved lead #{} for conversation {}", lead_id, conversation_id);

        Ok(LeadCapture {
            name,
            email,
            transcript,
        })
    }
}
