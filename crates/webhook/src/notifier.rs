//! Lead delivery to a configured webhook endpoint.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info, warn};

use crate::payload::LeadPayload;

/// Timeout for a single delivery attempt.
const DELIVERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Outcome of one delivery attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The endpoint acknowledged the payload with a success status.
    Delivered,
    /// No endpoint is configured; nothing was sent.
    Skipped,
    /// The attempt failed (timeout, transport error, or error status).
    Failed,
}

/// Best-effort, at-most-once notifier for captured leads.
///
/// The destination endpoint is injected at construction; a notifier built
/// with [`WebhookNotifier::disabled`] skips every send. Failures are
/// logged and reported through [`DeliveryOutcome`], never raised — there
/// is no retry and no queueing.
#[derive(Debug, Clone)]
pub struct WebhookNotifier {
    http: Client,
    endpoint: Option<String>,
}

impl WebhookNotifier {
    /// Create a notifier targeting the given endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: Some(endpoint.into()),
        }
    }

    /// Create a notifier with no endpoint; every send is skipped.
    pub fn disabled() -> Self {
        Self {
            http: Client::new(),
            endpoint: None,
        }
    }

    /// Create a notifier from an optional endpoint (e.g., an env lookup).
    pub fn from_endpoint(endpoint: Option<String>) -> Self {
        match endpoint {
            Some(url) if !url.trim().is_empty() => Self::new(url),
            _ => Self::disabled(),
        }
    }

    /// Whether a destination endpoint is configured.
    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some()
    }

    /// Deliver a captured lead to the configured endpoint.
    ///
    /// Sends a single POST with a short timeout. Missed name/email fields
    /// are serialized as empty strings.
    pub async fn notify(
        &self,
        conversation_id: &str,
        name: Option<&str>,
        email: Option<&str>,
        transcript: &str,
    ) -> DeliveryOutcome {
        let Some(endpoint) = &self.endpoint else {
            debug!("No webhook endpoint configured, skipping delivery");
            return DeliveryOutcome::Skipped;
        };

        let payload = LeadPayload::new(conversation_id, name, email, transcript);

        let result = self
            .http
            .post(endpoint)
            .timeout(DELIVERY_TIMEOUT)
            .json(&payload)
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                info!("Webhook delivered for conversation {}", conversation_id);
                DeliveryOutcome::Delivered
            }
            Ok(response) => {
                warn!(
                    "Webhook for conversation {} answered HTTP {}",
                    conversation_id,
                    response.status()
                );
                DeliveryOutcome::Failed
            }
            Err(e) if e.is_timeout() => {
                warn!("Webhook timeout for conversation {}", conversation_id);
                DeliveryOutcome::Failed
            }
            Err(e) => {
                warn!("Webhook failed for conversation {}: {}", conversation_id, e);
                DeliveryOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_notifier_skips() {
        let notifier = WebhookNotifier::disabled();
        assert!(!notifier.is_configured());

        let outcome = notifier.notify("c-1", Some("John"), None, "hi").await;
        assert_eq!(outcome, DeliveryOutcome::Skipped);
    }

    #[tokio::test]
    async fn test_blank_endpoint_counts_as_unconfigured() {
        let notifier = WebhookNotifier::from_endpoint(Some("  ".to_string()));
        assert!(!notifier.is_configured());

        let notifier = WebhookNotifier::from_endpoint(None);
        assert!(!notifier.is_configured());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_fails_without_error() {
        // Nothing listens on the discard port; the connection is refused.
        let notifier = WebhookNotifier::new("http://127.0.0.1:9/hook");
        let outcome = notifier.notify("c-1", None, None, "").await;
        assert_eq!(outcome, DeliveryOutcome::Failed);
    }
}
