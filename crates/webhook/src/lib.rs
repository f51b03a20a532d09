//! Best-effort webhook delivery of captured leads.
//!
//! This crate provides the [`WebhookNotifier`] type: one HTTP POST per
//! captured lead to an externally configured endpoint, with a short
//! timeout and no retry. Delivery is at-most-once by design — a failed
//! attempt is logged and reported through [`DeliveryOutcome`], never as
//! an error, so callers can always continue.

mod notifier;
mod payload;

pub use notifier::{DeliveryOutcome, WebhookNotifier};
pub use payload::LeadPayload;
