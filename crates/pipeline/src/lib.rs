//! Lead capture pipeline for Voicelead.
//!
//! This crate provides the [`Pipeline`] type which runs one capture pass
//! over a finished conversation:
//!
//! ```text
//! conversation id
//!        ↓
//! ┌─────────────────────────────────────────────────┐
//! │                    PIPELINE                     │
//! │                                                 │
//! │  1. Fetch messages (TranscriptSource)           │
//! │         ↓                                       │
//! │  2. Assemble transcript (newline-joined)        │
//! │         ↓                                       │
//! │  3. Extract name + email (pattern tables)       │
//! │         ↓                                       │
//! │  4. Notify webhook (best-effort, never fatal)   │
//! │         ↓                                       │
//! │  5. Persist lead (SQLite)                       │
//! └─────────────────────────────────────────────────┘
//!        ↓
//! LeadCapture { name, email, transcript }
//! ```
//!
//! Stages run strictly in order with no parallelism. A fetch failure
//! aborts the pass before anything is sent or written; a webhook failure
//! is logged and the pass continues; a store failure is fatal, by which
//! point the webhook may already have fired (at-most-once delivery, no
//! compensating action).
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//!
//! use conversation_api::{ApiConfig, ConversationClient};
//! use database::Database;
//! use pipeline::Pipeline;
//! use webhook::WebhookNotifier;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ConversationClient::new(ApiConfig::from_env()?)?;
//!     let db = Database::connect("sqlite:leads.db?mode=rwc").await?;
//!     db.initialize().await?;
//!
//!     let pipeline = Pipeline::new(
//!         Arc::new(client),
//!         WebhookNotifier::new("https://hooks.example.com/leads"),
//!         db,
//!     );
//!
//!     let capture = pipeline.process("c-123").await?;
//!     println!("name: {:?}, email: {:?}", capture.name, capture.email);
//!     Ok(())
//! }
//! ```

mod error;
mod pipeline;
mod source;

pub use error::PipelineError;
pub use pipeline::{LeadCapture, Pipeline};
pub use source::{EmptySource, StaticSource, TranscriptSource};

// Re-export commonly used types from dependencies
pub use webhook::{DeliveryOutcome, WebhookNotifier};
