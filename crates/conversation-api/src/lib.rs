//! HTTP client for the hosted conversation service.
//!
//! The conversation service runs the voice calls; this crate only talks to
//! its fixed REST contract. It provides:
//!
//! - [`ConversationClient`] - transcript fetch plus conversation lifecycle
//! - [`ApiConfig`] - endpoint and credential configuration
//! - [`ApiError`] - error types for client operations
//!
//! # Example
//!
//! ```rust,ignore
//! use conversation_api::{ApiConfig, ConversationClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ConversationClient::new(ApiConfig::from_env()?)?;
//!
//!     let messages = client.conversation_messages("c-123").await?;
//!     println!("{} messages", messages.len());
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod types;

pub use client::ConversationClient;
pub use config::{ApiConfig, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use types::{Conversation, CreateConversationRequest};
