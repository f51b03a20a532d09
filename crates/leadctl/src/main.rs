use std::env;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;

use conversation_api::{ApiConfig, ConversationClient};
use database::{lead, Database};
use pipeline::Pipeline;
use webhook::WebhookNotifier;

/// Default SQLite URL for the lead store.
const DEFAULT_DATABASE_URL: &str = "sqlite:leads.db?mode=rwc";

#[derive(Debug, Parser)]
#[command(name = "leadctl")]
#[command(about = "Capture and inspect leads extracted from voice conversations")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run one capture pass for a finished conversation
    Capture {
        /// Conversation id on the hosted service
        conversation_id: String,
    },
    /// List captured leads, most recent first
    Leads,
    /// Print the total number of captured leads
    Count,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let database_url =
        env::var("LEADS_DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
    let db = Database::connect(&database_url).await?;
    db.initialize().await?;

    match args.command {
        Command::Capture { conversation_id } => {
            let client = ConversationClient::new(ApiConfig::from_env()?)?;
            let notifier = WebhookNotifier::from_endpoint(env::var("WEBHOOK_URL").ok());
            if !notifier.is_configured() {
                info!("WEBHOOK_URL not set, lead delivery disabled");
            }

            let pipeline = Pipeline::new(Arc::new(client), notifier, db.clone());
            let capture = pipeline.process(&conversation_id).await?;

            println!("Conversation: {conversation_id}");
            println!("  Name:  {}", capture.name.as_deref().unwrap_or("not found"));
            println!("  Email: {}", capture.email.as_deref().unwrap_or("not found"));
        }
        Command::Leads => {
            let leads = lead::list_leads(db.pool()).await?;
            if leads.is_empty() {
                println!("No leads captured yet");
            }
            for entry in leads {
                println!(
                    "#{} {} name={} email={} ts={}",
                    entry.id,
                    entry.conv_id,
                    entry.name.as_deref().unwrap_or("-"),
                    entry.email.as_deref().unwrap_or("-"),
                    entry.ts.as_deref().unwrap_or("-"),
                );
            }
        }
        Command::Count => {
            let count = lead::count_leads(db.pool()).await?;
            println!("{count}");
        }
    }

    db.close().await;
    Ok(())
}
