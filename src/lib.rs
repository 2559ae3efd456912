//! Mood journal core: mood, journal and chat records with durable storage,
//! mood analytics, a recommendation catalog and a scripted support chat.

pub mod config;
pub mod dto;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;
pub mod store;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{ChatMessage, JournalEntry, Mood, MoodLabel, Sender, Snapshot};
pub use services::chat::ChatSession;
pub use store::RecordStore;

use tracing_subscriber::EnvFilter;

/// Installs the JSON tracing subscriber. `RUST_LOG` overrides `default_filter`.
/// Fails if a global subscriber is already set.
pub fn init_tracing(default_filter: &str) -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .json()
        .try_init()
        .map_err(|e| {
            AppError::Internal(anyhow::anyhow!("Failed to install tracing subscriber: {e}"))
        })
}
