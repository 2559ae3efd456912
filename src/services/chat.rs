use std::sync::Arc;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::Instant;

use crate::config::Config;
use crate::error::AppResult;
use crate::models::{ChatMessage, Sender};
use crate::services::chatbot::{self, WELCOME_MESSAGE};
use crate::store::RecordStore;

pub type SharedStore = Arc<Mutex<RecordStore>>;
pub type SharedRng = Arc<Mutex<Box<dyn RngCore + Send>>>;

/// Pending deferred append. Awaiting it is optional; the append happens either way.
pub type PendingReply = JoinHandle<AppResult<()>>;

/// Conversation with the scripted assistant.
///
/// Each reply is scheduled on its own task, due `reply_delay` after its user
/// message. Replies are not serialized against each other or against later
/// user messages: a reply can land after a message sent while it was pending.
/// Message timestamps come from the store clock.
#[derive(Clone)]
pub struct ChatSession {
    store: SharedStore,
    rng: SharedRng,
    reply_delay: Duration,
    welcome_delay: Duration,
}

impl ChatSession {
    pub fn new(store: SharedStore, rng: Box<dyn RngCore + Send>, config: &Config) -> Self {
        Self {
            store,
            rng: Arc::new(Mutex::new(rng)),
            reply_delay: config.chat_reply_delay(),
            welcome_delay: config.chat_welcome_delay(),
        }
    }

    /// Production wiring: entropy-seeded rng.
    pub fn from_config(store: SharedStore, config: &Config) -> Self {
        Self::new(store, Box::new(StdRng::from_entropy()), config)
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    /// Appends the user message now and schedules the bot reply.
    /// Blank input is ignored and returns `None`.
    pub async fn send(&self, text: &str) -> AppResult<Option<PendingReply>> {
        if text.trim().is_empty() {
            return Ok(None);
        }

        let deadline = Instant::now() + self.reply_delay;
        {
            let mut store = self.store.lock().await;
            let now = store.now();
            store.add_chat_message(ChatMessage::sent_at(text, Sender::User, now))?;
        }

        let content = text.to_string();
        let store = self.store.clone();
        let rng = self.rng.clone();

        Ok(Some(tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;

            let category = chatbot::classify(&content);
            let reply = {
                let mut rng = rng.lock().await;
                chatbot::respond(category, &mut **rng)
            };
            tracing::debug!(?category, "Bot reply ready");

            append_bot(&store, reply).await
        })))
    }

    /// Greets an empty conversation. Returns whether a message was added.
    pub async fn ensure_welcome(&self) -> AppResult<bool> {
        let mut store = self.store.lock().await;
        if !store.chat_messages().is_empty() {
            return Ok(false);
        }
        let now = store.now();
        store.add_chat_message(ChatMessage::sent_at(WELCOME_MESSAGE, Sender::Bot, now))?;
        Ok(true)
    }

    /// Clears history and greets again. With prior history the greeting is
    /// deferred by `welcome_delay`; otherwise it is appended immediately.
    pub async fn start_new_chat(&self) -> AppResult<Option<PendingReply>> {
        let mut store = self.store.lock().await;
        if store.chat_messages().is_empty() {
            let now = store.now();
            store.add_chat_message(ChatMessage::sent_at(WELCOME_MESSAGE, Sender::Bot, now))?;
            return Ok(None);
        }

        store.clear_chat_messages()?;
        drop(store);

        let deadline = Instant::now() + self.welcome_delay;
        let store = self.store.clone();
        Ok(Some(tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            append_bot(&store, WELCOME_MESSAGE).await
        })))
    }

    /// Waits for a scheduled append and surfaces its outcome.
    pub async fn settle(pending: PendingReply) -> AppResult<()> {
        pending.await.map_err(anyhow::Error::from)?
    }
}

async fn append_bot(store: &SharedStore, content: &str) -> AppResult<()> {
    let mut store = store.lock().await;
    let now = store.now();
    store.add_chat_message(ChatMessage::sent_at(content, Sender::Bot, now))
}
