//! Telegram Bot API channel.
//!
//! One long-polling task reads updates via `getUpdates`; diagnosis replies
//! go back out through `sendMessage` with Markdown formatting. Only the
//! handful of Bot API methods the bot needs are wired up.
//! Docs: <https://core.telegram.org/bots/api>

mod polling;
pub(crate) mod send;
pub(crate) mod types;

#[cfg(test)]
mod tests;

use codemedic_core::config::TelegramConfig;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Telegram channel using the Bot API with long polling.
pub struct TelegramChannel {
    client: reqwest::Client,
    /// API root with the bot token baked in.
    base_url: String,
    /// User IDs allowed to talk to the bot. Empty = allow all.
    allowed_users: Vec<i64>,
    /// Tracks the last update_id to avoid reprocessing.
    last_update_id: Arc<Mutex<Option<i64>>>,
}

impl TelegramChannel {
    /// Build a channel from config. Nothing beyond the token and the user
    /// allowlist is kept around.
    pub fn new(config: TelegramConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: format!("https://api.telegram.org/bot{}", config.bot_token),
            allowed_users: config.allowed_users,
            last_update_id: Arc::new(Mutex::new(None)),
        }
    }
}
