//! Outbound requests: sendMessage and command registration.

use super::types::TgResponse;
use super::TelegramChannel;
use codemedic_core::error::MedicError;
use serde_json::json;
use tracing::{debug, warn};

/// Telegram caps messages at 4096 UTF-8 encoded characters.
const MAX_MESSAGE_LEN: usize = 4096;

impl TelegramChannel {
    /// Send a text message with Markdown formatting.
    ///
    /// Replies carry literal `**bold**` and backtick spans from the advice
    /// blocks; if Telegram rejects the entities, retry once as plain text
    /// so the reply is never silently dropped.
    pub(crate) async fn send_text(&self, chat_id: i64, text: &str) -> Result<(), MedicError> {
        for chunk in split_message(text, MAX_MESSAGE_LEN) {
            match self.send_chunk(chat_id, chunk, Some("Markdown")).await {
                Ok(()) => {}
                Err(e) => {
                    warn!("markdown send failed ({e}), retrying as plain text");
                    self.send_chunk(chat_id, chunk, None).await?;
                }
            }
        }
        Ok(())
    }

    async fn send_chunk(
        &self,
        chat_id: i64,
        text: &str,
        parse_mode: Option<&str>,
    ) -> Result<(), MedicError> {
        let url = format!("{}/sendMessage", self.base_url);
        let mut payload = json!({
            "chat_id": chat_id,
            "text": text,
        });
        if let Some(mode) = parse_mode {
            payload["parse_mode"] = json!(mode);
        }

        let resp: TgResponse<serde_json::Value> = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| MedicError::Channel(format!("telegram sendMessage failed: {e}")))?
            .json()
            .await
            .map_err(|e| MedicError::Channel(format!("telegram sendMessage parse failed: {e}")))?;

        if !resp.ok {
            return Err(MedicError::Channel(format!(
                "telegram sendMessage rejected: {}",
                resp.description.unwrap_or_default()
            )));
        }
        Ok(())
    }

    /// Register the bot's slash commands so Telegram shows them in the UI.
    /// Failure is non-fatal; the bot still answers unregistered commands.
    pub(crate) async fn register_commands(&self) {
        let url = format!("{}/setMyCommands", self.base_url);
        let payload = json!({
            "commands": [
                { "command": "start", "description": "Welcome message and supported languages" },
                { "command": "help", "description": "How to describe your error" },
            ]
        });

        match self.client.post(&url).json(&payload).send().await {
            Ok(_) => debug!("telegram commands registered"),
            Err(e) => warn!("failed to register telegram commands: {e}"),
        }
    }
}

/// Split a message into chunks below Telegram's size cap, preferring to
/// break at line boundaries.
fn split_message(text: &str, max_len: usize) -> Vec<&str> {
    if text.chars().count() <= max_len {
        return vec![text];
    }

    let mut chunks = Vec::new();
    let mut rest = text;
    while rest.chars().count() > max_len {
        let byte_cap = rest
            .char_indices()
            .nth(max_len)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let cut = rest[..byte_cap].rfind('\n').unwrap_or(byte_cap);
        let (head, tail) = rest.split_at(cut);
        if !head.is_empty() {
            chunks.push(head);
        }
        rest = tail.trim_start_matches('\n');
    }
    if !rest.is_empty() {
        chunks.push(rest);
    }
    chunks
}
