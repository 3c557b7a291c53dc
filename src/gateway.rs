//! Gateway — the event loop connecting channels to the classifier.
//!
//! Fans every channel's receiver into one stream and produces exactly one
//! reply per incoming message: command responses for `/start` and `/help`,
//! classifier output for everything else. Delivery failures are logged and
//! never retried; the classifier itself cannot fail.

use crate::commands::{self, Command};
use codemedic_core::{
    classify,
    knowledge::KnowledgeBase,
    message::{IncomingMessage, OutgoingMessage},
    traits::Channel,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

/// The central gateway that routes messages between channels and the
/// knowledge base.
pub struct Gateway {
    channels: HashMap<String, Arc<dyn Channel>>,
    kb: Arc<KnowledgeBase>,
}

impl Gateway {
    /// Create a new gateway.
    pub fn new(channels: HashMap<String, Arc<dyn Channel>>, kb: Arc<KnowledgeBase>) -> Self {
        Self { channels, kb }
    }

    /// Run the main event loop.
    pub async fn run(self) -> anyhow::Result<()> {
        info!(
            "CodeMedic gateway running | channels: {} | languages: {}",
            self.channels.keys().cloned().collect::<Vec<_>>().join(", "),
            self.kb.supported_languages().join(", "),
        );

        let (tx, mut rx) = mpsc::channel::<IncomingMessage>(256);

        for (name, channel) in &self.channels {
            let mut channel_rx = channel
                .start()
                .await
                .map_err(|e| anyhow::anyhow!("failed to start channel {name}: {e}"))?;
            let tx = tx.clone();
            let channel_name = name.clone();

            tokio::spawn(async move {
                while let Some(msg) = channel_rx.recv().await {
                    if tx.send(msg).await.is_err() {
                        info!("gateway receiver dropped, stopping {channel_name} forwarder");
                        break;
                    }
                }
            });

            info!("Channel started: {name}");
        }

        drop(tx);

        while let Some(msg) = rx.recv().await {
            self.handle_message(msg).await;
        }

        info!("All channels closed, gateway shutting down");
        for channel in self.channels.values() {
            if let Err(e) = channel.stop().await {
                warn!("channel stop failed: {e}");
            }
        }
        Ok(())
    }

    /// Produce and deliver the single reply for one incoming message.
    async fn handle_message(&self, msg: IncomingMessage) {
        let reply = match Command::parse(&msg.text) {
            Some(cmd) => commands::handle(cmd, &self.kb),
            None => classify::respond(&msg.text, &self.kb),
        };

        let Some(channel) = self.channels.get(&msg.channel) else {
            warn!("no channel '{}' for message {}", msg.channel, msg.id);
            return;
        };

        let outgoing = OutgoingMessage {
            text: reply,
            reply_target: msg.reply_target.clone(),
        };

        if let Err(e) = channel.send(outgoing).await {
            // Delivery faults are reported here and nowhere else.
            error!(
                "failed to deliver reply on {} to {:?}: {e}",
                msg.channel, msg.reply_target
            );
        }
    }
}
