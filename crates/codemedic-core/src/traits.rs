use crate::{
    error::MedicError,
    message::{IncomingMessage, OutgoingMessage},
};
use async_trait::async_trait;

/// Messaging Channel trait.
///
/// Every messaging platform the bot can live on implements this trait to
/// receive and send messages. The classifier never sees a channel directly;
/// the gateway bridges the two.
#[async_trait]
pub trait Channel: Send + Sync {
    /// Human-readable channel name.
    fn name(&self) -> &str;

    /// Start listening for incoming messages.
    /// Returns a receiver that yields incoming messages.
    async fn start(&self) -> Result<tokio::sync::mpsc::Receiver<IncomingMessage>, MedicError>;

    /// Send a response back through this channel.
    async fn send(&self, message: OutgoingMessage) -> Result<(), MedicError>;

    /// Graceful shutdown.
    async fn stop(&self) -> Result<(), MedicError>;
}
