use async_trait::async_trait;
use serenity::builder::CreateMessage;
use serenity::http::Http;
use serenity::model::id::ChannelId;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
#[error("Failed to send message to channel {channel_id}: {reason}")]
pub struct DeliveryError {
    pub channel_id: u64,
    pub reason: String,
}

/// Destination for outgoing chat messages.
#[async_trait]
pub trait MessageSink: Send + Sync {
    async fn send(&self, channel_id: u64, content: &str) -> Result<(), DeliveryError>;
}

/// Sends plain text messages through the Discord HTTP API.
#[derive(Clone)]
pub struct NotificationService {
    http: Arc<Http>,
}

impl NotificationService {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl MessageSink for NotificationService {
    async fn send(&self, channel_id: u64, content: &str) -> Result<(), DeliveryError> {
        ChannelId::new(channel_id)
            .send_message(&self.http, CreateMessage::new().content(content))
            .await
            .map(|_| ())
            .map_err(|e| DeliveryError {
                channel_id,
                reason: e.to_string(),
            })
    }
}
