//! Redis Pub/Sub sender.
//!
//! Publishes message and command envelopes as JSON on the channels the
//! messaging core subscribes to.

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};

use crate::config::RedisConfig;
use crate::error::SendError;

use super::sender::MessageSender;
use super::types::{CommandRequest, MessageSendRequest};

pub struct RedisMessageSender {
    conn: ConnectionManager,
    message_channel: String,
    command_channel: String,
}

impl RedisMessageSender {
    /// Connect to Redis and build a sender for the configured channels.
    pub async fn connect(config: &RedisConfig) -> Result<Self, SendError> {
        let client = Client::open(config.url.as_str())?;
        let conn = ConnectionManager::new(client).await?;

        tracing::info!(
            message_channel = %config.message_channel,
            command_channel = %config.command_channel,
            "Redis message sender connected"
        );

        Ok(Self {
            conn,
            message_channel: config.message_channel.clone(),
            command_channel: config.command_channel.clone(),
        })
    }

    async fn publish(&self, channel: &str, body: String) -> Result<(), SendError> {
        // ConnectionManager is a cheap handle over one multiplexed connection
        let mut conn = self.conn.clone();
        let receivers: i64 = conn.publish(channel, body).await?;

        if receivers == 0 {
            tracing::warn!(channel = %channel, "No messaging core subscribed to channel");
        }

        Ok(())
    }
}

#[async_trait]
impl MessageSender for RedisMessageSender {
    async fn send(&self, req: MessageSendRequest) -> Result<(), SendError> {
        let body = serde_json::to_string(&req)?;
        self.publish(&self.message_channel, body).await?;

        tracing::debug!(
            channel_id = %req.channel_id,
            subscribers = req.subscribers.len(),
            "Published message envelope"
        );
        Ok(())
    }

    async fn send_command(&self, req: CommandRequest) -> Result<(), SendError> {
        let body = serde_json::to_string(&req)?;
        self.publish(&self.command_channel, body).await?;

        tracing::debug!(
            channel_id = %req.channel_id,
            cmd = %req.cmd,
            "Published command envelope"
        );
        Ok(())
    }
}
