//! In-memory sender.
//!
//! Records every envelope instead of delivering it. Used when no messaging core
//! is attached (local development) and as the test double for the notifier.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::SendError;

use super::sender::MessageSender;
use super::types::{CommandRequest, MessageSendRequest};

#[derive(Default)]
pub struct MemoryMessageSender {
    messages: Mutex<Vec<MessageSendRequest>>,
    commands: Mutex<Vec<CommandRequest>>,
    /// When set, every call fails with `SendError::Unavailable`
    unavailable: AtomicBool,
}

impl MemoryMessageSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent calls fail (or succeed again)
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Envelopes recorded so far, oldest first
    pub async fn messages(&self) -> Vec<MessageSendRequest> {
        self.messages.lock().await.clone()
    }

    /// Commands recorded so far, oldest first
    pub async fn commands(&self) -> Vec<CommandRequest> {
        self.commands.lock().await.clone()
    }

    /// Drop everything recorded so far
    pub async fn clear(&self) {
        self.messages.lock().await.clear();
        self.commands.lock().await.clear();
    }

    fn check_available(&self) -> Result<(), SendError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(SendError::Unavailable(
                "memory sender switched off".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl MessageSender for MemoryMessageSender {
    async fn send(&self, req: MessageSendRequest) -> Result<(), SendError> {
        self.check_available()?;

        let mut messages = self.messages.lock().await;
        messages.push(req);

        tracing::trace!(recorded = messages.len(), "Recorded message envelope");
        Ok(())
    }

    async fn send_command(&self, req: CommandRequest) -> Result<(), SendError> {
        self.check_available()?;

        let mut commands = self.commands.lock().await;
        commands.push(req);

        tracing::trace!(recorded = commands.len(), "Recorded command envelope");
        Ok(())
    }
}
