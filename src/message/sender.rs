//! Sender trait for the external messaging core.
//!
//! Delivery, persistence and fan-out all live behind this seam; the
//! notification layer only builds envelopes and forwards them.

use async_trait::async_trait;

use crate::error::SendError;

use super::types::{CommandRequest, MessageSendRequest};

/// Message-dispatch capability supplied by the hosting system.
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Hand a message envelope to the messaging core.
    async fn send(&self, req: MessageSendRequest) -> Result<(), SendError>;

    /// Hand a command signal to the messaging core.
    async fn send_command(&self, req: CommandRequest) -> Result<(), SendError>;
}
