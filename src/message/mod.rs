//! Envelopes and sender implementations for the external messaging core.
//!
//! - `MessageSender`: the send / send-command capability the host supplies
//! - `MemoryMessageSender`: records envelopes in memory
//! - `RedisMessageSender`: publishes envelopes on Redis Pub/Sub channels

mod memory_sender;
mod redis_sender;
mod sender;
mod types;

pub use memory_sender::MemoryMessageSender;
pub use redis_sender::RedisMessageSender;
pub use sender::MessageSender;
pub use types::{CommandRequest, MessageSendRequest, MsgHeader, Setting, CHANNEL_TYPE_GROUP};
