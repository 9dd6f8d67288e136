// Infrastructure
pub mod config;
pub mod error;
pub mod metrics;
pub mod telemetry;

// Messaging core boundary
pub mod message;

// Domain
pub mod notification;

pub use error::SendError;
pub use message::{MemoryMessageSender, MessageSender, RedisMessageSender};
pub use notification::GroupNotifier;
