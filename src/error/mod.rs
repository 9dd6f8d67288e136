use thiserror::Error;

/// Failure reported by the messaging core when handing it a message or command.
///
/// Notification operations never introduce errors of their own; whatever the
/// sender returns is passed back to the caller untouched.
#[derive(Error, Debug)]
pub enum SendError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Message rejected: {0}")]
    Rejected(String),

    #[error("Messaging core unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, SendError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SendError::Rejected("channel not found".to_string());
        assert_eq!(err.to_string(), "Message rejected: channel not found");

        let err = SendError::Unavailable("connection refused".to_string());
        assert_eq!(
            err.to_string(),
            "Messaging core unavailable: connection refused"
        );
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SendError = json_err.into();
        assert!(matches!(err, SendError::Serialization(_)));
    }
}
