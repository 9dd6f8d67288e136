use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub redis: RedisConfig,
    #[serde(default)]
    pub group: GroupConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RedisConfig {
    #[serde(default = "default_redis_url")]
    pub url: String,
    /// Channel the messaging core consumes message envelopes from
    #[serde(default = "default_message_channel")]
    pub message_channel: String,
    /// Channel the messaging core consumes command envelopes from
    #[serde(default = "default_command_channel")]
    pub command_channel: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GroupConfig {
    /// Member count above which a group is upgraded to a super group
    #[serde(default = "default_upgrade_when_member_count")]
    pub upgrade_when_member_count: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Filter used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_redis_url() -> String {
    "redis://localhost:6379".to_string()
}

fn default_message_channel() -> String {
    "im:message:send".to_string()
}

fn default_command_channel() -> String {
    "im:message:cmd".to_string()
}

fn default_upgrade_when_member_count() -> u32 {
    1000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        // Load .env file if exists
        let _ = dotenvy::dotenv();

        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            .set_default("redis.url", default_redis_url())?
            .set_default("redis.message_channel", default_message_channel())?
            .set_default("redis.command_channel", default_command_channel())?
            .set_default("group.upgrade_when_member_count", 1000)?
            .set_default("log.level", default_log_level())?
            .set_default("log.json", false)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // REDIS__URL, GROUP__UPGRADE_WHEN_MEMBER_COUNT, LOG__LEVEL, etc.
            .add_source(
                Environment::default()
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: default_redis_url(),
            message_channel: default_message_channel(),
            command_channel: default_command_channel(),
        }
    }
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            upgrade_when_member_count: default_upgrade_when_member_count(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let settings = Settings::default();
        assert_eq!(settings.redis.url, "redis://localhost:6379");
        assert_eq!(settings.redis.message_channel, "im:message:send");
        assert_eq!(settings.redis.command_channel, "im:message:cmd");
        assert_eq!(settings.group.upgrade_when_member_count, 1000);
        assert_eq!(settings.log.level, "info");
        assert!(!settings.log.json);
    }

    #[test]
    fn test_partial_deserialize_fills_defaults() {
        let settings: Settings = serde_json::from_value(serde_json::json!({
            "group": { "upgrade_when_member_count": 500 }
        }))
        .unwrap();

        assert_eq!(settings.group.upgrade_when_member_count, 500);
        assert_eq!(settings.redis.url, "redis://localhost:6379");
    }
}
