mod settings;

pub use settings::{GroupConfig, LogConfig, RedisConfig, Settings};
