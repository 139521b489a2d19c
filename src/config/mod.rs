//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, DEFAULT_USERS_ENDPOINT, LogFormat, LoggingConfig, NotificationConfig, ServerConfig,
    SourceConfig,
};
