//! Shared configuration for tweetmood: API credentials and runtime settings.

pub mod app_config;
pub mod config;
pub mod error;

pub use app_config::{AppConfig, Credentials};
pub use config::{
    load_app_config, load_app_config_from_env, load_credentials, load_credentials_from_env,
};
pub use error::ConfigError;
