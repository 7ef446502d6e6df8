use std::path::PathBuf;

use crate::app_config::{AppConfig, Credentials};
use crate::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "https://api.twitter.com/1.1/";

/// Load the four API secrets from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns [`ConfigError::MissingEnvVar`] if any secret is absent or blank.
pub fn load_credentials() -> Result<Credentials, ConfigError> {
    dotenvy::dotenv().ok();
    load_credentials_from_env()
}

/// Load the API secrets from environment variables already in the process.
///
/// # Errors
///
/// Returns [`ConfigError::MissingEnvVar`] if any secret is absent or blank.
pub fn load_credentials_from_env() -> Result<Credentials, ConfigError> {
    build_credentials(|key| std::env::var(key))
}

/// Load runtime settings from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvVar`] if a value is present but malformed.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load runtime settings from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvVar`] if a value is present but malformed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

fn build_credentials<F>(lookup: F) -> Result<Credentials, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        match lookup(var) {
            Ok(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(ConfigError::MissingEnvVar(var.to_string())),
        }
    };

    Ok(Credentials {
        consumer_key: require("TWITTER_CONSUMER_KEY")?,
        consumer_secret: require("TWITTER_CONSUMER_SECRET")?,
        access_token: require("TWITTER_ACCESS_TOKEN")?,
        access_token_secret: require("TWITTER_ACCESS_TOKEN_SECRET")?,
    })
}

/// Build runtime settings using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_secs = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        let secs = raw
            .trim()
            .parse::<u64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })?;
        if secs == 0 {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(secs)
    };

    let api_base_url = or_default("TWEETMOOD_API_BASE_URL", DEFAULT_API_BASE_URL);
    let request_timeout_secs = parse_secs("TWEETMOOD_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("TWEETMOOD_USER_AGENT", "tweetmood/0.1");
    let log_level = or_default("TWEETMOOD_LOG_LEVEL", "info");
    let output_path = PathBuf::from(or_default("TWEETMOOD_OUTPUT_PATH", "work_tweets.txt"));
    let negative_output_path = PathBuf::from(or_default(
        "TWEETMOOD_NEGATIVE_OUTPUT_PATH",
        "work_tweets_negative.txt",
    ));

    Ok(AppConfig {
        api_base_url,
        request_timeout_secs,
        user_agent,
        log_level,
        output_path,
        negative_output_path,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
