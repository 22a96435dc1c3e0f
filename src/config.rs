use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use tracing::Level;

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(value) => value.trim().parse::<T>().unwrap_or(default),
        Err(_) => default
    }
}

/// Fixed connection configuration used every time the resource session is (re)opened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub endpoint: String,
    pub profile: String,
    pub headless: bool,
    pub args: Vec<String>,
    pub connect_timeout_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            endpoint: env::var("PILA_SESSION_ENDPOINT").unwrap_or(String::from("ws://127.0.0.1:9222")),
            profile: env::var("PILA_SESSION_PROFILE").unwrap_or(String::from("default")),
            headless: env_or("PILA_SESSION_HEADLESS", true),
            args: env::var("PILA_SESSION_ARGS")
                .map(|value| value.split_whitespace().map(str::to_string).collect())
                .unwrap_or_default(),
            connect_timeout_secs: env_or("PILA_SESSION_TIMEOUT", 30),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ManagerConfig {
    pub log_level: Level,
    pub command_poll_interval_ms: u64,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            log_level: env_or("PILA_LOG_LEVEL", Level::INFO),
            command_poll_interval_ms: env_or("PILA_COMMAND_POLL_MS", 500),
        }
    }
}
