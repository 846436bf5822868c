//! Configuration management for the address book.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is loaded first if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::str::FromStr;

/// What the binary does when started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Run the scripted demonstration and print its output
    #[default]
    Demo,
    /// Read assistant commands from stdin
    Assistant,
}

impl FromStr for RunMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "demo" => Ok(RunMode::Demo),
            "assistant" => Ok(RunMode::Assistant),
            other => Err(format!(
                "Must be 'demo' or 'assistant', got: {}",
                other
            )),
        }
    }
}

/// Configuration for the address book binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Run mode (default: demo)
    pub mode: RunMode,

    /// Prompt shown by the assistant (default: "Enter a command: ")
    pub prompt: String,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_MODE`: `demo` or `assistant` (default: demo)
    /// - `ADDRESS_BOOK_PROMPT`: Assistant prompt (default: "Enter a command: ")
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let mode = match env::var("ADDRESS_BOOK_MODE") {
            Ok(val) => val.parse::<RunMode>().map_err(|reason| ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_MODE".to_string(),
                reason,
            })?,
            Err(_) => defaults.mode,
        };

        let prompt = env::var("ADDRESS_BOOK_PROMPT").unwrap_or(defaults.prompt);
        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        if log_level.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        Ok(Config {
            mode,
            prompt,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            mode: RunMode::Demo,
            prompt: "Enter a command: ".to_string(),
            log_level: "error".to_string(),
        }
    }
}
