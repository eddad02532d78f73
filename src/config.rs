//! Configuration handling
//!
//! Configuration lives in a TOML file (default `config.toml` in the working
//! directory) and is loaded once at startup. A missing or unparseable file is
//! a fatal startup error; an unrecognized output mode is not (the run becomes
//! a no-op).

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;

/// Environment variable selecting the flavor-text phrase pools
pub const ENV_VAR: &str = "TASKFOREST_ENV";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Run configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Basic-auth user for the tracker API
    pub auth_user: String,

    /// Basic-auth password for the tracker API
    pub auth_pass: String,

    /// Hostname of the issue-tracker REST API (always port 443)
    pub api_host: String,

    /// Output mode name; unrecognized values make the run print nothing
    pub output: String,

    /// Assignee display name to chat mention-ID lookup table
    pub mentions: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auth_user: String::new(),
            auth_pass: String::new(),
            api_host: String::new(),
            output: "list".to_string(),
            mentions: HashMap::new(),
        }
    }
}

impl Config {
    /// Loads the configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(e.to_string()))
            .context("Failed to parse config")
    }
}

/// Recognized output modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Indented plain-text outline
    List,
    /// Slack message with one attachment per task
    SlackAttachments,
}

impl OutputMode {
    /// Parses a mode name; unrecognized values yield `None`
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "list" => Some(OutputMode::List),
            "slack-attachments" => Some(OutputMode::SlackAttachments),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputMode::List => "list",
            OutputMode::SlackAttachments => "slack-attachments",
        }
    }
}

/// Deployment environment, read once at startup
///
/// Only the flavor-text phrase pools depend on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    Production,
    #[default]
    Staging,
}

impl Environment {
    /// Reads the environment from [`ENV_VAR`]
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(ENV_VAR).ok().as_deref())
    }

    /// `"production"` selects production; anything else is staging
    pub fn from_value(value: Option<&str>) -> Self {
        match value {
            Some("production") => Environment::Production,
            _ => Environment::Staging,
        }
    }
}
