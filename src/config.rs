// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles HTTP port, CORS origins, demo identity, and log level parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Acelera Fitness

//! Environment-based configuration management
//!
//! All configuration comes from environment variables with sensible
//! development defaults; there is no configuration file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback to `Info`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// CORS configuration for browser clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated origin list, or "*" for any origin
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: "*".into(),
        }
    }
}

/// Server configuration loaded from the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Log level for startup reporting
    pub log_level: LogLevel,
    /// Identity substituted for an authenticated user in this scope
    pub demo_user_id: String,
    /// CORS settings
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: 8080,
            log_level: LogLevel::default(),
            demo_user_id: "user1".into(),
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Recognized variables: `HTTP_PORT`, `RUST_LOG`, `DEMO_USER_ID`,
    /// `CORS_ALLOWED_ORIGINS`.
    ///
    /// # Errors
    /// Returns an error when `HTTP_PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let http_port = match env::var("HTTP_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("invalid HTTP_PORT value: {value}"))?,
            Err(_) => defaults.http_port,
        };

        let log_level = env::var("RUST_LOG")
            .map(|v| LogLevel::from_str_or_default(&v))
            .unwrap_or_default();

        let demo_user_id = env::var("DEMO_USER_ID").unwrap_or(defaults.demo_user_id);

        let allowed_origins =
            env::var("CORS_ALLOWED_ORIGINS").unwrap_or(defaults.cors.allowed_origins);

        Ok(Self {
            http_port,
            log_level,
            demo_user_id,
            cors: CorsConfig { allowed_origins },
        })
    }

    /// Get a summary of the configuration for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Acelera Server Configuration:\n\
             - HTTP Port: {}\n\
             - Log Level: {}\n\
             - Demo User: {}\n\
             - CORS Origins: {}",
            self.http_port, self.log_level, self.demo_user_id, self.cors.allowed_origins
        )
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use serial_test::serial;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str_or_default("DEBUG"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str_or_default("nonsense"), LogLevel::Info);
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        std::env::remove_var("HTTP_PORT");
        std::env::remove_var("DEMO_USER_ID");
        std::env::remove_var("CORS_ALLOWED_ORIGINS");

        let config = ServerConfig::from_env().unwrap();
        assert_eq!(config.http_port, 8080);
        assert_eq!(config.demo_user_id, "user1");
        assert_eq!(config.cors.allowed_origins, "*");
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_bad_port() {
        std::env::set_var("HTTP_PORT", "not-a-port");
        let result = ServerConfig::from_env();
        std::env::remove_var("HTTP_PORT");
        assert!(result.is_err());
    }

    #[test]
    fn test_summary_mentions_port() {
        let config = ServerConfig::default();
        assert!(config.summary().contains("8080"));
    }
}
