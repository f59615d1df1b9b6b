// src/config.rs
use std::{str::FromStr, time::Duration};

use crate::error::ConfigError;
use crate::services::env_source::{EnvSource, ProcessEnv};
use crate::services::line_client::{ClientConfig, LINE_PUSH_ENDPOINT};

pub const RECIPIENT_VAR: &str = "LINE_USER_ID";
pub const SERVICE_ROLE_KEY_VAR: &str = "SUPABASE_SERVICE_ROLE_KEY";

/// What the notifier tells its caller once the push has been attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseMode {
    /// `{"success": <bool>}` reflecting the upstream status.
    SuccessFlag,
    /// Plain `ok`, whatever happened upstream.
    PlainOk,
}

impl FromStr for ResponseMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "success-flag" | "a" => Ok(ResponseMode::SuccessFlag),
            "plain-ok" | "b" => Ok(ResponseMode::PlainOk),
            other => Err(ConfigError::UnknownVariant(other.to_string())),
        }
    }
}

/// Per-handler settings: which variables to read and how to answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifierSettings {
    pub access_token_var: String,
    pub recipient_var: String,
    pub response_mode: ResponseMode,
    pub message_text: String,
}

impl NotifierSettings {
    pub fn success_flag() -> Self {
        Self {
            access_token_var: "LINE_CHANNEL_ACCESS_TOKEN".to_string(),
            recipient_var: RECIPIENT_VAR.to_string(),
            response_mode: ResponseMode::SuccessFlag,
            message_text: crate::message::REMINDER_TEXT.to_string(),
        }
    }

    pub fn plain_ok() -> Self {
        Self {
            access_token_var: "LINE_ACCESS_TOKEN".to_string(),
            response_mode: ResponseMode::PlainOk,
            ..Self::success_flag()
        }
    }

    pub fn for_mode(mode: ResponseMode) -> Self {
        match mode {
            ResponseMode::SuccessFlag => Self::success_flag(),
            ResponseMode::PlainOk => Self::plain_ok(),
        }
    }
}

impl Default for NotifierSettings {
    fn default() -> Self {
        Self::success_flag()
    }
}

/// Process-level settings read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub notifier: NotifierSettings,
    pub client: ClientConfig,
}

impl ServerConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_source(&ProcessEnv)
    }

    pub fn from_source(env: &dyn EnvSource) -> Result<Self, ConfigError> {
        let mode = match env.non_empty("NOTIFIER_VARIANT") {
            Some(v) => v.parse()?,
            None => ResponseMode::SuccessFlag,
        };
        let timeout_secs: u64 = parse_or(env, "LINE_PUSH_TIMEOUT_SECS", 10)?;

        Ok(Self {
            host: env
                .non_empty("NOTIFIER_HOST")
                .unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(env, "NOTIFIER_PORT", 3000)?,
            notifier: NotifierSettings::for_mode(mode),
            client: ClientConfig {
                endpoint: env
                    .non_empty("LINE_PUSH_ENDPOINT")
                    .unwrap_or_else(|| LINE_PUSH_ENDPOINT.to_string()),
                timeout: Duration::from_secs(timeout_secs),
                ..ClientConfig::default()
            },
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: FromStr>(env: &dyn EnvSource, key: &str, default: T) -> Result<T, ConfigError> {
    let Some(value) = env.non_empty(key) else {
        return Ok(default);
    };
    match value.parse() {
        Ok(parsed) => Ok(parsed),
        Err(_) => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value,
        }),
    }
}
