// src/error.rs
use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub const MISSING_ENV_BODY: &str = "Missing LINE env vars";

/// Errors surfaced to the caller of the notifier.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("missing LINE configuration: {0}")]
    ConfigurationMissing(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::ConfigurationMissing(var) => {
                tracing::error!(var = %var, "notifier invoked without required configuration");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                    MISSING_ENV_BODY,
                )
                    .into_response()
            }
        }
    }
}

/// Failures of the outbound push call that never produced an HTTP status.
#[derive(Debug, Error)]
pub enum PushError {
    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out after {0}s")]
    Timeout(u64),

    #[error("push client configuration error: {0}")]
    Configuration(String),
}

/// Startup configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown notifier variant: {0}")]
    UnknownVariant(String),

    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}
