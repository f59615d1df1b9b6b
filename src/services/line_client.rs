// src/services/line_client.rs
//! Outbound client for the LINE Messaging push endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use tracing::{Instrument, info_span};

use crate::error::PushError;
use crate::message::PushMessageRequest;

pub const LINE_PUSH_ENDPOINT: &str = "https://api.line.me/v2/bot/message/push";

/// Status returned by the push endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PushOutcome {
    pub status: u16,
}

impl PushOutcome {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait PushApi: Send + Sync {
    /// Sends one push request. Non-2xx statuses are returned as outcomes, not errors.
    async fn push(&self, token: &str, request: &PushMessageRequest)
    -> Result<PushOutcome, PushError>;
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: LINE_PUSH_ENDPOINT.to_string(),
            timeout: Duration::from_secs(10),
            user_agent: concat!("line-notifier/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LinePushClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl LinePushClient {
    pub fn new(config: ClientConfig) -> Result<Self, PushError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| PushError::Configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }
}

#[async_trait]
impl PushApi for LinePushClient {
    async fn push(
        &self,
        token: &str,
        request: &PushMessageRequest,
    ) -> Result<PushOutcome, PushError> {
        let span = info_span!("line_push", to = %request.to, endpoint = %self.config.endpoint);

        async move {
            let response = self
                .client
                .post(&self.config.endpoint)
                .header(CONTENT_TYPE, "application/json")
                .header(AUTHORIZATION, format!("Bearer {token}"))
                .json(request)
                .send()
                .await
                .map_err(|e| {
                    tracing::warn!("push request failed: {}", e);
                    if e.is_timeout() {
                        PushError::Timeout(self.config.timeout.as_secs())
                    } else {
                        PushError::Network(e.to_string())
                    }
                })?;

            let outcome = PushOutcome {
                status: response.status().as_u16(),
            };

            if outcome.is_success() {
                tracing::info!(status = outcome.status, "push delivered");
            } else {
                let body = response.text().await.unwrap_or_default();
                tracing::warn!(status = outcome.status, body = %body, "push rejected");
            }

            Ok(outcome)
        }
        .instrument(span)
        .await
    }
}
