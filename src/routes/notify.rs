// src/routes/notify.rs
use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use uuid::Uuid;

use crate::{
    config::{ResponseMode, SERVICE_ROLE_KEY_VAR},
    error::AppError,
    message::{NotifyResponse, PushMessageRequest},
    state::SharedState,
};

/// Pushes the reminder to the configured recipient.
///
/// Method and body of the incoming request are ignored. Configuration is read
/// on every call, so a missing variable is reported without touching LINE.
pub async fn notify_handler(State(state): State<SharedState>) -> Result<Response, AppError> {
    let settings = &state.settings;
    let invocation = Uuid::new_v4();

    let token = state
        .env
        .non_empty(&settings.access_token_var)
        .ok_or_else(|| AppError::ConfigurationMissing(settings.access_token_var.clone()))?;
    let recipient = state
        .env
        .non_empty(&settings.recipient_var)
        .ok_or_else(|| AppError::ConfigurationMissing(settings.recipient_var.clone()))?;

    // Read for parity with the deployed function; nothing uses it yet.
    let has_service_role = state.env.non_empty(SERVICE_ROLE_KEY_VAR).is_some();
    tracing::debug!(%invocation, has_service_role, "notifier invoked");

    let request = PushMessageRequest::text(recipient, settings.message_text.as_str());
    let success = match state.push_api.push(&token, &request).await {
        Ok(outcome) => outcome.is_success(),
        Err(e) => {
            tracing::warn!(%invocation, error = %e, "LINE push failed");
            false
        }
    };

    tracing::info!(%invocation, success, mode = ?settings.response_mode, "notifier finished");

    let response = match settings.response_mode {
        ResponseMode::SuccessFlag => Json(NotifyResponse { success }).into_response(),
        ResponseMode::PlainOk => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            "ok",
        )
            .into_response(),
    };
    Ok(response)
}
