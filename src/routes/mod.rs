// src/routes/mod.rs
pub mod notify;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{any, get},
};
use notify::notify_handler;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", any(notify_handler))
        .route("/send-line-notifications", any(notify_handler))
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http())
}
