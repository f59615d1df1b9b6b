// src/state.rs
use std::sync::Arc;

use crate::config::NotifierSettings;
use crate::services::env_source::EnvSource;
use crate::services::line_client::PushApi;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub settings: NotifierSettings,
    pub env: Arc<dyn EnvSource>,
    pub push_api: Arc<dyn PushApi>,
}

impl AppState {
    pub fn new(
        settings: NotifierSettings,
        env: Arc<dyn EnvSource>,
        push_api: Arc<dyn PushApi>,
    ) -> Self {
        Self {
            settings,
            env,
            push_api,
        }
    }
}
