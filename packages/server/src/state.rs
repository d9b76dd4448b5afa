use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;

use crate::config::AppConfig;
use crate::utils::flash;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    /// Signs the flash cookie. Derived once from `session.secret_key`.
    pub key: Key,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let key = flash::signing_key(&config.session.secret_key);
        Self {
            config: Arc::new(config),
            key,
        }
    }

    pub fn flash_cookie(&self) -> &str {
        &self.config.session.flash_cookie
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.key.clone()
    }
}
