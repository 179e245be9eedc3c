/**
 * Authentication Module
 *
 * Handles authentication UI state and the HTTP login call.
 */

use reqwest::Client;
use tokio::runtime::Runtime;

use crate::egui_app::config::Config;
use crate::egui_app::types::{LoginRequest, LoginResponse};
use crate::shared::model::Session;
use crate::shared::ApiError;

/// Authentication state
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub error: Option<String>,
    pub loading: bool,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn set_error(&mut self, error: String) {
        self.error = Some(error);
        self.loading = false;
    }
}

/// Log in with email and password, producing the process-lifetime session
pub fn login(config: &Config, email: String, password: String) -> Result<Session, ApiError> {
    let client = Client::new();
    let url = config.api_url("/api/auth/login");

    let request = LoginRequest { email, password };

    let rt = Runtime::new().map_err(|e| ApiError::Runtime(e.to_string()))?;

    rt.block_on(async {
        let response = client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::http(status, body));
        }

        let login_response: LoginResponse = response
            .json()
            .await
            .map_err(|e| ApiError::decode(e.to_string()))?;

        Ok(login_response.into_session())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_state_new() {
        let state = AuthState::new();
        assert!(state.error.is_none());
        assert!(!state.loading);
    }

    #[test]
    fn test_set_error_stops_loading() {
        let mut state = AuthState::new();
        state.loading = true;
        state.set_error("Invalid credentials".to_string());
        assert_eq!(state.error.as_deref(), Some("Invalid credentials"));
        assert!(!state.loading);
    }

    #[test]
    fn test_clear_error() {
        let mut state = AuthState::new();
        state.set_error("boom".to_string());
        state.clear_error();
        assert!(state.error.is_none());
    }
}
