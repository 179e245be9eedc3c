//! Notification endpoints
//!
//! Fetch the pending notifications for a user and the two mark-as-read
//! writes: bulk by category, single by text.

use reqwest::Client;

use super::{call_runtime, ensure_success};
use crate::egui_app::config::Config;
use crate::shared::model::notification::{MarkCategoryRequest, MarkReadRequest};
use crate::shared::model::{Notification, NotificationCategory, Session};
use crate::shared::ApiError;

/// Notification API client
pub struct NotificationApi {
    config: Config,
    client: Client,
}

impl NotificationApi {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Fetch all pending notifications for the session user
    pub fn fetch(&self, session: &Session) -> Result<Vec<Notification>, ApiError> {
        let url = self.config.api_url(&format!("/api/notifications/{}", session.id));
        let rt = call_runtime()?;

        rt.block_on(async {
            let response = self
                .client
                .get(&url)
                .bearer_auth(&session.token)
                .send()
                .await
                .map_err(|e| ApiError::network(e.to_string()))?;

            let response = ensure_success(response).await?;

            response
                .json::<Vec<Notification>>()
                .await
                .map_err(|e| ApiError::decode(e.to_string()))
        })
    }

    /// Mark every notification of one category as read
    pub fn mark_category(
        &self,
        session: &Session,
        category: NotificationCategory,
    ) -> Result<(), ApiError> {
        let url = self.config.api_url("/api/notifications/mark-category");
        let rt = call_runtime()?;

        rt.block_on(async {
            let body = MarkCategoryRequest { user_id: session.id, category };

            let response = self
                .client
                .post(&url)
                .bearer_auth(&session.token)
                .json(&body)
                .send()
                .await
                .map_err(|e| ApiError::network(e.to_string()))?;

            ensure_success(response).await?;
            Ok(())
        })
    }

    /// Mark one notification as read, keyed by its text
    pub fn mark_read(&self, session: &Session, text: &str) -> Result<(), ApiError> {
        let url = self.config.api_url("/api/notifications/mark-read");
        let rt = call_runtime()?;

        rt.block_on(async {
            let body = MarkReadRequest { user_id: session.id, text: text.to_string() };

            let response = self
                .client
                .post(&url)
                .bearer_auth(&session.token)
                .json(&body)
                .send()
                .await
                .map_err(|e| ApiError::network(e.to_string()))?;

            ensure_success(response).await?;
            Ok(())
        })
    }
}
