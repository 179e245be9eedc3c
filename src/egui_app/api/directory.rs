//! User-directory endpoints
//!
//! The contact list for the messaging sidebar and the paginated search
//! used when starting a new conversation. The search endpoint takes
//! `{search, page, limit}` query parameters and returns a flat array;
//! a page shorter than `limit` signals exhaustion.

use reqwest::Client;

use super::{call_runtime, ensure_success};
use crate::egui_app::config::Config;
use crate::shared::model::{Contact, Session};
use crate::shared::ApiError;

/// User-directory API client
pub struct DirectoryApi {
    config: Config,
    client: Client,
}

impl DirectoryApi {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Fetch every contact the session user may message
    pub fn contacts(&self, session: &Session) -> Result<Vec<Contact>, ApiError> {
        let url = self.config.api_url(&format!("/api/users/{}/contacts", session.id));
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
                .json::<Vec<Contact>>()
                .await
                .map_err(|e| ApiError::decode(e.to_string()))
        })
    }

    /// Fetch one page of a directory search
    pub fn search(
        &self,
        session: &Session,
        term: &str,
        page: u32,
        limit: u32,
    ) -> Result<Vec<Contact>, ApiError> {
        let url = self.config.api_url(&format!("/api/users/{}/contacts", session.id));
        let rt = call_runtime()?;

        rt.block_on(async {
            let response = self
                .client
                .get(&url)
                .bearer_auth(&session.token)
                .query(&[("search", term)])
                .query(&[("page", page), ("limit", limit)])
                .send()
                .await
                .map_err(|e| ApiError::network(e.to_string()))?;

            let response = ensure_success(response).await?;

            response
                .json::<Vec<Contact>>()
                .await
                .map_err(|e| ApiError::decode(e.to_string()))
        })
    }
}
