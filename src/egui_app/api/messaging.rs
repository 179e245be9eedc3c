//! Message endpoints
//!
//! Full message list for a user, multipart send with an optional single
//! attachment, and the two deletes: one message, or a whole thread.

use reqwest::multipart;
use reqwest::Client;

use super::{call_runtime, ensure_success};
use crate::egui_app::config::Config;
use crate::shared::model::{Message, Session};
use crate::shared::ApiError;

/// An attachment queued for sending
#[derive(Debug, Clone)]
pub struct OutgoingAttachment {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Messaging API client
pub struct MessagingApi {
    config: Config,
    client: Client,
}

impl MessagingApi {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Fetch every message sent to or by the session user
    pub fn messages(&self, session: &Session) -> Result<Vec<Message>, ApiError> {
        let url = self.config.api_url(&format!("/api/messages/{}", session.id));
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
                .json::<Vec<Message>>()
                .await
                .map_err(|e| ApiError::decode(e.to_string()))
        })
    }

    /// Send a message as a multipart form with an optional attachment
    pub fn send(
        &self,
        session: &Session,
        receiver_id: i64,
        content: &str,
        attachment: Option<OutgoingAttachment>,
    ) -> Result<(), ApiError> {
        let url = self.config.api_url("/api/messages");
        let rt = call_runtime()?;

        rt.block_on(async {
            let mut form = multipart::Form::new()
                .text("senderId", session.id.to_string())
                .text("receiverId", receiver_id.to_string())
                .text("content", content.to_string());

            if let Some(attachment) = attachment {
                let part = multipart::Part::bytes(attachment.bytes)
                    .file_name(attachment.file_name);
                form = form.part("file", part);
            }

            let response = self
                .client
                .post(&url)
                .bearer_auth(&session.token)
                .multipart(form)
                .send()
                .await
                .map_err(|e| ApiError::network(e.to_string()))?;

            ensure_success(response).await?;
            Ok(())
        })
    }

    /// Delete one message by id
    pub fn delete_message(&self, session: &Session, message_id: i64) -> Result<(), ApiError> {
        let url = self.config.api_url(&format!("/api/messages/{}", message_id));
        let rt = call_runtime()?;

        rt.block_on(async {
            let response = self
                .client
                .delete(&url)
                .bearer_auth(&session.token)
                .send()
                .await
                .map_err(|e| ApiError::network(e.to_string()))?;

            ensure_success(response).await?;
            Ok(())
        })
    }

    /// Delete every message between the session user and a contact
    pub fn delete_thread(&self, session: &Session, contact_id: i64) -> Result<(), ApiError> {
        let url = self
            .config
            .api_url(&format!("/api/messages/thread/{}/{}", session.id, contact_id));
        let rt = call_runtime()?;

        rt.block_on(async {
            let response = self
                .client
                .delete(&url)
                .bearer_auth(&session.token)
                .send()
                .await
                .map_err(|e| ApiError::network(e.to_string()))?;

            ensure_success(response).await?;
            Ok(())
        })
    }
}
