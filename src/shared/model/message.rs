//! Chat Message Data Structure
//!
//! Messages are append-only from the client's perspective, except for
//! the client-initiated delete, which is only offered while the message
//! is younger than [`DELETE_WINDOW_MINUTES`].

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Minutes after sending during which a message may still be deleted.
///
/// The boundary is exclusive: a message whose age is exactly the window
/// is no longer deletable.
pub const DELETE_WINDOW_MINUTES: i64 = 10;

/// A message exchanged between two users
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub content: String,
    /// ISO-8601 send time
    pub timestamp: String,
    pub sender_name: String,
    #[serde(default)]
    pub attachment_url: Option<String>,
}

impl Message {
    /// Whether this message was exchanged with the given contact, from
    /// the point of view of `user_id`.
    pub fn exchanged_with(&self, user_id: i64, contact_id: i64) -> bool {
        (self.sender_id == user_id && self.receiver_id == contact_id)
            || (self.sender_id == contact_id && self.receiver_id == user_id)
    }

    /// Parse the send time; `None` when the backend sent garbage.
    pub fn sent_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }

    /// Whether the message may still be deleted at `now`.
    ///
    /// Unparseable timestamps are treated as expired so the action is
    /// never offered on bad data.
    pub fn within_delete_window(&self, now: DateTime<Utc>) -> bool {
        match self.sent_at() {
            Some(sent) => {
                now.signed_duration_since(sent) < Duration::minutes(DELETE_WINDOW_MINUTES)
            }
            None => false,
        }
    }

    /// Whether the message carries only an attachment and no text.
    pub fn is_attachment_only(&self) -> bool {
        self.content.trim().is_empty() && self.attachment_url.is_some()
    }

    /// File name portion of the attachment URL, if any.
    pub fn attachment_name(&self) -> Option<&str> {
        self.attachment_url
            .as_deref()
            .map(|url| url.rsplit('/').next().unwrap_or(url))
    }

    /// Get a preview of the message (first N characters)
    pub fn preview(&self, max_len: usize) -> String {
        if self.content.chars().count() <= max_len {
            self.content.clone()
        } else {
            let mut preview: String = self.content.chars().take(max_len.saturating_sub(3)).collect();
            preview.push_str("...");
            preview
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_sent_at(timestamp: &str) -> Message {
        Message {
            id: 1,
            sender_id: 7,
            receiver_id: 9,
            content: "hola".to_string(),
            timestamp: timestamp.to_string(),
            sender_name: "Ana Pereyra".to_string(),
            attachment_url: None,
        }
    }

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-03-02T12:10:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_delete_window_one_second_before_boundary() {
        // sent 9:59 ago
        let msg = message_sent_at("2026-03-02T12:00:01Z");
        assert!(msg.within_delete_window(now()));
    }

    #[test]
    fn test_delete_window_rejects_exact_boundary() {
        // sent exactly 10:00 ago
        let msg = message_sent_at("2026-03-02T12:00:00Z");
        assert!(!msg.within_delete_window(now()));
    }

    #[test]
    fn test_delete_window_rejects_past_boundary() {
        // sent 10:01 ago
        let msg = message_sent_at("2026-03-02T11:59:00Z");
        assert!(!msg.within_delete_window(now()));
    }

    #[test]
    fn test_delete_window_rejects_unparseable_timestamp() {
        let msg = message_sent_at("yesterday-ish");
        assert!(!msg.within_delete_window(now()));
    }

    #[test]
    fn test_exchanged_with_either_direction() {
        let msg = message_sent_at("2026-03-02T12:00:00Z");
        assert!(msg.exchanged_with(7, 9));
        assert!(msg.exchanged_with(9, 7));
        assert!(!msg.exchanged_with(7, 8));
    }

    #[test]
    fn test_attachment_only() {
        let mut msg = message_sent_at("2026-03-02T12:00:00Z");
        msg.content = "  ".to_string();
        msg.attachment_url = Some("/uploads/17/report.pdf".to_string());
        assert!(msg.is_attachment_only());
        assert_eq!(msg.attachment_name(), Some("report.pdf"));
    }

    #[test]
    fn test_preview_truncates() {
        let mut msg = message_sent_at("2026-03-02T12:00:00Z");
        msg.content = "abcdefghij".to_string();
        assert_eq!(msg.preview(8), "abcde...");
        assert_eq!(msg.preview(10), "abcdefghij");
    }

    #[test]
    fn test_deserializes_camel_case() {
        let json = r#"{"id":3,"senderId":7,"receiverId":9,"content":"hi","timestamp":"2026-03-02T12:00:00Z","senderName":"Ana"}"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.sender_id, 7);
        assert!(msg.attachment_url.is_none());
    }
}
