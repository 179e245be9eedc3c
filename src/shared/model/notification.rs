//! Notification Data Structure
//!
//! Notifications are created server-side and fetched read-only. There is
//! no client-side identifier: bulk mark-as-read is keyed by
//! `(user, category)` and single mark-as-read by `(user, text)`.

use serde::{Deserialize, Serialize};

/// Category of a notification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum NotificationCategory {
    Message,
    Grade,
    Payment,
    Assignment,
}

impl NotificationCategory {
    /// Wire name of the category
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationCategory::Message => "message",
            NotificationCategory::Grade => "grade",
            NotificationCategory::Payment => "payment",
            NotificationCategory::Assignment => "assignment",
        }
    }

    /// Icon shown in the feed dropdown
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationCategory::Message => "💬",
            NotificationCategory::Grade => "📝",
            NotificationCategory::Payment => "💳",
            NotificationCategory::Assignment => "📋",
        }
    }
}

/// A single notification as delivered by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub category: NotificationCategory,
    pub text: String,
    /// ISO-8601 creation time
    pub timestamp: String,
}

/// Body for the bulk mark-as-read endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkCategoryRequest {
    pub user_id: i64,
    pub category: NotificationCategory,
}

/// Body for the single mark-as-read endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkReadRequest {
    pub user_id: i64,
    pub text: String,
}
