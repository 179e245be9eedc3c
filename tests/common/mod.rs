//! Shared fixtures for the integration suite
#![allow(dead_code)]

use aulanet::egui_app::Config;
use aulanet::shared::config::AppConfig;
use aulanet::shared::model::{Contact, Message, Notification, NotificationCategory, Role, Session};
use tokio::runtime::Runtime;
use wiremock::MockServer;

/// The identity most tests run as
pub fn test_session() -> Session {
    Session {
        id: 7,
        first_name: "Ana".to_string(),
        last_name: "Pereyra".to_string(),
        role: Role::Student,
        token: "test-token".to_string(),
    }
}

/// A config pointed at a mock server
pub fn config_for(server: &MockServer) -> Config {
    Config::with_builder(AppConfig::builder().server_url(server.uri()))
        .expect("test config is valid")
}

/// Start a mock backend. The returned runtime must outlive the server:
/// its worker threads are what keep the server responding while the
/// client under test blocks on its own per-call runtime.
pub fn start_backend() -> (Runtime, MockServer) {
    let rt = Runtime::new().expect("test runtime");
    let server = rt.block_on(MockServer::start());
    (rt, server)
}

pub fn notification(category: NotificationCategory, text: &str) -> Notification {
    Notification {
        category,
        text: text.to_string(),
        timestamp: "2026-03-02T10:00:00Z".to_string(),
    }
}

pub fn contact(id: i64, name: &str) -> Contact {
    Contact {
        id,
        name: name.to_string(),
        role: Role::Student,
    }
}

pub fn message(id: i64, sender: i64, receiver: i64, content: &str, timestamp: &str) -> Message {
    Message {
        id,
        sender_id: sender,
        receiver_id: receiver,
        content: content.to_string(),
        timestamp: timestamp.to_string(),
        sender_name: "Someone".to_string(),
        attachment_url: None,
    }
}
