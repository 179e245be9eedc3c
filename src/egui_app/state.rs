//! Central application state shared across egui views.

use std::sync::mpsc::{channel, Receiver};

use crate::egui_app::auth::{login, AuthState};
use crate::egui_app::config::Config;
use crate::egui_app::messaging::MessagingState;
use crate::egui_app::notifications::NotificationFeed;
use crate::egui_app::registrar::RegistrarState;
use crate::egui_app::types::AppView;
use crate::shared::model::Session;
use crate::shared::ApiError;

/// Central application state
pub struct AppState {
    pub config: Config,
    pub auth_state: AuthState,
    pub email_input: String,
    pub password_input: String,
    auth_result: Option<Receiver<Result<Session, ApiError>>>,

    /// The authenticated identity; `None` before login and after logout
    pub session: Option<Session>,
    pub current_view: AppView,

    pub notifications: NotificationFeed,
    pub messaging: MessagingState,
    pub registrar: RegistrarState,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            config: Config::new(),
            auth_state: AuthState::new(),
            email_input: String::new(),
            password_input: String::new(),
            auth_result: None,
            session: None,
            current_view: AppView::Auth,
            notifications: NotificationFeed::new(),
            messaging: MessagingState::new(),
            registrar: RegistrarState::new(),
        }
    }

    /// Per-frame bookkeeping that is independent of the visible view:
    /// the login result and the globally visible notification bell.
    pub fn frame_tick(&mut self) {
        self.check_auth_result();

        if let Some(session) = self.session.clone() {
            self.notifications.poll();
            self.notifications.ensure_loaded(&self.config, &session);
        }
    }

    pub fn check_auth_result(&mut self) {
        if let Some(rx) = &self.auth_result {
            if let Ok(result) = rx.try_recv() {
                self.auth_result = None;
                self.auth_state.loading = false;

                match result {
                    Ok(session) => {
                        tracing::info!("logged in as {} ({})", session.display_name(), session.role.label());
                        self.session = Some(session);
                        self.auth_state.error = None;
                        self.current_view = AppView::Landing;
                        self.password_input.clear();
                    }
                    Err(e) => {
                        tracing::warn!("login failed: {}", e);
                        self.auth_state.set_error(login_error_message(&e));
                    }
                }
            }
        }
    }

    pub fn handle_login(&mut self) {
        if self.email_input.trim().is_empty() || self.password_input.is_empty() {
            self.auth_state
                .set_error("Email and password are required".to_string());
            return;
        }

        self.auth_state.loading = true;
        self.auth_state.error = None;

        let email = self.email_input.trim().to_string();
        let password = self.password_input.clone();
        let config = self.config.clone();

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(login(&config, email, password));
        });

        self.auth_result = Some(rx);
    }

    /// Switch views. The one integration point between navigation and
    /// the notification feed: entering a view clears the categories it
    /// covers.
    pub fn navigate(&mut self, view: AppView) {
        if self.current_view == view {
            return;
        }
        self.current_view = view;
        if let Some(session) = self.session.clone() {
            self.notifications.on_route_change(view, &self.config, &session);
        }
    }

    pub fn logout(&mut self) {
        self.session = None;
        self.current_view = AppView::Auth;
        self.email_input.clear();
        self.password_input.clear();
        self.auth_state = AuthState::new();
        self.notifications.reset();
        self.messaging.reset();
        self.registrar.reset();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

fn login_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Http { status: 401, .. } | ApiError::Http { status: 403, .. } => {
            "Invalid email or password".to_string()
        }
        other => other.user_message(),
    }
}
