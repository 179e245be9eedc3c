//! Notification Feed State
//!
//! Holds the fetched notification list and the unread counter. The two
//! are tracked independently: the badge reflects everything pending on
//! the backend, the dropdown shows only a short recent slice.
//!
//! Mark-as-read traffic is fire-and-forget. Local removal is optimistic
//! and never reverted; failures are logged and the next refresh
//! reconverges with the backend.

use std::sync::mpsc::{channel, Receiver};

use crate::egui_app::api::NotificationApi;
use crate::egui_app::config::Config;
use crate::egui_app::notifications::routes;
use crate::egui_app::types::AppView;
use crate::shared::model::{Notification, NotificationCategory, Session};
use crate::shared::ApiError;

/// How many notifications the dropdown shows
pub const RECENT_LIMIT: usize = 5;

type FetchResult = Result<Vec<Notification>, ApiError>;

/// The notification feed controller
pub struct NotificationFeed {
    /// All pending notifications, most recent first as delivered
    items: Vec<Notification>,
    /// Total unread count; kept separately from `items` so a click can
    /// decrement it without re-deriving
    unread_count: usize,
    /// Dropdown visibility, purely local
    pub open: bool,
    pending_fetch: Option<Receiver<FetchResult>>,
    /// Identity the feed was last refreshed for
    loaded_for: Option<i64>,
}

impl Default for NotificationFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationFeed {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            unread_count: 0,
            open: false,
            pending_fetch: None,
            loaded_for: None,
        }
    }

    /// The recent slice shown in the dropdown
    pub fn recent(&self) -> &[Notification] {
        let len = self.items.len().min(RECENT_LIMIT);
        &self.items[..len]
    }

    pub fn unread_count(&self) -> usize {
        self.unread_count
    }

    pub fn is_loading(&self) -> bool {
        self.pending_fetch.is_some()
    }

    /// Flip the dropdown; no network effect
    pub fn toggle_open(&mut self) {
        self.open = !self.open;
    }

    /// Refresh from the backend for the session user
    pub fn refresh(&mut self, config: &Config, session: &Session) {
        let config = config.clone();
        let session = session.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let api = NotificationApi::new(config);
            let _ = tx.send(api.fetch(&session));
        });
        self.pending_fetch = Some(rx);
    }

    /// Refresh once per identity; called every frame from the shell
    pub fn ensure_loaded(&mut self, config: &Config, session: &Session) {
        if self.loaded_for != Some(session.id) {
            self.loaded_for = Some(session.id);
            self.refresh(config, session);
        }
    }

    /// Forget everything; used on logout
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Collect a finished fetch, if any
    pub fn poll(&mut self) {
        let Some(rx) = &self.pending_fetch else { return };
        let Ok(result) = rx.try_recv() else { return };
        self.pending_fetch = None;
        match result {
            Ok(notifications) => {
                self.unread_count = notifications.len();
                self.items = notifications;
            }
            Err(e) => {
                // Stale-but-available: keep whatever we had.
                tracing::error!("failed to load notifications: {}", e);
            }
        }
    }

    /// Remove every notification covered by `view` and report which
    /// categories actually had entries removed.
    ///
    /// Pure local mutation; the caller decides whether to tell the
    /// backend. Returns an empty list when nothing matched, which is
    /// what makes a repeated route change a no-op.
    pub fn clear_for_route(&mut self, view: AppView) -> Vec<NotificationCategory> {
        let covered = routes::categories_cleared_by(view);
        if covered.is_empty() {
            return Vec::new();
        }

        let before = self.items.len();
        let mut removed_categories: Vec<NotificationCategory> = Vec::new();
        self.items.retain(|item| {
            if covered.contains(&item.category) {
                if !removed_categories.contains(&item.category) {
                    removed_categories.push(item.category);
                }
                false
            } else {
                true
            }
        });

        if self.items.len() != before {
            self.unread_count = self.items.len();
        }
        removed_categories
    }

    /// Route-change hook: clear locally, then fire one bulk
    /// mark-as-read per removed category without awaiting.
    pub fn on_route_change(&mut self, view: AppView, config: &Config, session: &Session) {
        for category in self.clear_for_route(view) {
            let config = config.clone();
            let session = session.clone();
            std::thread::spawn(move || {
                let api = NotificationApi::new(config);
                if let Err(e) = api.mark_category(&session, category) {
                    tracing::error!("failed to mark {} notifications read: {}", category.as_str(), e);
                }
            });
        }
    }

    /// Remove the clicked notification and return where to navigate.
    ///
    /// Pure part of [`Self::select`]; the index is into [`Self::recent`],
    /// which is a prefix of the full list.
    pub fn take(&mut self, index: usize) -> Option<(Notification, AppView)> {
        if index >= self.items.len().min(RECENT_LIMIT) {
            return None;
        }
        let item = self.items.remove(index);
        self.unread_count = self.unread_count.saturating_sub(1);
        self.open = false;
        let target = routes::target_view(item.category);
        Some((item, target))
    }

    /// Click handler for a dropdown row: mark the single item read on
    /// the backend, remove it locally, and hand back the target view.
    /// The caller navigates immediately; the write resolves whenever it
    /// resolves.
    pub fn select(&mut self, index: usize, config: &Config, session: &Session) -> Option<AppView> {
        let (item, target) = self.take(index)?;

        let config = config.clone();
        let session = session.clone();
        std::thread::spawn(move || {
            let api = NotificationApi::new(config);
            if let Err(e) = api.mark_read(&session, &item.text) {
                tracing::error!("failed to mark notification read: {}", e);
            }
        });

        Some(target)
    }

    /// Test-only seeding of feed contents
    #[doc(hidden)]
    pub fn set_items_for_test(&mut self, items: Vec<Notification>) {
        self.unread_count = items.len();
        self.items = items;
    }
}
