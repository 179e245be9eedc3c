//! Notification Feed
//!
//! Polling-based notification tracking: the feed is refreshed when a
//! session starts, categories are cleared as the user navigates into
//! the view that covers them, and single items are cleared (with a
//! redirect) when clicked in the bell dropdown.

pub mod dropdown;
pub mod routes;
pub mod state;

pub use state::NotificationFeed;
