//! Messaging view
//!
//! Sidebar with the conversation directory and the new-conversation
//! search, plus the chat area for the open thread.

pub mod chat_area;
pub mod components;
pub mod main_layout;
pub mod search;
pub mod sidebar;
pub mod state;

pub use main_layout::render_messaging_view;
pub use state::MessagingState;
