//! egui Native Desktop App Module
//!
//! This module provides the native desktop client built with
//! egui/eframe. The remote REST backend owns all business logic; the
//! client authenticates, navigates, and renders.
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs           - Module exports
//! ├── main.rs          - Application entry point (binary)
//! ├── config.rs        - Configuration (backend URL, page sizes)
//! ├── auth.rs          - Login state and HTTP login call
//! ├── types.rs         - App views and auth wire types
//! ├── state.rs         - Central AppState and navigation
//! ├── remote.rs        - Receiver bookkeeping for backend-owned lists
//! ├── api/             - Backend gateway clients
//! ├── notifications/   - Notification feed, route mapping, dropdown
//! ├── messaging/       - Conversation directory, search, chat thread
//! ├── registrar.rs     - State for the administrative panels
//! ├── views/           - Top bar, router and per-view panels
//! └── theme/           - Colors and frame styles
//! ```

pub mod api;
pub mod auth;
pub mod config;
pub mod messaging;
pub mod notifications;
pub mod registrar;
pub mod remote;
pub mod state;
pub mod theme;
pub mod types;
pub mod views;

// Re-export commonly used types
pub use auth::AuthState;
pub use config::Config;
pub use state::AppState;
pub use types::AppView;
