//! Shared Types Module
//!
//! App view states and the authentication wire types.

use serde::{Deserialize, Serialize};

use crate::shared::model::{Role, Session};

/// Current app view/mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    /// Login screen
    Auth,
    /// Role landing page
    Landing,
    /// Conversations and chat threads
    Messaging,
    /// Subject catalogue / enrollment / grades
    Subjects,
    /// Degree program management
    Careers,
    /// Payment registration and history
    Payments,
    /// User account management (admin)
    Users,
    /// Per-subject student roster with grade entry (instructor)
    SubjectRoster,
}

impl AppView {
    /// Views a given role is allowed to navigate to from the top bar
    pub fn available_for(role: Role) -> &'static [AppView] {
        match role {
            Role::Admin => &[
                AppView::Messaging,
                AppView::Users,
                AppView::Careers,
                AppView::Subjects,
                AppView::Payments,
            ],
            Role::Student => &[AppView::Messaging, AppView::Subjects, AppView::Payments],
            Role::Instructor => &[
                AppView::Messaging,
                AppView::Subjects,
                AppView::SubjectRoster,
            ],
        }
    }

    /// Label shown on navigation buttons
    pub fn label(&self) -> &'static str {
        match self {
            AppView::Auth => "Login",
            AppView::Landing => "Home",
            AppView::Messaging => "Messages",
            AppView::Subjects => "Subjects",
            AppView::Careers => "Careers",
            AppView::Payments => "Payments",
            AppView::Users => "Users",
            AppView::SubjectRoster => "Roster",
        }
    }
}

/// Login request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// User payload inside the login response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginUser {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

/// Login response from the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: LoginUser,
}

impl LoginResponse {
    /// Build the process-lifetime session from a successful login
    pub fn into_session(self) -> Session {
        Session {
            id: self.user.id,
            first_name: self.user.first_name,
            last_name: self.user.last_name,
            role: self.user.role,
            token: self.token,
        }
    }
}
