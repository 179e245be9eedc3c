//! Session Identity
//!
//! The authenticated identity for the process lifetime. Constructed once
//! at login, passed by reference to every component that needs it, and
//! replaced wholesale on the next login. Nothing reads it as ambient
//! global state.

use serde::{Deserialize, Serialize};

/// Role of the authenticated user
///
/// The backend historically emitted Spanish role names; both spellings
/// are accepted on the wire.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[serde(alias = "administrador")]
    Admin,
    #[serde(alias = "estudiante")]
    Student,
    #[serde(alias = "profesor")]
    Instructor,
}

impl Role {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Student => "Student",
            Role::Instructor => "Instructor",
        }
    }
}

/// The authenticated identity plus its bearer token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub token: String,
}

impl Session {
    /// Full display name
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// First letter of the first name, for avatar placeholders
    pub fn avatar_initial(&self) -> char {
        self.first_name.chars().next().unwrap_or('?').to_ascii_uppercase()
    }
}
