//! Contact Data Structure
//!
//! A directory entry the current user is allowed to message.

use serde::{Deserialize, Serialize};

use super::session::Role;

/// A user-directory entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub role: Role,
}

impl Contact {
    /// First letter of the name, for avatar placeholders
    pub fn avatar_initial(&self) -> char {
        self.name.chars().next().unwrap_or('?').to_ascii_uppercase()
    }

    /// Case-insensitive substring match on the contact name
    pub fn name_matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&term)
    }
}
