//! User Context - Value Objects

use serde::{Deserialize, Serialize};

/// 用户角色
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Reader,
    Author,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Reader => "reader",
            UserRole::Author => "author",
            UserRole::Admin => "admin",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "reader" => Some(UserRole::Reader),
            "author" => Some(UserRole::Author),
            "admin" => Some(UserRole::Admin),
            _ => None,
        }
    }
}
