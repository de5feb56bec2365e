//! Verified viewer identity handed to the engine by the token layer.

use serde::{Deserialize, Serialize};

/// Role carried in the verified identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Viewer,
    Admin,
}

/// Account standing as recorded by the identity service.
///
/// The identity layer refuses to mint tokens for suspended or deleted
/// accounts, so a verified identity always belongs to an `Active` user; the
/// engine reads the enum only to reject stale claims outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Suspended,
    Deleted,
}

/// A verified `(user_id, role)` pair.
///
/// `None` at call sites taking `Option<Identity>` means an anonymous guest,
/// which is an explicitly supported caller, not an error.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: String,
    pub role: Role,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
