//! User Entity
//!
//! Directory entry: identity plus current role memberships.
//! The content domain reads users but never mutates them.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{Role, RoleSet, UserId};

#[derive(Debug, Clone)]
pub struct User {
    /// Opaque identity id
    pub user_id: UserId,
    /// Unique login / display name
    pub user_name: String,
    /// Current role memberships
    pub roles: RoleSet,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new directory entry with a generated id
    pub fn new(user_name: impl Into<String>, roles: RoleSet) -> Self {
        Self {
            user_id: UserId::generate(),
            user_name: user_name.into(),
            roles,
            created_at: Utc::now(),
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(role)
    }
}
