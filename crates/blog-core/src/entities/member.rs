//! Member entity - an account that authors articles, comments, and notes

use chrono::{DateTime, Utc};

use crate::value_objects::{Role, RoleSet, Snowflake};

/// Member entity with unique email and username
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub id: Snowflake,
    pub email: String,
    pub username: String,
    pub roles: RoleSet,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Member {
    /// Create a new Member with the baseline user role
    pub fn new(id: Snowflake, email: String, username: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            email,
            username,
            roles: RoleSet::user(),
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether this member holds a role
    ///
    /// The base user role is granted to every member.
    #[inline]
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.has(role)
    }

    /// Check whether this member holds the admin role
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.roles.is_admin()
    }

    /// Replace the assigned role set
    pub fn set_roles(&mut self, roles: RoleSet) {
        self.roles = roles;
        self.updated_at = Utc::now();
    }

    /// Update the username
    pub fn set_username(&mut self, username: String) {
        self.username = username;
        self.updated_at = Utc::now();
    }

    /// Replace the stored password hash
    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }
}
