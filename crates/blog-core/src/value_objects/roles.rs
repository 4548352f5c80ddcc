//! Member roles for role-based access control
//!
//! Roles are persisted as a JSON array of strings. The stored set may omit
//! the base user role; every read path treats it as always present.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A single access-control role
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Baseline role every member holds
    #[serde(rename = "ROLE_USER")]
    User,
    /// Grants every access decision unconditionally
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
}

impl Role {
    /// Wire spelling of this role
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::User => "ROLE_USER",
            Role::Admin => "ROLE_ADMIN",
        }
    }

    /// Parse the wire spelling of a role
    pub fn parse(s: &str) -> Result<Self, RoleParseError> {
        match s {
            "ROLE_USER" => Ok(Role::User),
            "ROLE_ADMIN" => Ok(Role::Admin),
            other => Err(RoleParseError::UnknownRole(other.to_string())),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = RoleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::parse(s)
    }
}

/// Error when parsing a role from its wire spelling
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RoleParseError {
    #[error("unknown role: {0}")]
    UnknownRole(String),
}

/// The set of roles assigned to a member
///
/// Only explicitly assigned roles are stored; `has` and `effective` fold in
/// the base user role so a member with an empty stored set still acts as a
/// regular user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleSet(BTreeSet<Role>);

impl RoleSet {
    /// Empty assigned set (effective roles: user only)
    #[must_use]
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Assigned set for a regular member
    #[must_use]
    pub fn user() -> Self {
        let mut set = BTreeSet::new();
        set.insert(Role::User);
        Self(set)
    }

    /// Assigned set for an administrator
    #[must_use]
    pub fn admin() -> Self {
        let mut set = BTreeSet::new();
        set.insert(Role::User);
        set.insert(Role::Admin);
        Self(set)
    }

    /// Add a role to the assigned set
    pub fn insert(&mut self, role: Role) {
        self.0.insert(role);
    }

    /// Check whether this set grants a role
    ///
    /// The base user role is always granted.
    #[inline]
    #[must_use]
    pub fn has(&self, role: Role) -> bool {
        role == Role::User || self.0.contains(&role)
    }

    /// Check whether the admin role is held
    #[inline]
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.0.contains(&Role::Admin)
    }

    /// Effective roles: the assigned set plus the guaranteed user role
    #[must_use]
    pub fn effective(&self) -> Vec<Role> {
        let mut all = self.0.clone();
        all.insert(Role::User);
        all.into_iter().collect()
    }

    /// Effective roles as wire strings, for tokens and read projections
    #[must_use]
    pub fn effective_strings(&self) -> Vec<String> {
        self.effective()
            .into_iter()
            .map(|r| r.as_str().to_string())
            .collect()
    }

    /// Assigned roles as wire strings, the persisted form
    #[must_use]
    pub fn assigned_strings(&self) -> Vec<String> {
        self.0.iter().map(|r| r.as_str().to_string()).collect()
    }

    /// Rebuild from persisted wire strings
    ///
    /// An unknown role string is a data error, not a silent drop.
    pub fn from_strings<I, S>(strings: I) -> Result<Self, RoleParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for s in strings {
            set.insert(Role::parse(s.as_ref())?);
        }
        Ok(Self(set))
    }
}

impl FromIterator<Role> for RoleSet {
    fn from_iter<I: IntoIterator<Item = Role>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
