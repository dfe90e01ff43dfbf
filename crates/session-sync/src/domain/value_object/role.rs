//! Role Value Object
//!
//! The closed set of privilege levels a session can carry. Parsing happens
//! once at the store boundary; call sites compare enum values and never
//! re-implement trim/case/sentinel handling.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::value_object::presence;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Agent,
    Client,
}

impl Role {
    /// Canonical stored form of the role
    #[inline]
    pub const fn code(&self) -> &'static str {
        use Role::*;
        match self {
            Admin => "ADMIN",
            Agent => "AGENT",
            Client => "CLIENT",
        }
    }

    /// Parse a raw stored value into a role.
    ///
    /// Applies the shared presence rule (trim, empty and sentinel rejection),
    /// then matches case-insensitively. A present but unrecognized value is
    /// treated the same as an absent one; it logs at warn because it usually
    /// means some writer stored a role outside the closed set.
    pub fn parse(raw: &str) -> Option<Self> {
        let cleaned = presence(raw)?;
        match cleaned.to_ascii_uppercase().as_str() {
            "ADMIN" => Some(Role::Admin),
            "AGENT" => Some(Role::Agent),
            "CLIENT" => Some(Role::Client),
            other => {
                tracing::warn!(role = %other, "Unrecognized stored role, treating as absent");
                None
            }
        }
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    #[inline]
    pub const fn is_agent_or_admin(&self) -> bool {
        matches!(self, Role::Agent | Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
