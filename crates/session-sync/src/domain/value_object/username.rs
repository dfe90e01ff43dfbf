//! Username Value Object
//!
//! Display name attached to the session. Case is preserved; only the shared
//! presence rule (trim, sentinel rejection) is applied.

use serde::Serialize;
use std::fmt;

use crate::domain::value_object::presence;

/// Normalized, non-empty display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub struct Username(String);

impl Username {
    /// Parse a raw stored value into a username.
    pub fn parse(raw: &str) -> Option<Self> {
        presence(raw).map(|cleaned| Self(cleaned.to_string()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Username> for String {
    fn from(username: Username) -> Self {
        username.0
    }
}
