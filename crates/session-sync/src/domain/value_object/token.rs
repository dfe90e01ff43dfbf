//! Token Value Object
//!
//! Opaque bearer credential. The synchronizer only cares whether one is
//! present; it never interprets the contents. Debug output redacts the
//! credential so it cannot leak through logs.

use std::fmt;

use crate::domain::value_object::presence;

/// Normalized, non-empty bearer token
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    /// Parse a raw stored value into a token.
    ///
    /// Present iff non-empty after trimming and not a sentinel string.
    pub fn parse(raw: &str) -> Option<Self> {
        presence(raw).map(|cleaned| Self(cleaned.to_string()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("len", &self.0.len())
            .finish_non_exhaustive()
    }
}
