//! Session Snapshot Entity
//!
//! An immutable read of the client-held session at a point in time, handed
//! to subscribers. The bearer token itself is deliberately not part of the
//! snapshot: consumers decide *whether* the user is authenticated and with
//! what role, never what the credential is.

use serde::Serialize;

use crate::domain::value_object::{role::Role, token::Token, username::Username};

/// Point-in-time view of the session
///
/// # Invariants
/// - `is_authenticated` is true iff the normalized token was present;
///   role and username absence never affect it. A valid token with a
///   corrupt role yields an authenticated session with unknown privilege
///   (`role = None`), which every role check denies.
/// - `is_loading` is true only for the pre-first-read placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub is_authenticated: bool,
    pub role: Option<Role>,
    pub username: Option<Username>,
    pub is_loading: bool,
}

impl SessionSnapshot {
    /// Placeholder published before the first store read completes
    pub fn loading() -> Self {
        Self {
            is_authenticated: false,
            role: None,
            username: None,
            is_loading: true,
        }
    }

    /// Build a snapshot from raw stored values, applying all normalization.
    ///
    /// `None` inputs model missing keys; `Some` inputs still go through the
    /// presence rule, so a stored `""` or `"null"` counts as absent too.
    pub fn from_raw(token: Option<&str>, role: Option<&str>, username: Option<&str>) -> Self {
        let token = token.and_then(Token::parse);
        let role = role.and_then(Role::parse);
        let username = username.and_then(Username::parse);

        Self {
            is_authenticated: token.is_some(),
            role,
            username,
            is_loading: false,
        }
    }

    /// True iff the current role equals `required` exactly
    #[inline]
    pub fn has_role(&self, required: Role) -> bool {
        self.role == Some(required)
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role.is_some_and(|r| r.is_admin())
    }

    #[inline]
    pub fn is_agent(&self) -> bool {
        self.has_role(Role::Agent)
    }

    #[inline]
    pub fn is_client(&self) -> bool {
        self.has_role(Role::Client)
    }

    #[inline]
    pub fn is_agent_or_admin(&self) -> bool {
        self.role.is_some_and(|r| r.is_agent_or_admin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loading_placeholder() {
        let snapshot = SessionSnapshot::loading();
        assert!(snapshot.is_loading);
        assert!(!snapshot.is_authenticated);
        assert!(snapshot.role.is_none());
    }

    #[test]
    fn test_token_only_session_is_authenticated() {
        let snapshot = SessionSnapshot::from_raw(Some("abc123"), None, None);
        assert!(snapshot.is_authenticated);
        assert!(!snapshot.has_role(Role::Admin));
        assert!(snapshot.username.is_none());
    }

    #[test]
    fn test_empty_token_is_unauthenticated() {
        let snapshot = SessionSnapshot::from_raw(Some(""), Some("ADMIN"), Some("alice"));
        assert!(!snapshot.is_authenticated);
        // Role and username survive independently of the token
        assert_eq!(snapshot.role, Some(Role::Admin));
    }

    #[test]
    fn test_corrupt_role_keeps_authentication() {
        // Authenticated-with-unknown-privilege: token valid, role garbage
        let snapshot = SessionSnapshot::from_raw(Some("abc123"), Some("MANAGER"), None);
        assert!(snapshot.is_authenticated);
        assert!(snapshot.role.is_none());
        assert!(!snapshot.is_admin());
        assert!(!snapshot.is_agent_or_admin());
    }

    #[test]
    fn test_has_role_reflexive_under_normalization() {
        let snapshot = SessionSnapshot::from_raw(Some("t"), Some("agent"), None);
        assert!(snapshot.has_role(Role::Agent));
        assert!(snapshot.is_agent());
        assert!(snapshot.is_agent_or_admin());
        assert!(!snapshot.is_admin());
    }

    #[test]
    fn test_serialize_camel_case() {
        let snapshot = SessionSnapshot::from_raw(Some("t"), Some("CLIENT"), Some("alice"));
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains(r#""isAuthenticated":true"#));
        assert!(json.contains(r#""role":"CLIENT""#));
        assert!(json.contains(r#""username":"alice""#));
        assert!(json.contains(r#""isLoading":false"#));
    }
}
