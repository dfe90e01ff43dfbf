//! Role-Gated Admission
//!
//! Pure decision functions consuming a session snapshot. The route guard
//! decides between rendering, waiting, and redirecting; the inline content
//! guard only ever renders or falls back. Neither holds state of its own.

use crate::domain::entity::snapshot::SessionSnapshot;
use crate::domain::value_object::role::Role;

/// What a view requires of the session
///
/// The requirement shapes mirror the admin-panel routes this crate fronts:
/// any authenticated user, one exact role, agent-or-admin, or admin-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccessRequirement {
    /// Exact role required, if any
    pub required_role: Option<Role>,
    /// Require Agent or Admin
    pub require_agent_or_admin: bool,
    /// Require Admin only
    pub require_admin: bool,
}

impl AccessRequirement {
    /// Any authenticated session is admitted
    pub fn authenticated() -> Self {
        Self::default()
    }

    /// Require exactly `role`
    pub fn role(role: Role) -> Self {
        Self {
            required_role: Some(role),
            ..Self::default()
        }
    }

    /// Require Agent or Admin
    pub fn agent_or_admin() -> Self {
        Self {
            require_agent_or_admin: true,
            ..Self::default()
        }
    }

    /// Require Admin
    pub fn admin() -> Self {
        Self {
            require_admin: true,
            ..Self::default()
        }
    }

    fn roles_satisfied(&self, snapshot: &SessionSnapshot) -> bool {
        if let Some(required) = self.required_role {
            if !snapshot.has_role(required) {
                return false;
            }
        }
        if self.require_agent_or_admin && !snapshot.is_agent_or_admin() {
            return false;
        }
        if self.require_admin && !snapshot.is_admin() {
            return false;
        }
        true
    }
}

/// Route guard outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// First read has not completed; render a neutral waiting state instead
    /// of a premature redirect
    Wait,
    /// Admitted
    Render,
    /// Not authenticated
    RedirectToLogin,
    /// Authenticated but role requirement not met
    RedirectToFallback,
}

/// Inline content guard outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentDecision {
    /// Admitted
    Render,
    /// Render the fallback content (default: nothing)
    Fallback,
}

/// Decide admission for a routed view.
pub fn admit_route(snapshot: &SessionSnapshot, requirement: &AccessRequirement) -> RouteDecision {
    if snapshot.is_loading {
        return RouteDecision::Wait;
    }

    if !snapshot.is_authenticated {
        tracing::debug!("Route denied: not authenticated");
        return RouteDecision::RedirectToLogin;
    }

    if !requirement.roles_satisfied(snapshot) {
        tracing::debug!(
            role = ?snapshot.role,
            requirement = ?requirement,
            "Route denied: role requirement not met"
        );
        return RouteDecision::RedirectToFallback;
    }

    RouteDecision::Render
}

/// Decide admission for inline content.
///
/// Unlike the route guard there is no waiting state: while loading the
/// snapshot is unauthenticated and the fallback shows, which is the right
/// neutral behavior for inline fragments.
pub fn admit_content(
    snapshot: &SessionSnapshot,
    requirement: &AccessRequirement,
) -> ContentDecision {
    if snapshot.is_authenticated && requirement.roles_satisfied(snapshot) {
        ContentDecision::Render
    } else {
        ContentDecision::Fallback
    }
}
