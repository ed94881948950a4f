//! Route guards
//!
//! Two wrappers over the same capability: let the navigation through
//! or redirect it. `RequireAuth` gates on a fresh session,
//! `RequireRole` additionally on an allow-list. An expired session is
//! invalidated here, the single mutation on the navigation path, kept
//! explicit at this one call site.

use shared::models::role::Role;

use crate::session::{SessionService, SessionValidity};

/// Guard policy for a route
#[derive(Debug, Clone, Copy)]
pub enum Guard {
    /// No checks
    Public,
    /// Any authenticated user
    RequireAuth,
    /// Authenticated user whose role is in the allow-list
    RequireRole(&'static [Role]),
}

/// Outcome of a guard check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum GuardVerdict {
    Allow,
    ToLogin,
    ToHome,
}

impl Guard {
    pub(super) fn check(&self, session: &SessionService, now: i64) -> GuardVerdict {
        if matches!(self, Guard::Public) {
            return GuardVerdict::Allow;
        }

        match session.validity_at(now) {
            SessionValidity::Missing => return GuardVerdict::ToLogin,
            SessionValidity::Expired => {
                tracing::warn!(event = "session_expired", "Stored session expired, clearing");
                session.invalidate();
                return GuardVerdict::ToLogin;
            }
            SessionValidity::Valid => {}
        }

        if let Guard::RequireRole(allow) = self
            && !session.has_role(allow)
        {
            tracing::warn!(
                event = "role_denied",
                usuario = session.user().map(|u| u.usuario).unwrap_or_default(),
                "Navigation denied for current role"
            );
            return GuardVerdict::ToHome;
        }

        GuardVerdict::Allow
    }
}
