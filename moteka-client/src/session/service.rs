//! Session service
//!
//! One object owns both storage scopes and answers every session
//! question: validity, current user, role membership. Constructed once
//! from the configuration and passed by reference; nothing in the crate
//! touches storage ambiently.

use chrono::Utc;
use shared::SessionUser;
use shared::models::role::Role;

use super::store::{SessionError, SessionStore};
use super::token::{SessionValidity, is_token_expired};

/// Session facade over the two-scope store
#[derive(Debug)]
pub struct SessionService {
    store: SessionStore,
}

impl SessionService {
    pub fn new(store: SessionStore) -> Self {
        Self { store }
    }

    /// Store a fresh session after login
    pub fn set_session(
        &self,
        token: &str,
        user: SessionUser,
        remember: bool,
    ) -> Result<(), SessionError> {
        tracing::info!(usuario = %user.usuario, rol = %user.rol, remember, "Session opened");
        self.store.set(token, user, remember)
    }

    /// Validity at an explicit `now` (Unix seconds).
    ///
    /// Pure: never mutates storage. Callers decide whether an `Expired`
    /// verdict should invalidate - the route guards do.
    pub fn validity_at(&self, now: i64) -> SessionValidity {
        match self.store.token() {
            None => SessionValidity::Missing,
            Some(token) if is_token_expired(&token, now) => SessionValidity::Expired,
            Some(_) => SessionValidity::Valid,
        }
    }

    /// Validity against the wall clock
    pub fn validity(&self) -> SessionValidity {
        self.validity_at(Utc::now().timestamp())
    }

    /// True iff a fresh session is present. Pure.
    pub fn is_authenticated(&self) -> bool {
        self.validity() == SessionValidity::Valid
    }

    /// Drop the session from both scopes.
    ///
    /// Storage failures are logged and swallowed; there is nothing a
    /// caller redirecting to the login screen could do about them.
    pub fn invalidate(&self) {
        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "Failed to clear session");
        }
    }

    /// Current token, if any scope holds one
    pub fn token(&self) -> Option<String> {
        self.store.token()
    }

    /// Current user, if any scope holds one
    pub fn user(&self) -> Option<SessionUser> {
        self.store.user()
    }

    /// True iff the stored user's role is in `allow`.
    ///
    /// Pure set membership, no hierarchy. No stored user means no role.
    pub fn has_role(&self, allow: &[Role]) -> bool {
        self.store
            .user()
            .map(|u| allow.contains(&u.rol))
            .unwrap_or(false)
    }

    /// The underlying store
    pub fn store(&self) -> &SessionStore {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};

    fn make_token(exp: i64) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(format!(r#"{{"exp":{exp}}}"#).as_bytes());
        format!("{header}.{body}.sig")
    }

    fn user(rol: Role) -> SessionUser {
        SessionUser {
            id: 7,
            usuario: "luis".to_string(),
            rol,
            rol_id: 2,
        }
    }

    fn service() -> (tempfile::TempDir, SessionService) {
        let dir = tempfile::tempdir().unwrap();
        let service = SessionService::new(SessionStore::new(dir.path()));
        (dir, service)
    }

    #[test]
    fn validity_is_missing_without_a_session() {
        let (_dir, service) = service();
        assert_eq!(service.validity_at(0), SessionValidity::Missing);
    }

    #[test]
    fn validity_tracks_token_expiry() {
        let (_dir, service) = service();
        let now = 1_700_000_000;

        service
            .set_session(&make_token(now + 60), user(Role::Gerente), false)
            .unwrap();
        assert_eq!(service.validity_at(now), SessionValidity::Valid);
        assert_eq!(service.validity_at(now + 61), SessionValidity::Expired);
    }

    #[test]
    fn expired_verdict_does_not_mutate_storage() {
        let (_dir, service) = service();
        let now = 1_700_000_000;

        service
            .set_session(&make_token(now - 1), user(Role::Gerente), true)
            .unwrap();
        assert_eq!(service.validity_at(now), SessionValidity::Expired);
        // Still there until someone explicitly invalidates.
        assert!(service.token().is_some());

        service.invalidate();
        assert_eq!(service.token(), None);
        assert_eq!(service.validity_at(now), SessionValidity::Missing);
    }

    #[test]
    fn has_role_is_exact_membership() {
        let (_dir, service) = service();

        assert!(!service.has_role(&[Role::Gerente]));

        service
            .set_session(&make_token(i64::MAX), user(Role::Gerente), false)
            .unwrap();
        assert!(service.has_role(&[Role::Gerente]));
        assert!(service.has_role(&[Role::Gerente, Role::Encargado]));
        assert!(!service.has_role(&[Role::Encargado, Role::Mecanico]));
        assert!(!service.has_role(&[]));
    }
}
