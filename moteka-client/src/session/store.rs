//! Session storage - durable and tab scopes

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};
use shared::SessionUser;
use thiserror::Error;

/// Session storage failure
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A stored session: bearer token plus the user it belongs to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSession {
    pub access_token: String,
    pub user: SessionUser,
}

/// Two-scope session store.
///
/// The durable scope is `session.json` under the data directory; the
/// tab scope is an in-memory slot living as long as the process. Reads
/// prefer the durable scope. Writes go to exactly one scope and wipe
/// the other, so a cleared session cannot resurface from a scope an
/// earlier login left behind.
#[derive(Debug)]
pub struct SessionStore {
    /// Durable scope path: {data_dir}/session.json
    file_path: PathBuf,
    /// Tab scope
    tab: RwLock<Option<StoredSession>>,
}

impl SessionStore {
    /// Create a store rooted at `data_dir`
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let file_path = data_dir.into().join("session.json");
        Self {
            file_path,
            tab: RwLock::new(None),
        }
    }

    /// Durable scope path
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Store a session. `remember` selects the durable scope.
    pub fn set(
        &self,
        token: impl Into<String>,
        user: SessionUser,
        remember: bool,
    ) -> Result<(), SessionError> {
        let session = StoredSession {
            access_token: token.into(),
            user,
        };
        if remember {
            self.ensure_dir()?;
            let json = serde_json::to_string_pretty(&session)?;
            fs::write(&self.file_path, json)?;
            *self.tab_write() = None;
        } else {
            self.remove_durable()?;
            *self.tab_write() = Some(session);
        }
        tracing::debug!(remember, "Session stored");
        Ok(())
    }

    /// Current token. Durable scope wins, then tab scope.
    pub fn token(&self) -> Option<String> {
        self.load_durable()
            .map(|s| s.access_token)
            .or_else(|| self.tab_read().as_ref().map(|s| s.access_token.clone()))
    }

    /// Current user. Same precedence as [`token`](Self::token).
    pub fn user(&self) -> Option<SessionUser> {
        self.load_durable()
            .map(|s| s.user)
            .or_else(|| self.tab_read().as_ref().map(|s| s.user.clone()))
    }

    /// Remove the session from both scopes unconditionally
    pub fn clear(&self) -> Result<(), SessionError> {
        self.remove_durable()?;
        *self.tab_write() = None;
        tracing::debug!("Session cleared");
        Ok(())
    }

    /// Durable read. A file that is missing, unreadable or malformed
    /// reads as absence; a corrupt session is never an error to the
    /// caller.
    fn load_durable(&self) -> Option<StoredSession> {
        if !self.file_path.exists() {
            return None;
        }
        let json = fs::read_to_string(&self.file_path).ok()?;
        serde_json::from_str(&json).ok()
    }

    fn remove_durable(&self) -> std::io::Result<()> {
        if self.file_path.exists() {
            fs::remove_file(&self.file_path)?;
        }
        Ok(())
    }

    fn ensure_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    fn tab_read(&self) -> RwLockReadGuard<'_, Option<StoredSession>> {
        self.tab.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn tab_write(&self) -> RwLockWriteGuard<'_, Option<StoredSession>> {
        self.tab.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Role;

    fn user(rol: Role) -> SessionUser {
        SessionUser {
            id: 1,
            usuario: "ana".to_string(),
            rol,
            rol_id: 1,
        }
    }

    #[test]
    fn remembered_session_lands_in_durable_scope() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path());

        store.set("tok-1", user(Role::Gerente), true).unwrap();

        assert!(store.path().exists());
        assert_eq!(store.token().as_deref(), Some("tok-1"));
        assert_eq!(store.user().unwrap().usuario, "ana");
    }

    #[test]
    fn unremembered_session_stays_off_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path());

        store.set("tok-2", user(Role::Mecanico), false).unwrap();

        assert!(!store.path().exists());
        assert_eq!(store.token().as_deref(), Some("tok-2"));
    }

    #[test]
    fn set_wipes_the_other_scope() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path());

        store.set("durable", user(Role::Gerente), true).unwrap();
        store.set("tab", user(Role::Mecanico), false).unwrap();

        // The remembered session must not resurface.
        assert!(!store.path().exists());
        assert_eq!(store.token().as_deref(), Some("tab"));

        store.set("durable-2", user(Role::Gerente), true).unwrap();
        store.clear().unwrap();
        assert_eq!(store.token(), None);
    }

    #[test]
    fn durable_scope_wins_on_read() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path());

        store.set("tab", user(Role::Mecanico), false).unwrap();
        // Simulate a stale durable entry written by another run.
        let stale = StoredSession {
            access_token: "durable".to_string(),
            user: user(Role::Gerente),
        };
        fs::write(store.path(), serde_json::to_string(&stale).unwrap()).unwrap();

        assert_eq!(store.token().as_deref(), Some("durable"));
        assert_eq!(store.user().unwrap().rol, Role::Gerente);
    }

    #[test]
    fn clear_empties_both_scopes() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path());

        store.set("tok", user(Role::Encargado), true).unwrap();
        store.clear().unwrap();
        assert_eq!(store.token(), None);
        assert_eq!(store.user().map(|u| u.usuario), None);
        assert!(!store.path().exists());

        store.set("tok", user(Role::Encargado), false).unwrap();
        store.clear().unwrap();
        assert_eq!(store.token(), None);
    }

    #[test]
    fn corrupt_durable_file_reads_as_absence() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path());

        fs::write(store.path(), "not json{{").unwrap();
        assert_eq!(store.token(), None);
        assert_eq!(store.user().map(|u| u.id), None);
    }

    #[test]
    fn unknown_role_on_disk_reads_as_absence() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path());

        fs::write(
            store.path(),
            r#"{"access_token":"tok","user":{"id":1,"usuario":"ana","rol":"jefe","rol_id":9}}"#,
        )
        .unwrap();
        // Token still reads (it parses as a whole or not at all), so the
        // record with a role outside the closed set yields nothing.
        assert_eq!(store.user().map(|u| u.id), None);
        assert_eq!(store.token(), None);
    }
}
