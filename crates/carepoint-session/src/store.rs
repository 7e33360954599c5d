//! The session container.

use carepoint_authz::Authority;
use carepoint_models::{PermissionSet, Principal};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use crate::error::SessionError;
use crate::storage::{SessionStorage, StoredSession};

/// The active session: principal, token, and the permissions derived from them.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    #[serde(skip_serializing)]
    pub access_token: String,
    pub principal: Principal,
    pub permissions: PermissionSet,
    pub signed_in_at: DateTime<Utc>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("principal", &self.principal)
            .field("permissions", &self.permissions)
            .field("signed_in_at", &self.signed_in_at)
            .finish_non_exhaustive()
    }
}

impl From<StoredSession> for Session {
    fn from(stored: StoredSession) -> Self {
        Self {
            permissions: stored.principal.permission_set(),
            access_token: stored.access_token,
            principal: stored.principal,
            signed_in_at: stored.signed_in_at,
        }
    }
}

impl Session {
    fn to_stored(&self) -> StoredSession {
        StoredSession {
            access_token: self.access_token.clone(),
            principal: self.principal.clone(),
            signed_in_at: self.signed_in_at,
        }
    }
}

/// Holds at most one session and keeps it in sync with its storage backend.
pub struct SessionStore<S> {
    storage: S,
    current: RwLock<Option<Session>>,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Creates an empty store. Call [`SessionStore::hydrate`] to restore a
    /// persisted session.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            current: RwLock::new(None),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Loads the persisted session, if any, and re-derives its permissions.
    #[instrument(skip(self))]
    pub async fn hydrate(&self) -> Result<Option<Principal>, SessionError> {
        let session = self.storage.load().await?.map(Session::from);
        let principal = session.as_ref().map(|s| s.principal.clone());

        match &principal {
            Some(p) => info!(user_type = ?p.user_type, center_id = ?p.center_id, "Session restored"),
            None => debug!("No persisted session"),
        }

        *self.current.write().await = session;
        Ok(principal)
    }

    #[instrument(skip(self, access_token))]
    pub async fn sign_in(
        &self,
        access_token: String,
        principal: Principal,
    ) -> Result<Session, SessionError> {
        let session = Session {
            permissions: principal.permission_set(),
            access_token,
            principal,
            signed_in_at: Utc::now(),
        };

        self.storage.save(&session.to_stored()).await?;
        *self.current.write().await = Some(session.clone());

        info!(user_type = ?session.principal.user_type, "Signed in");
        Ok(session)
    }

    /// Replaces the principal (e.g. after a role or center change) and
    /// recomputes its permissions.
    #[instrument(skip(self))]
    pub async fn update_principal(&self, principal: Principal) -> Result<Session, SessionError> {
        let mut current = self.current.write().await;
        let existing = current.as_ref().ok_or(SessionError::NotSignedIn)?;

        let session = Session {
            access_token: existing.access_token.clone(),
            permissions: principal.permission_set(),
            principal,
            signed_in_at: existing.signed_in_at,
        };
        self.storage.save(&session.to_stored()).await?;
        *current = Some(session.clone());

        Ok(session)
    }

    pub async fn current(&self) -> Option<Session> {
        self.current.read().await.clone()
    }

    pub async fn principal(&self) -> Option<Principal> {
        self.current
            .read()
            .await
            .as_ref()
            .map(|s| s.principal.clone())
    }

    pub async fn permissions(&self) -> Option<PermissionSet> {
        self.current
            .read()
            .await
            .as_ref()
            .map(|s| s.permissions.clone())
    }

    pub async fn is_signed_in(&self) -> bool {
        self.current.read().await.is_some()
    }

    /// Clears the in-memory session and the persisted copy. Safe to call when
    /// nobody is signed in.
    #[instrument(skip(self))]
    pub async fn sign_out(&self) -> Result<(), SessionError> {
        self.current.write().await.take();
        self.storage.clear().await?;
        info!("Signed out");
        Ok(())
    }
}
