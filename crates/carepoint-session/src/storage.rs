//! Session persistence backends.
//!
//! Implementations can be swapped without changing the store. Only the token,
//! the principal and the sign-in time are persisted; permissions are derived.

use carepoint_models::Principal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use tokio::fs;
use tokio::sync::Mutex;

use crate::error::SessionError;

pub type StorageFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, SessionError>> + Send + 'a>>;

/// What a backend persists.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub access_token: String,
    pub principal: Principal,
    pub signed_in_at: DateTime<Utc>,
}

impl std::fmt::Debug for StoredSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoredSession")
            .field("principal", &self.principal)
            .field("signed_in_at", &self.signed_in_at)
            .finish_non_exhaustive()
    }
}

pub trait SessionStorage: Send + Sync {
    /// Returns `None` when nothing has been persisted.
    fn load(&self) -> StorageFuture<'_, Option<StoredSession>>;

    fn save<'a>(&'a self, session: &'a StoredSession) -> StorageFuture<'a, ()>;

    /// Removes the persisted session. Clearing an empty storage is not an error.
    fn clear(&self) -> StorageFuture<'_, ()>;
}

/// Persists the session as a JSON file.
#[derive(Debug, Clone)]
pub struct FileSessionStorage {
    path: PathBuf,
}

impl FileSessionStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStorage for FileSessionStorage {
    fn load(&self) -> StorageFuture<'_, Option<StoredSession>> {
        Box::pin(async move {
            match fs::read(&self.path).await {
                Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
                Err(e) => Err(e.into()),
            }
        })
    }

    fn save<'a>(&'a self, session: &'a StoredSession) -> StorageFuture<'a, ()> {
        Box::pin(async move {
            if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).await?;
            }
            let bytes = serde_json::to_vec_pretty(session)?;
            fs::write(&self.path, bytes).await?;
            Ok(())
        })
    }

    fn clear(&self) -> StorageFuture<'_, ()> {
        Box::pin(async move {
            match fs::remove_file(&self.path).await {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
                Err(e) => Err(e.into()),
            }
        })
    }
}

/// Keeps the session in memory only.
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    slot: Mutex<Option<StoredSession>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemorySessionStorage {
    fn load(&self) -> StorageFuture<'_, Option<StoredSession>> {
        Box::pin(async move { Ok(self.slot.lock().await.clone()) })
    }

    fn save<'a>(&'a self, session: &'a StoredSession) -> StorageFuture<'a, ()> {
        Box::pin(async move {
            *self.slot.lock().await = Some(session.clone());
            Ok(())
        })
    }

    fn clear(&self) -> StorageFuture<'_, ()> {
        Box::pin(async move {
            self.slot.lock().await.take();
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carepoint_models::{CenterId, UserType};

    fn stored() -> StoredSession {
        StoredSession {
            access_token: "token".to_string(),
            principal: Principal::new(Some(UserType::Staff), Some(CenterId::new(4))),
            signed_in_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileSessionStorage::new(dir.path().join("nested/session.json"));

        assert!(storage.load().await.unwrap().is_none());

        let session = stored();
        storage.save(&session).await.unwrap();
        assert_eq!(storage.load().await.unwrap(), Some(session));

        storage.clear().await.unwrap();
        assert!(storage.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_file_storage_clear_missing_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileSessionStorage::new(dir.path().join("session.json"));
        assert!(storage.clear().await.is_ok());
    }

    #[tokio::test]
    async fn test_file_storage_corrupt_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, b"not json").unwrap();

        let storage = FileSessionStorage::new(path);
        assert!(matches!(
            storage.load().await,
            Err(SessionError::Serialization(_))
        ));
    }

    #[tokio::test]
    async fn test_memory_storage() {
        let storage = MemorySessionStorage::new();
        storage.save(&stored()).await.unwrap();
        assert!(storage.load().await.unwrap().is_some());
        storage.clear().await.unwrap();
        assert!(storage.load().await.unwrap().is_none());
    }

    #[test]
    fn test_debug_hides_token() {
        let debug = format!("{:?}", stored());
        assert!(!debug.contains("access_token"));
        assert!(debug.contains("principal"));
    }
}
