//! # Carepoint Session
//!
//! An explicitly constructed session container for Carepoint clients.
//!
//! The session holds the signed-in principal, its access token, and the
//! permission set derived from it. It has a defined lifecycle:
//!
//! 1. [`SessionStore::hydrate`] restores a persisted session at start-up
//! 2. [`SessionStore::sign_in`] / [`SessionStore::update_principal`] replace it
//! 3. [`SessionStore::sign_out`] clears memory and storage
//!
//! The permission set is never trusted from storage; it is re-derived from the
//! principal every time the session is loaded or changed.
//!
//! # Example
//!
//! ```ignore
//! use carepoint_session::{FileSessionStorage, SessionConfig, SessionStore};
//!
//! let config = SessionConfig::from_env();
//! let store = SessionStore::new(FileSessionStorage::new(config.file));
//! if let Some(principal) = store.hydrate().await? {
//!     println!("restored session for {:?}", principal.email);
//! }
//! ```

pub mod config;
pub mod error;
pub mod storage;
pub mod store;

pub use config::SessionConfig;
pub use error::SessionError;
pub use storage::{FileSessionStorage, MemorySessionStorage, SessionStorage, StoredSession};
pub use store::{Session, SessionStore};
