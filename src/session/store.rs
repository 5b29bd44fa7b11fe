use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::models::User;
use crate::storage::Storage;

/// Storage slot holding the serialized user record of the current session.
pub const USER_KEY: &str = "current_user";

/// Reserved slot for a future token-based handshake. Nothing writes it yet;
/// logout clears it alongside the user record so a stale token can never
/// outlive the session that would have owned it.
pub const TOKEN_KEY: &str = "auth_token";

/// The single source of truth for "who is logged in".
///
/// Holds the user in memory and mirrors every change to the storage backend,
/// so the session can be restored after a restart. There is no stored
/// `authenticated` flag: being authenticated is defined as having a user,
/// and [`SessionStore::is_authenticated`] derives it on every read.
pub struct SessionStore {
    storage: Arc<dyn Storage>,
    user: RwLock<Option<User>>,
}

impl SessionStore {
    /// Builds the session by reading the persisted user record.
    ///
    /// An empty slot yields a logged-out session. A slot that exists but
    /// does not deserialize is an error; callers at startup treat it as
    /// fatal rather than silently discarding the record.
    pub fn restore(storage: Arc<dyn Storage>) -> Result<Self, String> {
        let user = match storage.get(USER_KEY)? {
            Some(raw) => {
                let user: User = serde_json::from_str(&raw)
                    .map_err(|e| format!("Malformed persisted user record: {}", e))?;
                info!("Restored session for user '{}'.", user.username);
                Some(user)
            }
            None => {
                debug!("No persisted user record found. Starting logged out.");
                None
            }
        };

        Ok(SessionStore {
            storage,
            user: RwLock::new(user),
        })
    }

    /// Makes `user` the current session user and persists the record.
    ///
    /// Always succeeds short of a storage failure; the record's shape is the
    /// host's business. Logging in over an existing session simply replaces
    /// it with the latest record.
    pub fn login(&self, user: User) -> Result<(), String> {
        let raw = serde_json::to_string(&user)
            .map_err(|e| format!("Failed to serialize user record: {}", e))?;
        info!("Logging in user '{}'.", user.username);
        *self.user.write() = Some(user);
        self.storage.set(USER_KEY, &raw)
    }

    /// Ends the session: clears the in-memory user and deletes both the
    /// user record and the reserved token slot from storage.
    pub fn logout(&self) -> Result<(), String> {
        info!("Logging out.");
        *self.user.write() = None;
        self.storage.remove(USER_KEY)?;
        self.storage.remove(TOKEN_KEY)
    }

    /// The current user, if any.
    pub fn current_user(&self) -> Option<User> {
        self.user.read().clone()
    }

    /// Whether a user is logged in. Derived from the user slot on every
    /// read; cannot diverge from [`SessionStore::current_user`].
    pub fn is_authenticated(&self) -> bool {
        self.user.read().is_some()
    }

    /// The current user's username, or the empty string when logged out.
    pub fn username(&self) -> String {
        self.user
            .read()
            .as_ref()
            .map(|u| u.username.clone())
            .unwrap_or_default()
    }
}
