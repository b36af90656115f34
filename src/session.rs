//! Session state — current user identity and bearer token.
//!
//! ARCHITECTURE
//! ============
//! One `SessionStore` is shared (via `Arc`) between the API client and
//! whatever else reads auth state. Mutations are synchronous field swaps
//! under a single `RwLock`; storage mirroring happens outside the lock.
//! `logout` is idempotent, so overlapping 401 teardowns from concurrent
//! in-flight requests converge on the same cleared state.
//!
//! INVARIANT
//! =========
//! `user` is `Some` iff `token` is non-empty. The one tolerated exception
//! is [`SessionStore::restore`] over a corrupted user record, which keeps
//! the token and leaves the identity unset until the next login exchange.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::storage::SessionStorage;
use crate::types::{ROLE_ADMIN, User};

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "cinema_token";
/// Storage key for the serialized user record.
pub const USER_KEY: &str = "cinema_user";

#[derive(Debug, Default)]
struct SessionState {
    user: Option<User>,
    token: String,
}

/// Single source of truth for the current authentication state.
pub struct SessionStore {
    state: RwLock<SessionState>,
    storage: Arc<dyn SessionStorage>,
}

impl SessionStore {
    /// Create an empty, unauthenticated store over the given storage.
    #[must_use]
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self {
            state: RwLock::new(SessionState::default()),
            storage,
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, SessionState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Adopt a `(user, token)` pair from a successful login exchange.
    ///
    /// Both fields are replaced under one write guard, then mirrored to
    /// durable storage.
    pub fn set_auth(&self, user: User, token: String) {
        let record = serde_json::to_string(&user).ok();
        {
            let mut state = self.write();
            state.user = Some(user);
            state.token.clone_from(&token);
        }
        self.storage.set(TOKEN_KEY, &token);
        if let Some(record) = record {
            self.storage.set(USER_KEY, &record);
        }
    }

    /// Clear the session and remove the durable record. Idempotent.
    pub fn logout(&self) {
        {
            let mut state = self.write();
            state.user = None;
            state.token.clear();
        }
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }

    /// Restore a prior session from durable storage, if one exists.
    ///
    /// Requires both keys to be present and the token to be non-empty;
    /// otherwise the current state is left untouched. A user record that no
    /// longer parses restores the token alone — callers must tolerate a
    /// token-present, identity-absent session until the next login.
    pub fn restore(&self) {
        let Some(token) = self.storage.get(TOKEN_KEY) else {
            return;
        };
        let Some(record) = self.storage.get(USER_KEY) else {
            return;
        };
        if token.is_empty() {
            return;
        }

        let user = match serde_json::from_str::<User>(&record) {
            Ok(user) => Some(user),
            Err(error) => {
                tracing::warn!(error = %error, "stored user record unreadable; restoring token only");
                None
            }
        };

        let mut state = self.write();
        state.token = token;
        state.user = user;
    }

    /// Snapshot of the current bearer token. Empty means no session.
    #[must_use]
    pub fn token(&self) -> String {
        self.read().token.clone()
    }

    /// Snapshot of the current user identity.
    #[must_use]
    pub fn user(&self) -> Option<User> {
        self.read().user.clone()
    }

    /// True when a bearer token is held.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !self.read().token.is_empty()
    }

    /// True when the current user carries the admin role marker.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.read()
            .user
            .as_ref()
            .is_some_and(|user| user.role == ROLE_ADMIN)
    }
}
