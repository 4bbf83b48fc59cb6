//! The client-side auth session.

use crate::{AuthError, AuthToken, User};
use farmgate_commerce::checkout::AuthGate;
use farmgate_store::{Storage, StorageExt};

/// Storage key for the persisted bearer token.
pub const TOKEN_STORAGE_KEY: &str = "farmgate.auth.token";

/// Storage key for the persisted user record.
pub const USER_STORAGE_KEY: &str = "farmgate.auth.user";

/// The visitor's auth state, durable across reloads on one device.
///
/// Holds the bearer token and the user it belongs to. Corrupt persisted
/// records are treated as a logged-out session rather than an error.
pub struct Session<S: Storage> {
    storage: S,
    token: Option<AuthToken>,
    user: Option<User>,
}

impl<S: Storage> Session<S> {
    /// Open the session, restoring any persisted login.
    pub fn open(storage: S) -> Self {
        let token = match storage.get_json::<AuthToken>(TOKEN_STORAGE_KEY) {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(error = %e, "discarding unreadable auth token record");
                None
            }
        };
        let user = match storage.get_json::<User>(USER_STORAGE_KEY) {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!(error = %e, "discarding unreadable auth user record");
                None
            }
        };
        Self {
            storage,
            token,
            user,
        }
    }

    /// Record a successful login.
    pub fn establish(&mut self, token: AuthToken, user: User) -> Result<(), AuthError> {
        self.storage.set_json(TOKEN_STORAGE_KEY, &token)?;
        self.storage.set_json(USER_STORAGE_KEY, &user)?;
        self.token = Some(token);
        self.user = Some(user);
        Ok(())
    }

    /// Log out.
    ///
    /// Local state is dropped even when the storage removal fails, so a
    /// logout always takes effect for the running session.
    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
        if let Err(e) = self.storage.remove(TOKEN_STORAGE_KEY) {
            tracing::warn!(error = %e, "failed to remove persisted auth token");
        }
        if let Err(e) = self.storage.remove(USER_STORAGE_KEY) {
            tracing::warn!(error = %e, "failed to remove persisted auth user");
        }
    }

    /// The stored bearer token, if any.
    pub fn token(&self) -> Option<&AuthToken> {
        self.token.as_ref()
    }

    /// The logged-in user, if any.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Whether a live (present and unexpired) token is held.
    pub fn is_authenticated_at(&self, now: i64) -> bool {
        match &self.token {
            Some(token) => !token.is_expired(now),
            None => false,
        }
    }
}

impl<S: Storage> AuthGate for Session<S> {
    fn is_authenticated(&self) -> bool {
        self.is_authenticated_at(current_timestamp())
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
