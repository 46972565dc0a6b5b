//! Admin login state, kept in session-scoped storage.
//!
//! Credentials are compiled in and compared in-process. This is a convenience gate for
//! the dashboard UI, not access control: anyone who can write the session store can set
//! the flag directly.

use super::AdminError;
use store_actor::{SharedStore, StorageError};
use tracing::{info, warn};

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin123";

pub const LOGGED_IN_KEY: &str = "adminLoggedIn";
pub const USERNAME_KEY: &str = "adminUsername";

/// Name shown when the session flag is set but no username was stored.
pub const FALLBACK_USERNAME: &str = "Admin";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    pub username: String,
}

pub struct SessionManager {
    store: SharedStore,
}

impl SessionManager {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// The session left by an earlier login, if its flag is still set. Credentials are not
    /// checked again.
    pub async fn restore(&self) -> Result<Option<AdminSession>, StorageError> {
        if self.store.get(LOGGED_IN_KEY).await?.as_deref() != Some("true") {
            return Ok(None);
        }
        let username = self
            .store
            .get(USERNAME_KEY)
            .await?
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| FALLBACK_USERNAME.to_string());
        info!(%username, "Admin session restored");
        Ok(Some(AdminSession { username }))
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<AdminSession, AdminError> {
        if username != ADMIN_USERNAME || password != ADMIN_PASSWORD {
            warn!(%username, "Admin login rejected");
            return Err(AdminError::InvalidCredentials);
        }
        self.store.set(LOGGED_IN_KEY, "true".to_string()).await?;
        self.store.set(USERNAME_KEY, username.to_string()).await?;
        info!(%username, "Admin logged in");
        Ok(AdminSession {
            username: username.to_string(),
        })
    }

    pub async fn logout(&self) -> Result<(), StorageError> {
        self.store.remove(LOGGED_IN_KEY).await?;
        self.store.remove(USERNAME_KEY).await?;
        info!("Admin logged out");
        Ok(())
    }
}
