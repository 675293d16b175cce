//! Session token providers.
//!
//! The client never owns credentials. A [`SessionProvider`] is injected at
//! construction and consulted before every request; sign-out goes through the
//! same object, so tests can substitute a counting double and applications
//! can plug in whatever auth store they use.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use thiserror::Error;

/// The session store itself failed. Not an auth rejection; those come back
/// from the backend as 401s.
#[derive(Debug, Error)]
#[error("session store error: {0}")]
pub struct SessionStoreError(pub String);

/// Supplies the current bearer token and the sign-out capability.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    /// Current access token. `None` is a valid state: the request goes out
    /// unauthenticated.
    async fn access_token(&self) -> Result<Option<String>, SessionStoreError>;

    /// Sign out. Must be idempotent: two near-simultaneous 401s both land
    /// here.
    async fn clear(&self);
}

/// Fixed-token session, for CLIs and tests.
#[derive(Debug, Default)]
pub struct StaticSession {
    token: Mutex<Option<String>>,
}

impl StaticSession {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self { token: Mutex::new(Some(token.into())) }
    }

    /// A session with no token; requests go out unauthenticated.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionProvider for StaticSession {
    async fn access_token(&self) -> Result<Option<String>, SessionStoreError> {
        let guard = self
            .token
            .lock()
            .map_err(|_| SessionStoreError("session lock poisoned".to_owned()))?;
        Ok(guard.clone())
    }

    async fn clear(&self) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = None;
        }
    }
}

/// Reads the token from an environment variable on every request, so a
/// long-lived process picks up rotation without restarting. `clear` latches:
/// once signed out, the variable is no longer consulted.
#[derive(Debug)]
pub struct EnvSession {
    var: String,
    cleared: AtomicBool,
}

impl EnvSession {
    /// The variable the CLI uses by default.
    pub const DEFAULT_VAR: &'static str = "HOSTELVOICE_TOKEN";

    #[must_use]
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into(), cleared: AtomicBool::new(false) }
    }
}

impl Default for EnvSession {
    fn default() -> Self {
        Self::new(Self::DEFAULT_VAR)
    }
}

#[async_trait]
impl SessionProvider for EnvSession {
    async fn access_token(&self) -> Result<Option<String>, SessionStoreError> {
        if self.cleared.load(Ordering::Acquire) {
            return Ok(None);
        }
        Ok(std::env::var(&self.var).ok().filter(|t| !t.is_empty()))
    }

    async fn clear(&self) {
        self.cleared.store(true, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_session_clear_is_idempotent() {
        let session = StaticSession::new("tok");
        assert_eq!(session.access_token().await.unwrap().as_deref(), Some("tok"));
        session.clear().await;
        session.clear().await;
        assert_eq!(session.access_token().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_env_session_latches_after_clear() {
        let var = "HV_TEST_SESSION_LATCH_77310";
        unsafe { std::env::set_var(var, "tok-1") };
        let session = EnvSession::new(var);
        assert_eq!(session.access_token().await.unwrap().as_deref(), Some("tok-1"));
        session.clear().await;
        assert_eq!(session.access_token().await.unwrap(), None);
        unsafe { std::env::remove_var(var) };
    }
}
