// ── Session state cache ──
//
// Tracks what we last learned about the cookie session from the
// validation endpoints. The cache is advisory: the service remains the
// authority, and any authentication failure from it invalidates the
// cached state immediately.

use tokio::sync::RwLock;
use tracing::debug;

use crate::model::EntityId;

/// What we currently believe about the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No validation has happened yet (or the cache was invalidated).
    Unknown,
    /// The service accepted the session cookie.
    Authenticated {
        user_id: Option<EntityId>,
        email: Option<String>,
    },
    /// The service rejected the session cookie.
    Anonymous,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }
}

/// Shared, interior-mutable session state.
#[derive(Debug)]
pub struct SessionCache {
    state: RwLock<SessionState>,
}

impl Default for SessionCache {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionCache {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(SessionState::Unknown),
        }
    }

    pub async fn state(&self) -> SessionState {
        self.state.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.is_authenticated()
    }

    /// Record a successful session validation.
    pub async fn mark_authenticated(&self, user_id: Option<EntityId>, email: Option<String>) {
        debug!(?user_id, "session validated");
        *self.state.write().await = SessionState::Authenticated { user_id, email };
    }

    /// Record a rejected session validation.
    pub async fn mark_anonymous(&self) {
        debug!("session rejected");
        *self.state.write().await = SessionState::Anonymous;
    }

    /// Forget everything, forcing the next caller to revalidate.
    pub async fn invalidate(&self) {
        *self.state.write().await = SessionState::Unknown;
    }

    /// Best-effort synchronous invalidation for error paths that cannot
    /// await. Skipped if the lock is contended.
    pub fn try_invalidate(&self) {
        if let Ok(mut guard) = self.state.try_write() {
            *guard = SessionState::Unknown;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn starts_unknown() {
        let cache = SessionCache::new();
        assert_eq!(cache.state().await, SessionState::Unknown);
        assert!(!cache.is_authenticated().await);
    }

    #[tokio::test]
    async fn authentication_then_invalidation() {
        let cache = SessionCache::new();
        cache
            .mark_authenticated(Some(EntityId::from("u-1")), Some("a@b.test".into()))
            .await;
        assert!(cache.is_authenticated().await);

        cache.invalidate().await;
        assert_eq!(cache.state().await, SessionState::Unknown);
    }

    #[tokio::test]
    async fn rejection_marks_anonymous() {
        let cache = SessionCache::new();
        cache.mark_anonymous().await;
        assert_eq!(cache.state().await, SessionState::Anonymous);
        assert!(!cache.is_authenticated().await);
    }
}
