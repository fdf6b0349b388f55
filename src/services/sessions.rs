//! In-memory store for wizard sessions.

use chrono::{DateTime, TimeDelta, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::wizard::WizardSession;

/// Shared session map. Cloning shares the same sessions.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, WizardSession>>>,
    ttl: TimeDelta,
}

/// Used when the configured TTL does not fit a `TimeDelta`.
const FALLBACK_TTL_SECONDS: i64 = 3600;

impl SessionStore {
    pub fn new(ttl_seconds: u64) -> Self {
        let ttl = i64::try_from(ttl_seconds)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .unwrap_or_else(|| {
                tracing::warn!(
                    ttl_seconds,
                    fallback = FALLBACK_TTL_SECONDS,
                    "Session TTL out of range, using fallback"
                );
                TimeDelta::seconds(FALLBACK_TTL_SECONDS)
            });

        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Start a new session and return a copy of it.
    pub fn create(&self) -> WizardSession {
        let session = WizardSession::new();
        self.sessions.write().insert(session.id, session.clone());
        tracing::debug!(session_id = %session.id, "Session created");
        session
    }

    pub fn get(&self, id: Uuid) -> Option<WizardSession> {
        self.sessions.read().get(&id).cloned()
    }

    /// Run `f` against a session under the write lock.
    pub fn update<T>(&self, id: Uuid, f: impl FnOnce(&mut WizardSession) -> T) -> Option<T> {
        self.sessions.write().get_mut(&id).map(f)
    }

    pub fn remove(&self, id: Uuid) -> bool {
        let removed = self.sessions.write().remove(&id).is_some();
        tracing::debug!(session_id = %id, removed, "Session deleted");
        removed
    }

    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    /// Drop sessions idle for longer than the TTL. Returns how many went.
    pub fn sweep_expired(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.write();
        let before = sessions.len();
        // An expiry past the end of representable time never comes
        sessions.retain(|_, s| {
            s.updated_at
                .checked_add_signed(self.ttl)
                .map_or(true, |expires_at| expires_at > now)
        });
        before - sessions.len()
    }

    pub fn spawn_sweeper(&self, every: Duration) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(every);
            loop {
                interval.tick().await;
                let swept = store.sweep_expired(Utc::now());
                if swept > 0 {
                    tracing::info!(swept, remaining = store.len(), "Expired wizard sessions");
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::WizardStep;

    #[test]
    fn test_create_get_remove() {
        let store = SessionStore::new(60);
        let session = store.create();

        assert_eq!(store.get(session.id).map(|s| s.step), Some(WizardStep::PostalGate));
        assert_eq!(store.len(), 1);
        assert!(store.remove(session.id));
        assert!(!store.remove(session.id));
        assert!(store.get(session.id).is_none());
    }

    #[test]
    fn test_update_mutates_in_place() {
        let store = SessionStore::new(60);
        let id = store.create().id;

        let reset_revision = store.update(id, |s| {
            s.reset();
            s.revision
        });
        assert_eq!(reset_revision, Some(1));
        assert_eq!(store.get(id).unwrap().revision, 1);
        assert_eq!(store.update(Uuid::new_v4(), |s| s.revision), None);
    }

    #[test]
    fn test_sweep_drops_idle_sessions() {
        let store = SessionStore::new(60);
        let stale = store.create().id;
        let fresh = store.create().id;
        store.update(stale, |s| s.updated_at = Utc::now() - TimeDelta::seconds(120));

        assert_eq!(store.sweep_expired(Utc::now()), 1);
        assert!(store.get(stale).is_none());
        assert!(store.get(fresh).is_some());
    }

    #[test]
    fn test_oversized_ttl_falls_back() {
        let store = SessionStore::new(u64::MAX);
        assert_eq!(store.ttl, TimeDelta::seconds(FALLBACK_TTL_SECONDS));

        let store = SessionStore::new(10_000_000_000_000_000);
        assert_eq!(store.ttl, TimeDelta::seconds(FALLBACK_TTL_SECONDS));
    }

    #[test]
    fn test_sweep_keeps_sessions_expiring_past_max_time() {
        let store = SessionStore::new(9_000_000_000_000);
        let id = store.create().id;
        store.update(id, |s| s.updated_at = DateTime::<Utc>::MAX_UTC - TimeDelta::seconds(1));

        assert_eq!(store.sweep_expired(Utc::now()), 0);
        assert!(store.get(id).is_some());
    }
}
