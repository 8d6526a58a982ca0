use crate::error::ApiError;
use crate::models::{SessionConfig, SessionId};
use async_trait::async_trait;
use chroma_core::{PickerSession, Rgb};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// A change to one picker session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// Pointer moved over a pixel, or left the image (`None`)
    Hover(Option<Rgb>),
    /// Pixel clicked
    Select(Rgb),
    /// History entry clicked
    SelectFromHistory(usize),
    /// Selection dropped, hover shows again
    ClearSelection,
    /// New image loaded
    Reset,
}

/// Trait for picker session storage
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Start an empty session
    async fn create(&self) -> Result<SessionId, ApiError>;

    /// Find session by ID
    async fn find(&self, id: &SessionId) -> Result<Option<PickerSession>, ApiError>;

    /// Apply one action and return the updated session
    async fn apply(&self, id: &SessionId, action: SessionAction)
        -> Result<PickerSession, ApiError>;

    /// Drop a session, returning whether it existed
    async fn remove(&self, id: &SessionId) -> Result<bool, ApiError>;
}

/// Stored session with its last access time
struct SessionEntry {
    session: PickerSession,
    last_access: Instant,
    /// Store-wide access counter, orders entries touched within one clock tick
    access_seq: u64,
}

impl SessionEntry {
    fn new(access_seq: u64) -> Self {
        Self {
            session: PickerSession::new(),
            last_access: Instant::now(),
            access_seq,
        }
    }

    fn touch(&mut self, access_seq: u64) {
        self.last_access = Instant::now();
        self.access_seq = access_seq;
    }

    fn is_expired(&self, idle_timeout: Duration) -> bool {
        self.last_access.elapsed() > idle_timeout
    }
}

/// In-memory picker session storage.
///
/// Sessions idle for longer than the timeout are dropped, and creating a
/// session at capacity evicts the least recently used one.
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, SessionEntry>>>,
    max_sessions: usize,
    idle_timeout: Duration,
    access_counter: AtomicU64,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::from_config(&SessionConfig::default())
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::with_limits(
            config.max_sessions,
            Duration::from_secs(config.idle_timeout_secs),
        )
    }

    pub fn with_limits(max_sessions: usize, idle_timeout: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            max_sessions: max_sessions.max(1),
            idle_timeout,
            access_counter: AtomicU64::new(0),
        }
    }

    fn next_access(&self) -> u64 {
        self.access_counter.fetch_add(1, Ordering::Relaxed)
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Drop expired sessions, then the least recently used ones until a new
    /// session fits under the cap.
    fn make_room(&self, sessions: &mut HashMap<SessionId, SessionEntry>) {
        let before = sessions.len();
        sessions.retain(|_, entry| !entry.is_expired(self.idle_timeout));
        if sessions.len() < before {
            tracing::debug!(
                expired = before - sessions.len(),
                active = sessions.len(),
                "Expired idle sessions"
            );
        }

        while sessions.len() >= self.max_sessions {
            let Some(oldest) = sessions
                .iter()
                .min_by_key(|(_, entry)| entry.access_seq)
                .map(|(id, _)| id.clone())
            else {
                break;
            };
            sessions.remove(&oldest);
            tracing::debug!(
                session = %oldest,
                active = sessions.len(),
                "Evicted least recently used session"
            );
        }
    }

    /// Live entry for `id`, dropping it if it has expired.
    fn live_entry<'a>(
        &self,
        sessions: &'a mut HashMap<SessionId, SessionEntry>,
        id: &SessionId,
    ) -> Option<&'a mut SessionEntry> {
        if sessions
            .get(id)
            .is_some_and(|entry| entry.is_expired(self.idle_timeout))
        {
            sessions.remove(id);
            tracing::debug!(session = %id, "Session expired");
            return None;
        }

        let entry = sessions.get_mut(id)?;
        entry.touch(self.next_access());
        Some(entry)
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self) -> Result<SessionId, ApiError> {
        let mut sessions = self.sessions.write().await;
        self.make_room(&mut sessions);

        let mut id = SessionId::generate();
        while sessions.contains_key(&id) {
            id = SessionId::generate();
        }
        sessions.insert(id.clone(), SessionEntry::new(self.next_access()));
        tracing::debug!(session = %id, active = sessions.len(), "Session created");
        Ok(id)
    }

    async fn find(&self, id: &SessionId) -> Result<Option<PickerSession>, ApiError> {
        // Write lock: a lookup refreshes the access time
        let mut sessions = self.sessions.write().await;
        Ok(self
            .live_entry(&mut sessions, id)
            .map(|entry| entry.session.clone()))
    }

    async fn apply(
        &self,
        id: &SessionId,
        action: SessionAction,
    ) -> Result<PickerSession, ApiError> {
        let mut sessions = self.sessions.write().await;
        let session = &mut self
            .live_entry(&mut sessions, id)
            .ok_or(ApiError::SessionNotFound)?
            .session;

        match action {
            SessionAction::Hover(rgb) => session.hover(rgb),
            SessionAction::Select(rgb) => session.select(rgb),
            SessionAction::SelectFromHistory(index) => {
                let len = session.history().len();
                session
                    .select_from_history(index)
                    .ok_or(ApiError::HistoryIndexOutOfRange { index, len })?;
            }
            SessionAction::ClearSelection => session.clear_selection(),
            SessionAction::Reset => session.reset(),
        }

        tracing::debug!(session = %id, ?action, "Session updated");
        Ok(session.clone())
    }

    async fn remove(&self, id: &SessionId) -> Result<bool, ApiError> {
        let mut sessions = self.sessions.write().await;
        let existed = sessions.remove(id).is_some();
        if existed {
            tracing::debug!(session = %id, "Session removed");
        }
        Ok(existed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);

    #[tokio::test]
    async fn test_create_and_find() {
        let store = InMemorySessionStore::new();
        let id = store.create().await.unwrap();

        let found = store.find(&id).await.unwrap();
        assert_eq!(found, Some(PickerSession::new()));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_find_unknown() {
        let store = InMemorySessionStore::new();
        let found = store.find(&SessionId::new("missing")).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_apply_select_and_history() {
        let store = InMemorySessionStore::new();
        let id = store.create().await.unwrap();

        store.apply(&id, SessionAction::Select(RED)).await.unwrap();
        store.apply(&id, SessionAction::Select(BLUE)).await.unwrap();
        let session = store
            .apply(&id, SessionAction::SelectFromHistory(1))
            .await
            .unwrap();

        assert_eq!(session.selected(), Some(RED));
        assert_eq!(session.history().to_vec(), vec![BLUE, RED]);

        // Stored state matches the returned snapshot
        assert_eq!(store.find(&id).await.unwrap(), Some(session));
    }

    #[tokio::test]
    async fn test_apply_history_out_of_range() {
        let store = InMemorySessionStore::new();
        let id = store.create().await.unwrap();
        store.apply(&id, SessionAction::Select(RED)).await.unwrap();

        let result = store.apply(&id, SessionAction::SelectFromHistory(5)).await;
        assert!(matches!(
            result,
            Err(ApiError::HistoryIndexOutOfRange { index: 5, len: 1 })
        ));
    }

    #[tokio::test]
    async fn test_apply_unknown_session() {
        let store = InMemorySessionStore::new();
        let result = store
            .apply(&SessionId::new("missing"), SessionAction::Reset)
            .await;
        assert!(matches!(result, Err(ApiError::SessionNotFound)));
    }

    #[tokio::test]
    async fn test_remove() {
        let store = InMemorySessionStore::new();
        let id = store.create().await.unwrap();

        assert!(store.remove(&id).await.unwrap());
        assert!(!store.remove(&id).await.unwrap());
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_session_count_stays_at_cap() {
        let store = InMemorySessionStore::with_limits(3, Duration::from_secs(3600));

        let mut ids = Vec::new();
        for _ in 0..10 {
            ids.push(store.create().await.unwrap());
        }

        assert_eq!(store.len().await, 3);
        // The three newest survive
        for id in &ids[..7] {
            assert!(store.find(id).await.unwrap().is_none());
        }
        for id in &ids[7..] {
            assert!(store.find(id).await.unwrap().is_some());
        }
    }

    #[tokio::test]
    async fn test_recently_used_session_survives_eviction() {
        let store = InMemorySessionStore::with_limits(2, Duration::from_secs(3600));
        let first = store.create().await.unwrap();
        let second = store.create().await.unwrap();

        // Using the first session makes the second the eviction candidate
        store.apply(&first, SessionAction::Select(RED)).await.unwrap();
        let third = store.create().await.unwrap();

        assert!(store.find(&first).await.unwrap().is_some());
        assert!(store.find(&second).await.unwrap().is_none());
        assert!(store.find(&third).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_idle_sessions_expire() {
        let store = InMemorySessionStore::with_limits(100, Duration::from_millis(20));
        let idle = store.create().await.unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;

        let result = store.apply(&idle, SessionAction::Reset).await;
        assert!(matches!(result, Err(ApiError::SessionNotFound)));
        assert!(store.find(&idle).await.unwrap().is_none());
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn test_create_purges_expired_sessions() {
        let store = InMemorySessionStore::with_limits(100, Duration::from_millis(20));
        for _ in 0..5 {
            store.create().await.unwrap();
        }
        tokio::time::sleep(Duration::from_millis(50)).await;

        store.create().await.unwrap();
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_limits_from_config() {
        let config = SessionConfig {
            max_sessions: 1,
            idle_timeout_secs: 60,
        };
        let store = InMemorySessionStore::from_config(&config);
        store.create().await.unwrap();
        store.create().await.unwrap();
        assert_eq!(store.len().await, 1);
    }
}
