//! SessionManager: concurrent per-session access via DashMap.

use std::sync::Arc;

use dashmap::DashMap;

use crate::session::EvaluationSession;

/// Thread-safe owner of live evaluation sessions. Sessions never cross
/// users; dropping one discards its in-progress state.
pub struct SessionManager {
    sessions: Arc<DashMap<String, EvaluationSession>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
        }
    }

    /// Register a session and return its id.
    pub fn insert(&self, session: EvaluationSession) -> String {
        let id = session.session_id.clone();
        self.sessions.insert(id.clone(), session);
        id
    }

    /// Get a session by id (cloned snapshot).
    pub fn get(&self, session_id: &str) -> Option<EvaluationSession> {
        self.sessions.get(session_id).map(|r| r.clone())
    }

    /// Write back an updated session.
    pub fn update(&self, session: EvaluationSession) {
        self.sessions.insert(session.session_id.clone(), session);
    }

    /// Remove a session, discarding its state.
    pub fn remove(&self, session_id: &str) -> Option<EvaluationSession> {
        self.sessions.remove(session_id).map(|(_, v)| v)
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Ids of all live sessions.
    pub fn session_ids(&self) -> Vec<String> {
        self.sessions.iter().map(|r| r.key().clone()).collect()
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}
