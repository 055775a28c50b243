//! In-Memory Session Manager Implementation

use chrono::Utc;
use dashmap::DashMap;

use crate::application::controller::ViewController;
use crate::application::ports::{Session, SessionError, SessionManagerPort};

/// 内存会话管理器
pub struct InMemorySessionManager {
    sessions: DashMap<String, Session>,
}

impl InMemorySessionManager {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

impl Default for InMemorySessionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionManagerPort for InMemorySessionManager {
    fn create(&self, session: Session) -> Result<String, SessionError> {
        let session_id = session.id.clone();
        if self.sessions.contains_key(&session_id) {
            return Err(SessionError::AlreadyExists(session_id));
        }
        self.sessions.insert(session_id.clone(), session);
        tracing::info!(session_id = %session_id, "Session created");
        Ok(session_id)
    }

    fn get(&self, id: &str) -> Result<Session, SessionError> {
        self.sessions
            .get(id)
            .map(|s| s.clone())
            .ok_or_else(|| SessionError::NotFound(id.to_string()))
    }

    fn save(&self, id: &str, controller: ViewController) -> Result<(), SessionError> {
        let mut session = self
            .sessions
            .get_mut(id)
            .ok_or_else(|| SessionError::NotFound(id.to_string()))?;
        session.controller = controller;
        session.last_activity = Utc::now();
        tracing::debug!(session_id = %id, screen = ?session.controller.state().screen, "Session saved");
        Ok(())
    }

    fn close(&self, id: &str) -> Result<(), SessionError> {
        self.sessions
            .remove(id)
            .map(|_| {
                tracing::info!(session_id = %id, "Session closed");
            })
            .ok_or_else(|| SessionError::NotFound(id.to_string()))
    }

    fn get_expired_sessions(&self, idle_timeout_secs: u64) -> Vec<String> {
        let now = Utc::now();
        let timeout = match i64::try_from(idle_timeout_secs)
            .ok()
            .and_then(chrono::Duration::try_seconds)
        {
            Some(timeout) => timeout,
            None => {
                tracing::warn!(idle_timeout_secs, "Idle timeout out of range, nothing expires");
                return Vec::new();
            }
        };

        self.sessions
            .iter()
            .filter_map(|entry| {
                let elapsed = now - entry.last_activity;
                if elapsed > timeout {
                    Some(entry.key().clone())
                } else {
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::search::{FilterMode, SortKey};

    fn new_session() -> Session {
        Session::new(ViewController::new(SortKey::TitleAsc))
    }

    #[test]
    fn test_session_lifecycle() {
        let manager = InMemorySessionManager::new();
        let session = new_session();
        let session_id = session.id.clone();

        // Create
        let result = manager.create(session);
        assert!(result.is_ok());
        assert_eq!(manager.len(), 1);

        // Get
        let session = manager.get(&session_id);
        assert!(session.is_ok());
        assert_eq!(session.unwrap().controller.state().filter, FilterMode::All);

        // Close
        let result = manager.close(&session_id);
        assert!(result.is_ok());
        assert!(manager.get(&session_id).is_err());
        assert!(manager.is_empty());
    }

    #[test]
    fn test_duplicate_and_missing() {
        let manager = InMemorySessionManager::new();
        let session = new_session();
        manager.create(session.clone()).unwrap();

        assert!(matches!(
            manager.create(session),
            Err(SessionError::AlreadyExists(_))
        ));
        assert!(matches!(manager.get("nope"), Err(SessionError::NotFound(_))));
        assert!(matches!(
            manager.save("nope", ViewController::new(SortKey::TitleAsc)),
            Err(SessionError::NotFound(_))
        ));
    }

    #[test]
    fn test_save_is_last_write_wins() {
        let manager = InMemorySessionManager::new();
        let id = manager.create(new_session()).unwrap();

        let first = ViewController::new(SortKey::TitleDesc);
        let second = ViewController::new(SortKey::Recent);
        manager.save(&id, first).unwrap();
        manager.save(&id, second).unwrap();

        assert_eq!(manager.get(&id).unwrap().controller.state().sort, SortKey::Recent);
    }

    #[test]
    fn test_expired_sessions() {
        let manager = InMemorySessionManager::new();
        let mut stale = new_session();
        stale.last_activity = Utc::now() - chrono::Duration::seconds(120);
        let stale_id = manager.create(stale).unwrap();
        manager.create(new_session()).unwrap();

        let expired = manager.get_expired_sessions(60);
        assert_eq!(expired, vec![stale_id]);
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn test_out_of_range_timeout_expires_nothing() {
        let manager = InMemorySessionManager::new();
        let mut stale = new_session();
        stale.last_activity = Utc::now() - chrono::Duration::days(365);
        manager.create(stale).unwrap();

        assert!(manager.get_expired_sessions(u64::MAX).is_empty());
        assert!(manager.get_expired_sessions(i64::MAX as u64).is_empty());
    }
}
