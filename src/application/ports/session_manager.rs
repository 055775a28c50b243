//! Session Manager Port - 浏览会话管理
//!
//! 每个浏览器会话拥有一个 ViewController，具体实现在 infrastructure/memory 层

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::application::controller::ViewController;

/// Session Manager 错误
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(String),

    #[error("Session already exists: {0}")]
    AlreadyExists(String),
}

/// 会话状态（in-memory）
#[derive(Debug, Clone)]
pub struct Session {
    pub id: String,
    pub controller: ViewController,
    pub created_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
}

impl Session {
    pub fn new(controller: ViewController) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            controller,
            created_at: now,
            last_activity: now,
        }
    }
}

/// Session Manager Port
///
/// `get` 返回控制器快照，`save` 整体写回：同一会话的并发事件以最后写回者为准。
pub trait SessionManagerPort: Send + Sync {
    /// 创建新会话
    fn create(&self, session: Session) -> Result<String, SessionError>;

    /// 获取会话快照
    fn get(&self, id: &str) -> Result<Session, SessionError>;

    /// 写回控制器
    fn save(&self, id: &str, controller: ViewController) -> Result<(), SessionError>;

    /// 关闭会话
    fn close(&self, id: &str) -> Result<(), SessionError>;

    /// 获取所有过期会话的 ID
    fn get_expired_sessions(&self, idle_timeout_secs: u64) -> Vec<String>;
}
