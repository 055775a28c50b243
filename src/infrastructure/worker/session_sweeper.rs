//! Session Sweeper - 定期关闭空闲会话

use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::SessionManagerPort;

/// Sweeper 配置
#[derive(Debug, Clone)]
pub struct SessionSweeperConfig {
    /// 空闲多久后关闭会话（秒）
    pub idle_timeout_secs: u64,
    /// 扫描间隔（秒）
    pub interval_secs: u64,
}

impl Default for SessionSweeperConfig {
    fn default() -> Self {
        Self {
            idle_timeout_secs: 86_400,
            interval_secs: 3_600,
        }
    }
}

/// 会话清理 Worker
pub struct SessionSweeper {
    config: SessionSweeperConfig,
    session_manager: Arc<dyn SessionManagerPort>,
}

impl SessionSweeper {
    pub fn new(config: SessionSweeperConfig, session_manager: Arc<dyn SessionManagerPort>) -> Self {
        Self {
            config,
            session_manager,
        }
    }

    /// 执行一次清理，返回关闭的会话数
    pub fn sweep(&self) -> usize {
        let expired = self
            .session_manager
            .get_expired_sessions(self.config.idle_timeout_secs);

        let closed = expired
            .iter()
            .filter(|id| self.session_manager.close(id).is_ok())
            .count();

        if closed > 0 {
            tracing::info!(closed = closed, "Idle sessions swept");
        }
        closed
    }

    /// 启动 Worker
    pub async fn run(self) {
        tracing::info!(
            idle_timeout_secs = self.config.idle_timeout_secs,
            interval_secs = self.config.interval_secs,
            "SessionSweeper started"
        );

        let mut ticker = tokio::time::interval(Duration::from_secs(self.config.interval_secs));
        // 第一次 tick 立即返回
        ticker.tick().await;

        loop {
            ticker.tick().await;
            self.sweep();
        }
    }
}
