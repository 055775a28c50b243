//! Worker Layer - Background Task Processing
//!
//! 实现 SessionSweeper，定期清理空闲会话

mod session_sweeper;

pub use session_sweeper::{SessionSweeper, SessionSweeperConfig};
