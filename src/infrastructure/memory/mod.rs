//! Memory Layer - In-Memory State Management
//!
//! 实现 SessionManager，保存每个浏览会话的视图控制器

mod session_manager;

pub use session_manager::InMemorySessionManager;
