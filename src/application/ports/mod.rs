//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod catalog_api;
mod session_manager;
mod view_renderer;

pub use catalog_api::{BooksResponse, CatalogApiPort, CatalogError};
pub use session_manager::{Session, SessionError, SessionManagerPort};
pub use view_renderer::{Placeholder, ViewRenderer};
