//! Infrastructure Layer - 基础设施层
//!
//! 提供所有端口的具体实现

pub mod adapters;
pub mod http;
pub mod memory;
pub mod render;
pub mod worker;

pub use adapters::{HttpCatalogClient, HttpCatalogClientConfig};
pub use memory::InMemorySessionManager;
pub use render::{AssetUrls, HtmlRenderer};
pub use worker::{SessionSweeper, SessionSweeperConfig};
