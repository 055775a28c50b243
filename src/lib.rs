//! Shelfview - 图书目录浏览前端
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Catalog Context: 书目、作者/系列/主题汇总、性别名单
//! - Search Context: 过滤模式、排序键、过滤与排序
//!
//! 应用层 (application/):
//! - Ports: 端口定义（CatalogApi, ViewRenderer, SessionManager）
//! - Store: 已加载的目录快照
//! - Commands: 目录加载
//! - Queries: 搜索、详情、列表
//! - Controller: 导航/交互状态机
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: HTTP 目录客户端、测试用 Fake 客户端
//! - Render: maud HTML 渲染
//! - HTTP: 浏览页面 + 重新加载接口
//! - Memory: 会话注册表
//! - Worker: 空闲会话清理

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
