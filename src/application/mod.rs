//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（CatalogApi、ViewRenderer、SessionManager）
//! - store: 进程内目录快照（整体替换）
//! - commands: CQRS 命令及处理器（目录加载）
//! - queries: CQRS 查询及处理器（过滤排序、详情、列表）
//! - controller: 导航/交互状态机
//! - error: 应用层错误定义

pub mod commands;
pub mod controller;
pub mod error;
pub mod ports;
pub mod queries;
pub mod store;

// Re-exports
pub use commands::{handlers::LoadCatalogHandler, LoadCatalog};

pub use controller::{
    CatalogServices, ListKind, MountPoint, Page, Screen, ViewController, ViewEvent, ViewState,
};

pub use error::ApplicationError;

pub use ports::{
    // Catalog API
    BooksResponse,
    CatalogApiPort,
    CatalogError,
    // Session manager
    Session,
    SessionError,
    SessionManagerPort,
    // View renderer
    Placeholder,
    ViewRenderer,
};

pub use queries::{
    // Catalog queries
    GetBookDetail,
    ListAuthors,
    ListSeries,
    ListSubjects,
    SearchBooks,
    SearchBooksResponse,
    // Handlers
    handlers::{
        GetBookDetailHandler, ListAuthorsHandler, ListSeriesHandler, ListSubjectsHandler,
        SearchBooksHandler,
    },
};

pub use store::{CatalogStore, LoadReport, SectionStatus, SharedCatalogStore};
