//! Catalog API Port - 外部目录 API 抽象
//!
//! 定义读取外部目录服务的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::catalog::{
    AuthorSummary, Book, BookDetail, BookId, CatalogStats, Gender, SeriesSummary, SubjectSummary,
};

/// 目录 API 错误
///
/// 对用户而言只有一种错误（获取或解析失败），这里细分仅用于日志。
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// `GET /api/books` 响应体
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BooksResponse {
    pub books: Vec<Book>,
    #[serde(default)]
    pub stats: CatalogStats,
}

/// Catalog API Port
#[async_trait]
pub trait CatalogApiPort: Send + Sync {
    /// 全部书目及统计
    async fn list_books(&self) -> Result<BooksResponse, CatalogError>;

    /// 单本书详情
    async fn get_book(&self, id: BookId) -> Result<BookDetail, CatalogError>;

    /// 作者列表（含封面）
    async fn authors_with_covers(&self) -> Result<Vec<AuthorSummary>, CatalogError>;

    /// 系列列表（含封面）
    async fn series_with_covers(&self) -> Result<Vec<SeriesSummary>, CatalogError>;

    /// 主题列表
    async fn subjects(&self) -> Result<Vec<SubjectSummary>, CatalogError>;

    /// 某一性别的作者名单
    async fn authors_by_gender(&self, gender: Gender) -> Result<Vec<String>, CatalogError>;

    /// 检查目录服务是否可用
    async fn health_check(&self) -> bool {
        true // 默认实现
    }
}
