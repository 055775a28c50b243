//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::CatalogError;
use crate::domain::catalog::Gender;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 外部目录服务错误（获取或解析失败）
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// 书目未能加载
    #[error("Books unavailable: {0}")]
    BooksUnavailable(String),

    /// 性别名单未能加载
    #[error("Author roster unavailable: {0}")]
    RosterUnavailable(Gender),
}

impl ApplicationError {
    /// 创建书目不可用错误
    pub fn books_unavailable(message: impl Into<String>) -> Self {
        Self::BooksUnavailable(message.into())
    }
}
