//! Catalog Queries

use crate::domain::catalog::{Book, BookId, Gender};
use crate::domain::search::{FilterMode, SortKey};

/// 搜索书目（过滤 + 排序）
#[derive(Debug, Clone, Default)]
pub struct SearchBooks {
    pub query: String,
    pub filter: FilterMode,
    pub sort: SortKey,
}

/// 搜索结果
#[derive(Debug, Clone)]
pub struct SearchBooksResponse {
    pub books: Vec<Book>,
    /// 按性别过滤但该名单未能加载
    pub roster_missing: Option<Gender>,
}

/// 获取书籍详情
#[derive(Debug, Clone)]
pub struct GetBookDetail {
    pub book_id: BookId,
}

/// 列出作者，可按性别名单筛选
#[derive(Debug, Clone, Default)]
pub struct ListAuthors {
    pub gender: Option<Gender>,
}

/// 列出系列
#[derive(Debug, Clone)]
pub struct ListSeries;

/// 列出主题
#[derive(Debug, Clone)]
pub struct ListSubjects;
