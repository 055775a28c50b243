//! Catalog Context - Entities
//!
//! 外部目录 API 返回的记录。本层只读取，不创建或修改。

use serde::{Deserialize, Serialize};

use super::{BookId, FileId};

/// 书目条目（列表视图）
///
/// 不变量:
/// - id 在目录内唯一
/// - series 为 None 表示单本（standalone）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    /// 展示用作者串，多个作者以 ", " 连接
    pub authors: String,
    /// 排序用作者键
    #[serde(default)]
    pub author_sort: String,
    #[serde(default)]
    pub series: Option<String>,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub has_cover: bool,
}

impl Book {
    /// 是否属于某个系列
    pub fn in_series(&self) -> bool {
        self.series.is_some()
    }
}

/// 可下载文件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookFile {
    pub id: FileId,
    /// 文件格式（扩展名，如 "epub"）
    pub format: String,
}

/// 书籍详情（详情视图）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDetail {
    pub id: BookId,
    pub title: String,
    pub authors: String,
    #[serde(default)]
    pub series: Option<String>,
    #[serde(default)]
    pub publisher: Option<String>,
    #[serde(default)]
    pub publish_date: Option<String>,
    #[serde(default)]
    pub isbn: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// 封面在服务端的路径；存在即表示有封面
    #[serde(default)]
    pub cover_path: Option<String>,
    #[serde(default)]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub files: Vec<BookFile>,
}

/// 封面引用（作者/系列列表中的缩略图）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverRef {
    pub book_id: BookId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub has_cover: bool,
}

/// 作者汇总
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorSummary {
    pub name: String,
    pub book_count: u32,
    #[serde(default)]
    pub covers: Vec<CoverRef>,
}

/// 系列汇总
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub name: String,
    pub book_count: u32,
    #[serde(default)]
    pub covers: Vec<CoverRef>,
}

/// 主题汇总
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectSummary {
    pub name: String,
    pub book_count: u32,
}

/// 目录统计
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub total_books: u64,
    #[serde(default)]
    pub total_authors: Option<u64>,
    #[serde(default)]
    pub total_series: Option<u64>,
    #[serde(default)]
    pub total_subjects: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_from_api_json() {
        let json = r#"{
            "id": 7,
            "title": "Dune",
            "authors": "Frank Herbert",
            "author_sort": "Herbert, Frank",
            "series": null,
            "subjects": ["Science Fiction"],
            "has_cover": true
        }"#;
        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.id, BookId::new(7));
        assert!(!book.in_series());
        assert_eq!(book.subjects, vec!["Science Fiction".to_string()]);
    }

    #[test]
    fn test_detail_ignores_file_path() {
        let json = r#"{
            "id": 1,
            "title": "Emma",
            "authors": "Jane Austen",
            "isbn": null,
            "publisher": "Penguin",
            "publish_date": null,
            "description": null,
            "cover_path": null,
            "series": null,
            "subjects": [],
            "files": [{"id": 3, "path": "/books/emma.epub", "format": "epub"}]
        }"#;
        let detail: BookDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.publisher.as_deref(), Some("Penguin"));
        assert_eq!(detail.files.len(), 1);
        assert_eq!(detail.files[0].id, FileId::new(3));
    }

    #[test]
    fn test_stats_extra_counts_are_optional() {
        let stats: CatalogStats = serde_json::from_str(r#"{"total_books": 12}"#).unwrap();
        assert_eq!(stats.total_books, 12);
        assert_eq!(stats.total_authors, None);
    }
}
