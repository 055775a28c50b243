//! View Renderer Port - 视图渲染抽象
//!
//! 把类型化记录转换为结构化标记（maud `Markup`），由控制器挂载到页面。

use maud::Markup;

use crate::application::controller::{Page, ViewState};
use crate::domain::catalog::{
    AuthorSummary, Book, BookDetail, CatalogStats, SeriesSummary, SubjectSummary,
};

/// 固定占位信息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    NoResults,
    LoadingDetail,
    BooksError,
    DetailError,
    AuthorsError,
    SeriesError,
    SubjectsError,
    RostersUnavailable,
}

impl Placeholder {
    pub fn message(&self) -> &'static str {
        match self {
            Placeholder::NoResults => "No books found",
            Placeholder::LoadingDetail => "Loading book details...",
            Placeholder::BooksError => "Error loading books",
            Placeholder::DetailError => "Error loading book details",
            Placeholder::AuthorsError => "Error loading authors",
            Placeholder::SeriesError => "Error loading series",
            Placeholder::SubjectsError => "Error loading subjects",
            Placeholder::RostersUnavailable => "Author genders unavailable",
        }
    }
}

/// View Renderer Port
pub trait ViewRenderer: Send + Sync {
    /// 书目网格；空输入渲染 "no results" 占位而不是空网格
    fn book_grid(&self, books: &[Book]) -> Markup;

    /// 详情视图；缺失的可选字段整行省略
    fn book_detail(&self, book: &BookDetail) -> Markup;

    fn author_list(&self, authors: &[AuthorSummary]) -> Markup;

    fn series_list(&self, series: &[SeriesSummary]) -> Markup;

    fn subject_list(&self, subjects: &[SubjectSummary]) -> Markup;

    fn stats_badge(&self, stats: &CatalogStats) -> Markup;

    fn placeholder(&self, placeholder: Placeholder) -> Markup;

    /// 完整页面：静态布局 + 各挂载点内容
    fn document(&self, state: &ViewState, page: &Page) -> Markup;
}
