//! HTML Renderer - ViewRenderer 的 maud 实现
//!
//! 所有插值文本都由 maud 转义。

mod assets;
mod books;
mod layout;
mod lists;

use maud::{html, Markup};

use crate::application::controller::{Page, ViewState};
use crate::application::ports::{Placeholder, ViewRenderer};
use crate::domain::catalog::{
    AuthorSummary, Book, BookDetail, CatalogStats, SeriesSummary, SubjectSummary,
};

pub use assets::AssetUrls;

/// 服务端渲染的 HTML 视图
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    assets: AssetUrls,
    /// 作者/系列条目最多显示的封面数
    list_cover_limit: usize,
}

impl HtmlRenderer {
    pub fn new(assets: AssetUrls, list_cover_limit: usize) -> Self {
        Self {
            assets,
            list_cover_limit,
        }
    }
}

/// 列表条目点击后的跳转地址
pub(crate) fn select_url(name: &str) -> String {
    format!("/select?name={}", urlencoding::encode(name))
}

impl ViewRenderer for HtmlRenderer {
    fn book_grid(&self, books: &[Book]) -> Markup {
        if books.is_empty() {
            return self.placeholder(Placeholder::NoResults);
        }
        books::grid(&self.assets, books)
    }

    fn book_detail(&self, book: &BookDetail) -> Markup {
        books::detail(&self.assets, book)
    }

    fn author_list(&self, authors: &[AuthorSummary]) -> Markup {
        html! {
            @for author in authors {
                (lists::cover_item(&self.assets, &author.name, author.book_count, &author.covers, self.list_cover_limit))
            }
        }
    }

    fn series_list(&self, series: &[SeriesSummary]) -> Markup {
        html! {
            @for s in series {
                (lists::cover_item(&self.assets, &s.name, s.book_count, &s.covers, self.list_cover_limit))
            }
        }
    }

    fn subject_list(&self, subjects: &[SubjectSummary]) -> Markup {
        html! {
            @for subject in subjects {
                (lists::subject_item(subject))
            }
        }
    }

    fn stats_badge(&self, stats: &CatalogStats) -> Markup {
        html! { span.stats-badge { "📖 " (stats.total_books) " Books" } }
    }

    fn placeholder(&self, placeholder: Placeholder) -> Markup {
        match placeholder {
            Placeholder::LoadingDetail => html! { div.loading { (placeholder.message()) } },
            Placeholder::RostersUnavailable => html! { div.notice { (placeholder.message()) } },
            _ => html! { div.no-results { (placeholder.message()) } },
        }
    }

    fn document(&self, state: &ViewState, page: &Page) -> Markup {
        layout::document(state, page)
    }
}
