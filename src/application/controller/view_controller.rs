//! View Controller - 导航/交互状态机
//!
//! 接收 ViewEvent，调用过滤/排序与渲染，把结果挂载到 Page。
//! 两个互斥屏幕：Main（搜索/网格）与 List（作者/系列/主题）。

use maud::{html, Markup};

use super::{CatalogServices, ListKind, MountPoint, Page, Screen, ViewEvent, ViewState};
use crate::application::error::ApplicationError;
use crate::application::ports::{Placeholder, ViewRenderer};
use crate::application::queries::{
    GetBookDetail, ListAuthors, ListSeries, ListSubjects, SearchBooks,
};
use crate::domain::catalog::{BookDetail, BookId, Gender};
use crate::domain::search::{FilterMode, SortKey};

/// 单个浏览会话的控制器
#[derive(Debug, Clone)]
pub struct ViewController {
    state: ViewState,
    page: Page,
}

impl ViewController {
    pub fn new(default_sort: SortKey) -> Self {
        Self {
            state: ViewState::new(default_sort),
            page: Page::new(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// 渲染完整页面
    pub fn render_document(&self, renderer: &dyn ViewRenderer) -> Markup {
        renderer.document(&self.state, &self.page)
    }

    /// 处理一个事件；每个事件整体替换相关挂载点内容
    pub async fn dispatch(&mut self, event: ViewEvent, services: &CatalogServices) {
        tracing::debug!(event = ?event, screen = ?self.state.screen, "Dispatching view event");

        match event {
            ViewEvent::Refresh => {
                let filter = self.state.filter;
                self.render_books(services, filter).await;
            }
            ViewEvent::SearchInput(text) => {
                self.state.search_text = text;
                let filter = self.state.filter;
                self.render_books(services, filter).await;
            }
            ViewEvent::SortChanged(sort) => {
                self.state.sort = sort;
                let filter = self.state.filter;
                self.render_books(services, filter).await;
            }
            ViewEvent::FilterChanged(filter) => {
                self.state.filter = filter;
                self.render_books(services, filter).await;
            }
            ViewEvent::ShowAllBooks => {
                // 记住的过滤模式不变，但这次按 All 渲染
                self.show_main();
                self.render_books(services, FilterMode::All).await;
            }
            ViewEvent::ShowAuthors { gender } => self.show_authors(services, gender).await,
            ViewEvent::ShowSeries => self.show_series(services).await,
            ViewEvent::ShowSubjects => self.show_subjects(services).await,
            ViewEvent::SelectListItem(name) => {
                self.show_main();
                self.state.search_text = name;
                let filter = self.state.filter;
                self.render_books(services, filter).await;
            }
            ViewEvent::OpenBook(book_id) => {
                self.begin_open_book(book_id, services.renderer.as_ref());
                let result = services
                    .get_book_detail
                    .handle(GetBookDetail { book_id })
                    .await;
                self.finish_open_book(book_id, result, services.renderer.as_ref());
            }
            ViewEvent::CloseBook => {
                self.state.open_book = None;
                self.page.clear(MountPoint::ModalBody);
            }
        }

        self.render_stats(services).await;
    }

    fn show_main(&mut self) {
        self.state.screen = Screen::Main;
        self.state.search_text.clear();
    }

    fn show_list(&mut self, kind: ListKind, content: Markup) {
        self.state.screen = Screen::List(kind);
        self.page
            .mount(MountPoint::ListTitle, html! { (kind.title()) });
        self.page.mount(MountPoint::ListContainer, content);
    }

    async fn render_books(&mut self, services: &CatalogServices, filter: FilterMode) {
        let renderer = services.renderer.as_ref();
        let query = SearchBooks {
            query: self.state.search_text.clone(),
            filter,
            sort: self.state.sort.clone(),
        };

        match services.search_books.handle(query).await {
            Ok(result) => {
                self.page
                    .mount(MountPoint::BooksContainer, renderer.book_grid(&result.books));
                match result.roster_missing {
                    Some(_) => self.page.mount(
                        MountPoint::Notice,
                        renderer.placeholder(Placeholder::RostersUnavailable),
                    ),
                    None => self.page.clear(MountPoint::Notice),
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Cannot render books");
                self.page.mount(
                    MountPoint::BooksContainer,
                    renderer.placeholder(Placeholder::BooksError),
                );
                self.page.clear(MountPoint::Notice);
            }
        }
    }

    async fn show_authors(&mut self, services: &CatalogServices, gender: Option<Gender>) {
        let renderer = services.renderer.as_ref();
        let content = match services.list_authors.handle(ListAuthors { gender }).await {
            Ok(authors) => renderer.author_list(&authors),
            Err(ApplicationError::RosterUnavailable(gender)) => {
                tracing::warn!(gender = %gender, "Author roster unavailable");
                renderer.placeholder(Placeholder::RostersUnavailable)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Error loading authors");
                renderer.placeholder(Placeholder::AuthorsError)
            }
        };
        self.show_list(ListKind::Authors(gender), content);
    }

    async fn show_series(&mut self, services: &CatalogServices) {
        let renderer = services.renderer.as_ref();
        let content = match services.list_series.handle(ListSeries).await {
            Ok(series) => renderer.series_list(&series),
            Err(e) => {
                tracing::warn!(error = %e, "Error loading series");
                renderer.placeholder(Placeholder::SeriesError)
            }
        };
        self.show_list(ListKind::Series, content);
    }

    async fn show_subjects(&mut self, services: &CatalogServices) {
        let renderer = services.renderer.as_ref();
        let content = match services.list_subjects.handle(ListSubjects).await {
            Ok(subjects) => renderer.subject_list(&subjects),
            Err(e) => {
                tracing::warn!(error = %e, "Error loading subjects");
                renderer.placeholder(Placeholder::SubjectsError)
            }
        };
        self.show_list(ListKind::Subjects, content);
    }

    fn begin_open_book(&mut self, book_id: BookId, renderer: &dyn ViewRenderer) {
        self.state.open_book = Some(book_id);
        self.page.mount(
            MountPoint::ModalBody,
            renderer.placeholder(Placeholder::LoadingDetail),
        );
    }

    fn finish_open_book(
        &mut self,
        book_id: BookId,
        result: Result<BookDetail, ApplicationError>,
        renderer: &dyn ViewRenderer,
    ) {
        let body = match result {
            Ok(detail) => renderer.book_detail(&detail),
            Err(e) => {
                tracing::warn!(book_id = %book_id, error = %e, "Error loading book details");
                renderer.placeholder(Placeholder::DetailError)
            }
        };
        self.page.mount(MountPoint::ModalBody, body);
    }

    async fn render_stats(&mut self, services: &CatalogServices) {
        let store = services.store.read().await;
        match store.stats() {
            Some(stats) => self
                .page
                .mount(MountPoint::TotalBooksBadge, services.renderer.stats_badge(stats)),
            None => self.page.clear(MountPoint::TotalBooksBadge),
        }
    }
}
