//! 控制器依赖的查询处理器与渲染器

use std::sync::Arc;

use crate::application::ports::{CatalogApiPort, ViewRenderer};
use crate::application::queries::handlers::{
    GetBookDetailHandler, ListAuthorsHandler, ListSeriesHandler, ListSubjectsHandler,
    SearchBooksHandler,
};
use crate::application::store::SharedCatalogStore;

/// 所有会话共享的服务
pub struct CatalogServices {
    pub store: SharedCatalogStore,
    pub renderer: Arc<dyn ViewRenderer>,

    // ========== Query Handlers ==========
    pub search_books: SearchBooksHandler,
    pub get_book_detail: GetBookDetailHandler,
    pub list_authors: ListAuthorsHandler,
    pub list_series: ListSeriesHandler,
    pub list_subjects: ListSubjectsHandler,
}

impl CatalogServices {
    pub fn new(
        catalog: Arc<dyn CatalogApiPort>,
        store: SharedCatalogStore,
        renderer: Arc<dyn ViewRenderer>,
    ) -> Self {
        Self {
            store: store.clone(),
            renderer,
            search_books: SearchBooksHandler::new(store.clone()),
            get_book_detail: GetBookDetailHandler::new(catalog.clone()),
            list_authors: ListAuthorsHandler::new(catalog.clone(), store),
            list_series: ListSeriesHandler::new(catalog.clone()),
            list_subjects: ListSubjectsHandler::new(catalog),
        }
    }
}
