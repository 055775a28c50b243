//! Catalog Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::CatalogApiPort;
use crate::application::queries::{
    GetBookDetail, ListAuthors, ListSeries, ListSubjects, SearchBooks, SearchBooksResponse,
};
use crate::application::store::{SectionStatus, SharedCatalogStore};
use crate::domain::catalog::{
    AuthorSummary, Book, BookDetail, Gender, SeriesSummary, SubjectSummary,
};
use crate::domain::search::{filter_books, sort_books, FilterMode};

// ============================================================================
// Handlers
// ============================================================================

/// SearchBooks Handler
pub struct SearchBooksHandler {
    store: SharedCatalogStore,
}

impl SearchBooksHandler {
    pub fn new(store: SharedCatalogStore) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: SearchBooks) -> Result<SearchBooksResponse, ApplicationError> {
        let store = self.store.read().await;

        if let SectionStatus::Failed { error } = store.books_status() {
            return Err(ApplicationError::books_unavailable(error.clone()));
        }

        let filtered = filter_books(store.books(), &query.query, query.filter, store.rosters());
        let books: Vec<Book> = sort_books(filtered, &query.sort)
            .into_iter()
            .cloned()
            .collect();

        let roster_missing = match query.filter {
            FilterMode::Male => Some(Gender::Male),
            FilterMode::Female => Some(Gender::Female),
            _ => None,
        }
        .filter(|gender| store.roster_status(*gender).is_failed());

        tracing::debug!(
            query = %query.query,
            filter = query.filter.as_str(),
            sort = %query.sort,
            matched = books.len(),
            "Books searched"
        );

        Ok(SearchBooksResponse {
            books,
            roster_missing,
        })
    }
}

/// GetBookDetail Handler
pub struct GetBookDetailHandler {
    catalog: Arc<dyn CatalogApiPort>,
}

impl GetBookDetailHandler {
    pub fn new(catalog: Arc<dyn CatalogApiPort>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, query: GetBookDetail) -> Result<BookDetail, ApplicationError> {
        Ok(self.catalog.get_book(query.book_id).await?)
    }
}

/// ListAuthors Handler
///
/// 按性别筛选时使用精确名字匹配。
pub struct ListAuthorsHandler {
    catalog: Arc<dyn CatalogApiPort>,
    store: SharedCatalogStore,
}

impl ListAuthorsHandler {
    pub fn new(catalog: Arc<dyn CatalogApiPort>, store: SharedCatalogStore) -> Self {
        Self { catalog, store }
    }

    pub async fn handle(&self, query: ListAuthors) -> Result<Vec<AuthorSummary>, ApplicationError> {
        let authors = self.catalog.authors_with_covers().await?;

        let Some(gender) = query.gender else {
            return Ok(authors);
        };

        let store = self.store.read().await;
        if store.roster_status(gender).is_failed() {
            return Err(ApplicationError::RosterUnavailable(gender));
        }
        let roster = store.rosters().get(gender);

        Ok(authors
            .into_iter()
            .filter(|author| roster.contains(&author.name))
            .collect())
    }
}

/// ListSeries Handler
pub struct ListSeriesHandler {
    catalog: Arc<dyn CatalogApiPort>,
}

impl ListSeriesHandler {
    pub fn new(catalog: Arc<dyn CatalogApiPort>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, _query: ListSeries) -> Result<Vec<SeriesSummary>, ApplicationError> {
        Ok(self.catalog.series_with_covers().await?)
    }
}

/// ListSubjects Handler
pub struct ListSubjectsHandler {
    catalog: Arc<dyn CatalogApiPort>,
}

impl ListSubjectsHandler {
    pub fn new(catalog: Arc<dyn CatalogApiPort>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self, _query: ListSubjects) -> Result<Vec<SubjectSummary>, ApplicationError> {
        Ok(self.catalog.subjects().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::handlers::LoadCatalogHandler;
    use crate::application::commands::LoadCatalog;
    use crate::application::store::CatalogStore;
    use crate::domain::catalog::BookId;
    use crate::domain::search::SortKey;
    use crate::infrastructure::adapters::{FakeCatalogClient, FakeEndpoint};

    async fn loaded(client: FakeCatalogClient) -> (Arc<dyn CatalogApiPort>, SharedCatalogStore) {
        let catalog: Arc<dyn CatalogApiPort> = Arc::new(client);
        let store = CatalogStore::new().shared();
        LoadCatalogHandler::new(catalog.clone(), store.clone())
            .handle(LoadCatalog)
            .await;
        (catalog, store)
    }

    fn search(filter: FilterMode) -> SearchBooks {
        SearchBooks {
            query: String::new(),
            filter,
            sort: SortKey::TitleAsc,
        }
    }

    #[tokio::test]
    async fn test_series_fixture_end_to_end() {
        let (_, store) = loaded(FakeCatalogClient::sample()).await;
        let handler = SearchBooksHandler::new(store);

        let series = handler.handle(search(FilterMode::Series)).await.unwrap();
        assert_eq!(series.books.len(), 1);
        assert_eq!(series.books[0].series.as_deref(), Some("Foo"));

        let standalone = handler.handle(search(FilterMode::Standalone)).await.unwrap();
        assert_eq!(standalone.books.len(), 2);
        assert!(standalone.books.iter().all(|b| b.series.is_none()));
    }

    #[tokio::test]
    async fn test_search_sorts_results() {
        let (_, store) = loaded(FakeCatalogClient::sample()).await;
        let handler = SearchBooksHandler::new(store);

        let result: crate::application::SearchBooksResponse =
            handler.handle(search(FilterMode::All)).await.unwrap();
        let titles: Vec<&str> = result.books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Alpha", "Bravo", "Charlie"]);
        assert_eq!(result.roster_missing, None);
    }

    #[tokio::test]
    async fn test_search_fails_when_books_failed() {
        let (_, store) = loaded(FakeCatalogClient::sample().failing(FakeEndpoint::Books)).await;
        let handler = SearchBooksHandler::new(store);

        let result = handler.handle(search(FilterMode::All)).await;
        assert!(matches!(result, Err(ApplicationError::BooksUnavailable(_))));
    }

    #[tokio::test]
    async fn test_search_flags_missing_roster() {
        let client = FakeCatalogClient::sample().failing(FakeEndpoint::AuthorsByGender(Gender::Female));
        let (_, store) = loaded(client).await;
        let handler = SearchBooksHandler::new(store);

        let result = handler.handle(search(FilterMode::Female)).await.unwrap();
        assert!(result.books.is_empty());
        assert_eq!(result.roster_missing, Some(Gender::Female));

        let result = handler.handle(search(FilterMode::Male)).await.unwrap();
        assert_eq!(result.roster_missing, None);
    }

    #[tokio::test]
    async fn test_list_authors_by_gender_uses_exact_names() {
        let (catalog, store) = loaded(FakeCatalogClient::sample()).await;
        let handler = ListAuthorsHandler::new(catalog, store);

        let all = handler.handle(ListAuthors { gender: None }).await.unwrap();
        let female = handler
            .handle(ListAuthors {
                gender: Some(Gender::Female),
            })
            .await
            .unwrap();

        assert_eq!(all.len(), 3);
        let names: Vec<&str> = female.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Ada Writer"]);
    }

    #[tokio::test]
    async fn test_list_authors_by_missing_roster() {
        let client = FakeCatalogClient::sample().failing(FakeEndpoint::AuthorsByGender(Gender::Male));
        let (catalog, store) = loaded(client).await;
        let handler = ListAuthorsHandler::new(catalog, store);

        let result = handler
            .handle(ListAuthors {
                gender: Some(Gender::Male),
            })
            .await;
        assert!(matches!(result, Err(ApplicationError::RosterUnavailable(Gender::Male))));
    }

    #[tokio::test]
    async fn test_get_book_detail_propagates_catalog_error() {
        let (catalog, _) = loaded(FakeCatalogClient::sample()).await;
        let handler = GetBookDetailHandler::new(catalog);

        let detail = handler
            .handle(GetBookDetail {
                book_id: BookId::new(1),
            })
            .await
            .unwrap();
        assert_eq!(detail.title, "Charlie");

        let missing = handler
            .handle(GetBookDetail {
                book_id: BookId::new(999),
            })
            .await;
        assert!(matches!(missing, Err(ApplicationError::Catalog(_))));
    }
}
