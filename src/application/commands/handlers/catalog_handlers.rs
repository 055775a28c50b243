//! Catalog Command Handlers

use chrono::Utc;
use std::sync::Arc;

use crate::application::commands::LoadCatalog;
use crate::application::ports::CatalogApiPort;
use crate::application::store::{CatalogStore, LoadReport, SharedCatalogStore};
use crate::domain::catalog::Gender;

// ============================================================================
// LoadCatalog
// ============================================================================

/// LoadCatalog Handler
///
/// 三个请求并发发出，各自记录结果；完成后整体替换共享的 CatalogStore。
pub struct LoadCatalogHandler {
    catalog: Arc<dyn CatalogApiPort>,
    store: SharedCatalogStore,
}

impl LoadCatalogHandler {
    pub fn new(catalog: Arc<dyn CatalogApiPort>, store: SharedCatalogStore) -> Self {
        Self { catalog, store }
    }

    pub async fn handle(&self, _command: LoadCatalog) -> LoadReport {
        let (books, male, female) = tokio::join!(
            self.catalog.list_books(),
            self.catalog.authors_by_gender(Gender::Male),
            self.catalog.authors_by_gender(Gender::Female),
        );

        let mut fresh = CatalogStore::new();

        match books {
            Ok(response) => {
                tracing::info!(
                    books = response.books.len(),
                    total_books = response.stats.total_books,
                    "Books loaded"
                );
                fresh.set_books(response);
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load books");
                fresh.fail_books(e.to_string());
            }
        }

        for (gender, result) in [(Gender::Male, male), (Gender::Female, female)] {
            match result {
                Ok(names) => {
                    tracing::info!(gender = %gender, authors = names.len(), "Author roster loaded");
                    fresh.set_roster(gender, names);
                }
                Err(e) => {
                    tracing::warn!(gender = %gender, error = %e, "Failed to load author roster");
                    fresh.fail_roster(gender, e.to_string());
                }
            }
        }

        fresh.mark_loaded(Utc::now());
        let report = fresh.report();

        *self.store.write().await = fresh;

        report
    }
}
