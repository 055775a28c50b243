//! Catalog Store - 已加载的目录数据
//!
//! 由加载流程整体构建后替换，其余时间只读。

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;

use crate::application::ports::BooksResponse;
use crate::domain::catalog::{Book, CatalogStats, Gender, GenderRoster, GenderRosters};

/// 多个请求共享的目录数据
pub type SharedCatalogStore = Arc<RwLock<CatalogStore>>;

/// 单个加载分区的状态
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SectionStatus {
    Pending,
    Loaded { count: usize },
    Failed { error: String },
}

impl SectionStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, SectionStatus::Failed { .. })
    }
}

/// 一次加载的分区结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub books: SectionStatus,
    pub male_roster: SectionStatus,
    pub female_roster: SectionStatus,
    pub loaded_at: Option<DateTime<Utc>>,
}

impl LoadReport {
    pub fn is_complete(&self) -> bool {
        [&self.books, &self.male_roster, &self.female_roster]
            .iter()
            .all(|status| matches!(status, SectionStatus::Loaded { .. }))
    }
}

/// 目录数据
#[derive(Debug, Clone)]
pub struct CatalogStore {
    books: Vec<Book>,
    stats: Option<CatalogStats>,
    rosters: GenderRosters,
    books_status: SectionStatus,
    male_status: SectionStatus,
    female_status: SectionStatus,
    loaded_at: Option<DateTime<Utc>>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            books: Vec::new(),
            stats: None,
            rosters: GenderRosters::default(),
            books_status: SectionStatus::Pending,
            male_status: SectionStatus::Pending,
            female_status: SectionStatus::Pending,
            loaded_at: None,
        }
    }

    pub fn shared(self) -> SharedCatalogStore {
        Arc::new(RwLock::new(self))
    }

    pub fn set_books(&mut self, response: BooksResponse) {
        self.books_status = SectionStatus::Loaded {
            count: response.books.len(),
        };
        self.books = response.books;
        self.stats = Some(response.stats);
    }

    pub fn fail_books(&mut self, error: impl Into<String>) {
        self.books.clear();
        self.stats = None;
        self.books_status = SectionStatus::Failed {
            error: error.into(),
        };
    }

    pub fn set_roster(&mut self, gender: Gender, names: Vec<String>) {
        let roster = GenderRoster::new(names);
        *self.status_mut(gender) = SectionStatus::Loaded {
            count: roster.len(),
        };
        self.rosters.set(gender, roster);
    }

    pub fn fail_roster(&mut self, gender: Gender, error: impl Into<String>) {
        self.rosters.set(gender, GenderRoster::default());
        *self.status_mut(gender) = SectionStatus::Failed {
            error: error.into(),
        };
    }

    pub fn mark_loaded(&mut self, at: DateTime<Utc>) {
        self.loaded_at = Some(at);
    }

    fn status_mut(&mut self, gender: Gender) -> &mut SectionStatus {
        match gender {
            Gender::Male => &mut self.male_status,
            Gender::Female => &mut self.female_status,
        }
    }

    // Getters
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn stats(&self) -> Option<&CatalogStats> {
        self.stats.as_ref()
    }

    pub fn rosters(&self) -> &GenderRosters {
        &self.rosters
    }

    pub fn books_status(&self) -> &SectionStatus {
        &self.books_status
    }

    pub fn roster_status(&self, gender: Gender) -> &SectionStatus {
        match gender {
            Gender::Male => &self.male_status,
            Gender::Female => &self.female_status,
        }
    }

    pub fn report(&self) -> LoadReport {
        LoadReport {
            books: self.books_status.clone(),
            male_roster: self.male_status.clone(),
            female_roster: self.female_status.clone(),
            loaded_at: self.loaded_at,
        }
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::BookId;

    fn response(count: usize) -> BooksResponse {
        BooksResponse {
            books: (0..count)
                .map(|i| Book {
                    id: BookId::new(i as i64),
                    title: format!("Book {}", i),
                    authors: "Someone".to_string(),
                    author_sort: "Someone".to_string(),
                    series: None,
                    subjects: Vec::new(),
                    has_cover: false,
                })
                .collect(),
            stats: CatalogStats {
                total_books: count as u64,
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_new_store_is_pending() {
        let store = CatalogStore::new();
        assert_eq!(store.books_status(), &SectionStatus::Pending);
        assert!(store.stats().is_none());
        assert!(!store.report().is_complete());
    }

    #[test]
    fn test_sections_are_independent() {
        let mut store = CatalogStore::new();
        store.set_books(response(3));
        store.fail_roster(Gender::Male, "HTTP 500");
        store.set_roster(Gender::Female, vec!["Jane Austen".to_string()]);

        assert_eq!(store.books().len(), 3);
        assert_eq!(store.stats().map(|s| s.total_books), Some(3));
        assert!(store.roster_status(Gender::Male).is_failed());
        assert_eq!(
            store.roster_status(Gender::Female),
            &SectionStatus::Loaded { count: 1 }
        );
        assert!(store.rosters().get(Gender::Female).contains("Jane Austen"));
        assert!(!store.report().is_complete());
    }

    #[test]
    fn test_failed_books_clear_previous_data() {
        let mut store = CatalogStore::new();
        store.set_books(response(2));
        store.fail_books("timeout");
        assert!(store.books().is_empty());
        assert!(store.stats().is_none());
        assert!(store.books_status().is_failed());
    }

    #[test]
    fn test_report_serializes_with_status_tag() {
        let mut store = CatalogStore::new();
        store.set_books(response(1));
        let json = serde_json::to_value(store.report()).unwrap();
        assert_eq!(json["books"]["status"], "loaded");
        assert_eq!(json["books"]["count"], 1);
        assert_eq!(json["male_roster"]["status"], "pending");
    }
}
