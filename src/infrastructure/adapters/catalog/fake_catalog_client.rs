//! Fake Catalog Client - 用于测试的目录客户端
//!
//! 内存中的固定数据，可按端点注入失败

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};

use crate::application::ports::{BooksResponse, CatalogApiPort, CatalogError};
use crate::domain::catalog::{
    AuthorSummary, Book, BookDetail, BookFile, BookId, CatalogStats, CoverRef, FileId, Gender,
    SeriesSummary, SubjectSummary,
};

/// 可注入失败的端点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FakeEndpoint {
    Books,
    Book,
    Authors,
    Series,
    Subjects,
    AuthorsByGender(Gender),
}

/// Fake Catalog Client
#[derive(Debug, Clone, Default)]
pub struct FakeCatalogClient {
    books: Vec<Book>,
    details: HashMap<BookId, BookDetail>,
    authors: Vec<AuthorSummary>,
    series: Vec<SeriesSummary>,
    subjects: Vec<SubjectSummary>,
    male: Vec<String>,
    female: Vec<String>,
    failing: HashSet<FakeEndpoint>,
}

fn book(id: i64, title: &str, authors: &str, author_sort: &str) -> Book {
    Book {
        id: BookId::new(id),
        title: title.to_string(),
        authors: authors.to_string(),
        author_sort: author_sort.to_string(),
        series: None,
        subjects: Vec::new(),
        has_cover: false,
    }
}

fn cover(book: &Book) -> CoverRef {
    CoverRef {
        book_id: book.id,
        title: book.title.clone(),
        has_cover: book.has_cover,
    }
}

impl FakeCatalogClient {
    /// 三本书的样例目录
    ///
    /// - 1 "Charlie"：Ada Writer（F），主题 Mystery，有封面
    /// - 2 "Alpha"：Bob Author（M），系列 "Foo"
    /// - 3 "Bravo"：Cy Penman（M），有封面
    pub fn sample() -> Self {
        let charlie = Book {
            subjects: vec!["Mystery".to_string()],
            has_cover: true,
            ..book(1, "Charlie", "Ada Writer", "Writer, Ada")
        };
        let alpha = Book {
            series: Some("Foo".to_string()),
            subjects: vec!["Fantasy".to_string(), "Adventure".to_string()],
            ..book(2, "Alpha", "Bob Author", "Author, Bob")
        };
        let bravo = Book {
            has_cover: true,
            ..book(3, "Bravo", "Cy Penman", "Penman, Cy")
        };

        let authors = vec![
            AuthorSummary {
                name: "Ada Writer".to_string(),
                book_count: 1,
                covers: vec![cover(&charlie)],
            },
            AuthorSummary {
                name: "Bob Author".to_string(),
                book_count: 1,
                covers: vec![cover(&alpha)],
            },
            AuthorSummary {
                name: "Cy Penman".to_string(),
                book_count: 1,
                covers: vec![cover(&bravo)],
            },
        ];
        let series = vec![SeriesSummary {
            name: "Foo".to_string(),
            book_count: 1,
            covers: vec![cover(&alpha)],
        }];
        let subjects = ["Adventure", "Fantasy", "Mystery"]
            .into_iter()
            .map(|name| SubjectSummary {
                name: name.to_string(),
                book_count: 1,
            })
            .collect();

        let details = [&charlie, &alpha, &bravo]
            .into_iter()
            .map(|b| {
                let detail = BookDetail {
                    id: b.id,
                    title: b.title.clone(),
                    authors: b.authors.clone(),
                    series: b.series.clone(),
                    publisher: None,
                    publish_date: None,
                    isbn: None,
                    description: None,
                    cover_path: b.has_cover.then(|| format!("covers/{}.jpg", b.id)),
                    subjects: b.subjects.clone(),
                    files: Vec::new(),
                };
                (b.id, detail)
            })
            .collect::<HashMap<_, _>>();

        let mut client = Self {
            books: vec![charlie, alpha, bravo],
            details,
            authors,
            series,
            subjects,
            male: vec!["Bob Author".to_string(), "Cy Penman".to_string()],
            female: vec!["Ada Writer".to_string()],
            failing: HashSet::new(),
        };

        if let Some(detail) = client.details.get_mut(&BookId::new(1)) {
            detail.publisher = Some("Acme Press".to_string());
            detail.publish_date = Some("2001-04-01".to_string());
            detail.files = vec![BookFile {
                id: FileId::new(10),
                format: "epub".to_string(),
            }];
        }

        client
    }

    /// 让某个端点始终失败
    pub fn failing(mut self, endpoint: FakeEndpoint) -> Self {
        self.failing.insert(endpoint);
        self
    }

    fn check(&self, endpoint: FakeEndpoint) -> Result<(), CatalogError> {
        if self.failing.contains(&endpoint) {
            return Err(CatalogError::NetworkError(format!(
                "{:?} unavailable",
                endpoint
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogApiPort for FakeCatalogClient {
    async fn list_books(&self) -> Result<BooksResponse, CatalogError> {
        self.check(FakeEndpoint::Books)?;
        Ok(BooksResponse {
            books: self.books.clone(),
            stats: CatalogStats {
                total_books: self.books.len() as u64,
                total_authors: Some(self.authors.len() as u64),
                total_series: Some(self.series.len() as u64),
                total_subjects: Some(self.subjects.len() as u64),
            },
        })
    }

    async fn get_book(&self, id: BookId) -> Result<BookDetail, CatalogError> {
        self.check(FakeEndpoint::Book)?;
        self.details
            .get(&id)
            .cloned()
            .ok_or_else(|| CatalogError::HttpStatus {
                status: 404,
                url: format!("/api/book/{}", id),
            })
    }

    async fn authors_with_covers(&self) -> Result<Vec<AuthorSummary>, CatalogError> {
        self.check(FakeEndpoint::Authors)?;
        Ok(self.authors.clone())
    }

    async fn series_with_covers(&self) -> Result<Vec<SeriesSummary>, CatalogError> {
        self.check(FakeEndpoint::Series)?;
        Ok(self.series.clone())
    }

    async fn subjects(&self) -> Result<Vec<SubjectSummary>, CatalogError> {
        self.check(FakeEndpoint::Subjects)?;
        Ok(self.subjects.clone())
    }

    async fn authors_by_gender(&self, gender: Gender) -> Result<Vec<String>, CatalogError> {
        self.check(FakeEndpoint::AuthorsByGender(gender))?;
        Ok(match gender {
            Gender::Male => self.male.clone(),
            Gender::Female => self.female.clone(),
        })
    }
}
