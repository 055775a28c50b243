//! HTTP Catalog Client - 调用外部目录 HTTP 服务
//!
//! 实现 CatalogApiPort trait，所有请求都是 GET + JSON 响应
//!
//! 外部目录 API:
//! GET /api/books                    -> { books: [...], stats: {...} }
//! GET /api/book/{id}                -> BookDetail
//! GET /api/authors-with-covers      -> [AuthorSummary]
//! GET /api/series-with-covers       -> [SeriesSummary]
//! GET /api/subjects                 -> [SubjectSummary]
//! GET /api/authors-by-gender/{M|F}  -> [{ author_name }]

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use crate::application::ports::{BooksResponse, CatalogApiPort, CatalogError};
use crate::domain::catalog::{
    AuthorSummary, BookDetail, BookId, Gender, SeriesSummary, SubjectSummary,
};

/// 性别名单中的一行
#[derive(Debug, Deserialize)]
struct RosterEntry {
    author_name: String,
}

/// HTTP 目录客户端配置
#[derive(Debug, Clone)]
pub struct HttpCatalogClientConfig {
    /// 目录服务基础 URL
    pub base_url: String,
    /// 请求超时时间（秒），0 表示不设超时
    pub timeout_secs: u64,
}

impl Default for HttpCatalogClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5001".to_string(),
            timeout_secs: 0,
        }
    }
}

impl HttpCatalogClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP 目录客户端
pub struct HttpCatalogClient {
    client: Client,
    config: HttpCatalogClientConfig,
}

impl HttpCatalogClient {
    /// 创建新的 HTTP 目录客户端
    pub fn new(config: HttpCatalogClientConfig) -> Result<Self, CatalogError> {
        let mut builder = Client::builder();
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        let client = builder
            .build()
            .map_err(|e| CatalogError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// GET 并解析 JSON
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let url = self.url(path);

        tracing::debug!(url = %url, "Sending catalog request");

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                CatalogError::Timeout
            } else if e.is_connect() {
                CatalogError::NetworkError(format!("Cannot connect to catalog service: {}", e))
            } else {
                CatalogError::NetworkError(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %url, status = status.as_u16(), "Catalog request failed");
            return Err(CatalogError::HttpStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                CatalogError::Timeout
            } else {
                CatalogError::NetworkError(format!("Failed to read body: {}", e))
            }
        })?;

        let value = serde_json::from_slice(&body)
            .map_err(|e| CatalogError::InvalidResponse(format!("{}: {}", url, e)))?;

        tracing::debug!(url = %url, status = status.as_u16(), bytes = body.len(), "Catalog response");

        Ok(value)
    }
}

#[async_trait]
impl CatalogApiPort for HttpCatalogClient {
    async fn list_books(&self) -> Result<BooksResponse, CatalogError> {
        self.get_json("/api/books").await
    }

    async fn get_book(&self, id: BookId) -> Result<BookDetail, CatalogError> {
        self.get_json(&format!("/api/book/{}", id)).await
    }

    async fn authors_with_covers(&self) -> Result<Vec<AuthorSummary>, CatalogError> {
        self.get_json("/api/authors-with-covers").await
    }

    async fn series_with_covers(&self) -> Result<Vec<SeriesSummary>, CatalogError> {
        self.get_json("/api/series-with-covers").await
    }

    async fn subjects(&self) -> Result<Vec<SubjectSummary>, CatalogError> {
        self.get_json("/api/subjects").await
    }

    async fn authors_by_gender(&self, gender: Gender) -> Result<Vec<String>, CatalogError> {
        let entries: Vec<RosterEntry> = self
            .get_json(&format!("/api/authors-by-gender/{}", gender.code()))
            .await?;
        Ok(entries.into_iter().map(|e| e.author_name).collect())
    }

    async fn health_check(&self) -> bool {
        match self
            .client
            .get(self.url("/api/books"))
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Json, Router};
    use serde_json::json;

    /// 在随机端口启动一个假的目录服务
    async fn spawn_catalog(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn client(base_url: String) -> HttpCatalogClient {
        HttpCatalogClient::new(HttpCatalogClientConfig::new(base_url).with_timeout(5)).unwrap()
    }

    #[test]
    fn test_config_default() {
        let config = HttpCatalogClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:5001");
        assert_eq!(config.timeout_secs, 0);
    }

    #[test]
    fn test_url_joins_trailing_slash() {
        let client = client("http://catalog.local/".to_string());
        assert_eq!(client.url("/api/books"), "http://catalog.local/api/books");
    }

    #[tokio::test]
    async fn test_list_books_and_roster() {
        let router = Router::new()
            .route(
                "/api/books",
                get(|| async {
                    Json(json!({
                        "books": [{
                            "id": 1,
                            "title": "Dune",
                            "authors": "Frank Herbert",
                            "author_sort": "Herbert, Frank",
                            "series": "Dune",
                            "subjects": [],
                            "has_cover": true
                        }],
                        "stats": { "total_books": 1 }
                    }))
                }),
            )
            .route(
                "/api/authors-by-gender/:gender",
                get(|| async { Json(json!([{ "author_name": "Frank Herbert" }])) }),
            );
        let client = client(spawn_catalog(router).await);

        let books = client.list_books().await.unwrap();
        assert_eq!(books.books.len(), 1);
        assert_eq!(books.books[0].series.as_deref(), Some("Dune"));
        assert_eq!(books.stats.total_books, 1);

        let names = client.authors_by_gender(Gender::Male).await.unwrap();
        assert_eq!(names, vec!["Frank Herbert".to_string()]);
    }

    #[tokio::test]
    async fn test_http_error_status() {
        let router = Router::new().route(
            "/api/book/:id",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let client = client(spawn_catalog(router).await);

        let result = client.get_book(BookId::new(3)).await;
        assert!(matches!(
            result,
            Err(CatalogError::HttpStatus { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let router = Router::new().route("/api/subjects", get(|| async { "not json" }));
        let client = client(spawn_catalog(router).await);

        let result = client.subjects().await;
        assert!(matches!(result, Err(CatalogError::InvalidResponse(_))));
    }
}
