//! HTTP Routes
//!
//! Endpoints:
//! - /                 GET   当前页面（filter、sort、q 参数依次分派）
//! - /fragments/books  GET   仅书目容器（参数同 /）
//! - /view/all         GET   回到主屏幕，显示全部书目
//! - /view/authors     GET   作者列表（?gender=M|F）
//! - /view/series      GET   系列列表
//! - /view/subjects    GET   主题列表
//! - /select           GET   列表条目点击（?name=）
//! - /book/:id         GET   打开详情
//! - /modal/close      GET   关闭详情
//! - /reload           POST  重新加载目录
//! - /ping             GET   健康检查

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(handlers::index))
        .route("/fragments/books", get(handlers::books_fragment))
        .route("/select", get(handlers::select_item))
        .route("/book/:id", get(handlers::open_book))
        .route("/modal/close", get(handlers::close_book))
        .route("/reload", post(handlers::reload_catalog))
        .route("/ping", get(handlers::ping))
        .nest("/view", view_routes())
}

/// 屏幕切换路由
fn view_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/all", get(handlers::show_all_books))
        .route("/authors", get(handlers::show_authors))
        .route("/series", get(handlers::show_series))
        .route("/subjects", get(handlers::show_subjects))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use tower::util::ServiceExt;

    use crate::application::{CatalogApiPort, CatalogStore, LoadCatalog};
    use crate::domain::catalog::Gender;
    use crate::domain::search::SortKey;
    use crate::infrastructure::adapters::{FakeCatalogClient, FakeEndpoint};
    use crate::infrastructure::memory::InMemorySessionManager;
    use crate::infrastructure::render::{AssetUrls, HtmlRenderer};

    async fn app_with(client: FakeCatalogClient) -> Router {
        let catalog: Arc<dyn CatalogApiPort> = Arc::new(client);
        let state = AppState::new(
            Arc::new(InMemorySessionManager::new()),
            catalog,
            CatalogStore::new().shared(),
            Arc::new(HtmlRenderer::new(AssetUrls::new(""), 4)),
            SortKey::TitleAsc,
        );
        state.load_catalog_handler.handle(LoadCatalog).await;
        create_routes().with_state(Arc::new(state))
    }

    async fn app() -> Router {
        app_with(FakeCatalogClient::sample()).await
    }

    fn get_request(uri: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn cookie_of(response: &Response) -> String {
        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap();
        set_cookie.split(';').next().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_ping() {
        let response = app().await.oneshot(get_request("/ping", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains(r#""status":"ok""#));
    }

    #[tokio::test]
    async fn test_first_visit_renders_all_books_and_sets_cookie() {
        let response = app().await.oneshot(get_request("/", None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(cookie_of(&response).starts_with("shelfview_session="));
        let html = body_text(response).await;
        assert!(html.contains("Alpha") && html.contains("Bravo") && html.contains("Charlie"));
        assert!(html.contains("📖 3 Books"));
    }

    #[tokio::test]
    async fn test_series_and_standalone_filters() {
        let app = app().await;

        let html = body_text(
            app.clone()
                .oneshot(get_request("/fragments/books?filter=series", None))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(html.matches("book-card\"").count(), 1);
        assert!(html.contains("Alpha"));

        let html = body_text(
            app.oneshot(get_request("/fragments/books?filter=standalone", None))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(html.matches("book-card\"").count(), 2);
        assert!(!html.contains("Alpha"));
    }

    #[tokio::test]
    async fn test_session_keeps_state_between_requests() {
        let app = app().await;

        let first = app
            .clone()
            .oneshot(get_request("/?sort=title-desc", None))
            .await
            .unwrap();
        let cookie = cookie_of(&first);

        let response = app
            .clone()
            .oneshot(get_request("/view/series", Some(&cookie)))
            .await
            .unwrap();
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        let html = body_text(response).await;
        assert!(html.contains("All Series"));
        assert!(html.contains("/select?name=Foo"));

        let html = body_text(
            app.oneshot(get_request("/select?name=Foo", Some(&cookie)))
                .await
                .unwrap(),
        )
        .await;
        assert!(html.contains(r#"value="Foo""#));
        assert!(html.contains(r#"<option value="title-desc" selected>"#));
        assert!(html.contains("Alpha"));
        assert!(!html.contains("Charlie"));
    }

    #[tokio::test]
    async fn test_open_and_close_book() {
        let app = app().await;

        let first = app.clone().oneshot(get_request("/book/1", None)).await.unwrap();
        let cookie = cookie_of(&first);
        let html = body_text(first).await;
        assert!(html.contains("bookModal"));
        assert!(html.contains("Acme Press"));

        let html = body_text(
            app.oneshot(get_request("/modal/close", Some(&cookie)))
                .await
                .unwrap(),
        )
        .await;
        assert!(!html.contains("bookModal"));
    }

    #[tokio::test]
    async fn test_invalid_gender_is_bad_request() {
        let response = app()
            .await
            .oneshot(get_request("/view/authors?gender=X", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_female_authors_list() {
        let html = body_text(
            app()
                .await
                .oneshot(get_request("/view/authors?gender=F", None))
                .await
                .unwrap(),
        )
        .await;
        assert!(html.contains("Female Authors"));
        assert!(html.contains("/select?name=Ada%20Writer"));
        assert!(!html.contains("/select?name=Bob%20Author"));
    }

    #[tokio::test]
    async fn test_reload_reports_sections() {
        let app = app_with(
            FakeCatalogClient::sample().failing(FakeEndpoint::AuthorsByGender(Gender::Male)),
        )
        .await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/reload")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(json["errno"], 0);
        assert_eq!(json["data"]["books"]["status"], "loaded");
        assert_eq!(json["data"]["male_roster"]["status"], "failed");
        assert_eq!(json["data"]["female_roster"]["status"], "loaded");
    }
}
