//! Ping Handler - 健康检查

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::application::SectionStatus;
use crate::infrastructure::http::state::AppState;

/// Ping 响应
#[derive(Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// 书目分区的加载状态
    pub books: SectionStatus,
}

/// Ping endpoint
pub async fn ping(State(state): State<Arc<AppState>>) -> Json<PingResponse> {
    let books = state.store.read().await.books_status().clone();

    Json(PingResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        books,
    })
}
