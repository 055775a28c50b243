//! Reload Handler - 重新加载目录

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::{LoadCatalog, LoadReport};
use crate::infrastructure::http::dto::ApiResponse;
use crate::infrastructure::http::state::AppState;

/// 整体重新加载目录，返回各分区结果
pub async fn reload_catalog(State(state): State<Arc<AppState>>) -> Json<ApiResponse<LoadReport>> {
    let report = state.load_catalog_handler.handle(LoadCatalog).await;

    tracing::info!(complete = report.is_complete(), "Catalog reloaded");

    Json(ApiResponse::success(report))
}
