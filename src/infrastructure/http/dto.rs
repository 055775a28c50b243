//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::application::ViewEvent;
use crate::domain::search::{FilterMode, SortKey};

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

// ============================================================================
// View DTOs
// ============================================================================

/// 主屏幕的查询参数
#[derive(Debug, Default, Deserialize)]
pub struct BrowseParams {
    pub filter: Option<String>,
    pub sort: Option<String>,
    pub q: Option<String>,
}

impl BrowseParams {
    /// 按 filter、sort、q 的顺序转换为事件
    pub fn into_events(self) -> Vec<ViewEvent> {
        let mut events = Vec::new();
        if let Some(filter) = self.filter {
            events.push(ViewEvent::FilterChanged(FilterMode::parse(&filter)));
        }
        if let Some(sort) = self.sort {
            events.push(ViewEvent::SortChanged(SortKey::parse(&sort)));
        }
        if let Some(q) = self.q {
            events.push(ViewEvent::SearchInput(q));
        }
        events
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AuthorsParams {
    pub gender: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SelectParams {
    pub name: String,
}
