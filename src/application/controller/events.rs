//! 用户交互事件

use crate::domain::catalog::{BookId, Gender};
use crate::domain::search::{FilterMode, SortKey};

/// 控制器接收的事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// 按当前状态重新渲染主屏幕
    Refresh,
    /// 搜索框输入
    SearchInput(String),
    /// 排序选择变化
    SortChanged(SortKey),
    /// 过滤按钮点击
    FilterChanged(FilterMode),
    /// 返回主屏幕并清空搜索
    ShowAllBooks,
    ShowAuthors { gender: Option<Gender> },
    ShowSeries,
    ShowSubjects,
    /// 点击列表项（作者/系列/主题），以其名字作为搜索词返回主屏幕
    SelectListItem(String),
    OpenBook(BookId),
    CloseBook,
}
