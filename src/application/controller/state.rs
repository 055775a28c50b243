//! 视图状态

use crate::domain::catalog::{BookId, Gender};
use crate::domain::search::{FilterMode, SortKey};

/// 列表屏幕的内容
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Authors(Option<Gender>),
    Series,
    Subjects,
}

impl ListKind {
    pub fn title(&self) -> &'static str {
        match self {
            ListKind::Authors(None) => "All Authors",
            ListKind::Authors(Some(Gender::Male)) => "Male Authors",
            ListKind::Authors(Some(Gender::Female)) => "Female Authors",
            ListKind::Series => "All Series",
            ListKind::Subjects => "All Subjects",
        }
    }
}

/// 互斥的两个屏幕
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// 搜索/过滤/网格
    Main,
    /// 作者、系列或主题列表
    List(ListKind),
}

/// 控制器持有的显式状态
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub screen: Screen,
    /// 搜索框内容
    pub search_text: String,
    /// 当前过滤模式（记住的选择）
    pub filter: FilterMode,
    pub sort: SortKey,
    /// 详情弹窗中打开的书
    pub open_book: Option<BookId>,
}

impl ViewState {
    pub fn new(sort: SortKey) -> Self {
        Self {
            screen: Screen::Main,
            search_text: String::new(),
            filter: FilterMode::All,
            sort,
            open_book: None,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(SortKey::TitleAsc)
    }
}
