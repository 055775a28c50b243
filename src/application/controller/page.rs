//! 页面挂载点

use maud::Markup;
use std::collections::HashMap;

/// 页面上的命名挂载点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MountPoint {
    TotalBooksBadge,
    Notice,
    BooksContainer,
    ListTitle,
    ListContainer,
    ModalBody,
}

/// 各挂载点当前的内容；每次挂载整体替换旧内容
#[derive(Debug, Clone, Default)]
pub struct Page {
    mounts: HashMap<MountPoint, Markup>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mount(&mut self, point: MountPoint, markup: Markup) {
        self.mounts.insert(point, markup);
    }

    pub fn clear(&mut self, point: MountPoint) {
        self.mounts.remove(&point);
    }

    pub fn get(&self, point: MountPoint) -> Option<&Markup> {
        self.mounts.get(&point)
    }

    /// 挂载点的 HTML 文本，未挂载时为空串
    pub fn html(&self, point: MountPoint) -> &str {
        self.get(point).map(|m| m.0.as_str()).unwrap_or("")
    }
}
