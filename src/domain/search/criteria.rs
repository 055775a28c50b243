//! 过滤模式与排序键

use serde::{Deserialize, Serialize};

/// 过滤模式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    All,
    Series,
    Standalone,
    Male,
    Female,
}

impl FilterMode {
    pub const ALL: [FilterMode; 5] = [
        FilterMode::All,
        FilterMode::Series,
        FilterMode::Standalone,
        FilterMode::Male,
        FilterMode::Female,
    ];

    /// 宽松解析：未知名称回退为 `All`
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "series" => FilterMode::Series,
            "standalone" => FilterMode::Standalone,
            "male" => FilterMode::Male,
            "female" => FilterMode::Female,
            _ => FilterMode::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Series => "series",
            FilterMode::Standalone => "standalone",
            FilterMode::Male => "male",
            FilterMode::Female => "female",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Series => "Series",
            FilterMode::Standalone => "Standalone",
            FilterMode::Male => "Male Authors",
            FilterMode::Female => "Female Authors",
        }
    }
}

/// 排序键
///
/// 无法识别的键保留原文，排序时保持输入顺序。
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    #[default]
    TitleAsc,
    TitleDesc,
    AuthorAsc,
    AuthorDesc,
    /// 反转当前顺序（不按任何日期字段）
    Recent,
    Unknown(String),
}

impl SortKey {
    pub const KNOWN: [SortKey; 5] = [
        SortKey::TitleAsc,
        SortKey::TitleDesc,
        SortKey::AuthorAsc,
        SortKey::AuthorDesc,
        SortKey::Recent,
    ];

    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "title-asc" => SortKey::TitleAsc,
            "title-desc" => SortKey::TitleDesc,
            "author-asc" => SortKey::AuthorAsc,
            "author-desc" => SortKey::AuthorDesc,
            "recent" => SortKey::Recent,
            other => SortKey::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SortKey::TitleAsc => "title-asc",
            SortKey::TitleDesc => "title-desc",
            SortKey::AuthorAsc => "author-asc",
            SortKey::AuthorDesc => "author-desc",
            SortKey::Recent => "recent",
            SortKey::Unknown(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            SortKey::TitleAsc => "Title (A-Z)",
            SortKey::TitleDesc => "Title (Z-A)",
            SortKey::AuthorAsc => "Author (A-Z)",
            SortKey::AuthorDesc => "Author (Z-A)",
            SortKey::Recent => "Recently Added",
            SortKey::Unknown(raw) => raw,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, SortKey::Unknown(_))
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
