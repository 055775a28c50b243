//! Domain Layer - 领域层
//!
//! 包含:
//! - Catalog Context: 书目、作者、系列、主题与性别名单
//! - Search: 过滤/排序引擎

pub mod catalog;
pub mod search;
