//! Catalog Context - 书目限界上下文
//!
//! 职责:
//! - 书目、作者、系列、主题记录
//! - 作者性别名单

mod entities;
mod roster;
mod value_objects;

pub use entities::{
    AuthorSummary, Book, BookDetail, BookFile, CatalogStats, CoverRef, SeriesSummary,
    SubjectSummary,
};
pub use roster::{GenderRoster, GenderRosters};
pub use value_objects::{BookId, FileId, Gender};
