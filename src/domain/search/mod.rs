//! Search - 过滤/排序引擎
//!
//! 纯函数，无副作用：相同输入得到相同输出。

mod collation;
mod criteria;
mod filter;
mod sort;

pub use collation::{collation_key, locale_compare};
pub use criteria::{FilterMode, SortKey};
pub use filter::filter_books;
pub use sort::sort_books;
