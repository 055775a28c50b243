//! 书目排序

use crate::domain::catalog::Book;

use super::collation::locale_compare;
use super::SortKey;

/// 按排序键排序（稳定排序）
///
/// `Recent` 只是反转当前顺序；未知键保持原样。
pub fn sort_books<'a>(mut books: Vec<&'a Book>, key: &SortKey) -> Vec<&'a Book> {
    match key {
        SortKey::TitleAsc => books.sort_by(|a, b| locale_compare(&a.title, &b.title)),
        SortKey::TitleDesc => books.sort_by(|a, b| locale_compare(&b.title, &a.title)),
        SortKey::AuthorAsc => books.sort_by(|a, b| locale_compare(&a.author_sort, &b.author_sort)),
        SortKey::AuthorDesc => books.sort_by(|a, b| locale_compare(&b.author_sort, &a.author_sort)),
        SortKey::Recent => books.reverse(),
        SortKey::Unknown(raw) => {
            tracing::debug!(sort = %raw, "Unknown sort key, keeping order");
        }
    }
    books
}
