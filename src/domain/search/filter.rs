//! 书目过滤

use crate::domain::catalog::{Book, Gender, GenderRosters};

use super::FilterMode;

/// 过滤书目
///
/// 先按过滤模式筛选，再按查询词做大小写不敏感的子串匹配
/// （标题、作者、任一主题、系列）。保持原有相对顺序，不修改输入。
pub fn filter_books<'a>(
    books: &'a [Book],
    query: &str,
    mode: FilterMode,
    rosters: &GenderRosters,
) -> Vec<&'a Book> {
    let term = query.to_lowercase();

    books
        .iter()
        .filter(|book| matches_mode(book, mode, rosters))
        .filter(|book| term.is_empty() || matches_query(book, &term))
        .collect()
}

fn matches_mode(book: &Book, mode: FilterMode, rosters: &GenderRosters) -> bool {
    match mode {
        FilterMode::All => true,
        FilterMode::Series => book.in_series(),
        FilterMode::Standalone => !book.in_series(),
        FilterMode::Male => rosters.get(Gender::Male).matches_authors(&book.authors),
        FilterMode::Female => rosters.get(Gender::Female).matches_authors(&book.authors),
    }
}

/// `term` 必须已转为小写
fn matches_query(book: &Book, term: &str) -> bool {
    book.title.to_lowercase().contains(term)
        || book.authors.to_lowercase().contains(term)
        || book
            .subjects
            .iter()
            .any(|subject| subject.to_lowercase().contains(term))
        || book
            .series
            .as_ref()
            .is_some_and(|series| series.to_lowercase().contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{BookId, GenderRoster};

    fn book(id: i64, title: &str, authors: &str, series: Option<&str>, subjects: &[&str]) -> Book {
        Book {
            id: BookId::new(id),
            title: title.to_string(),
            authors: authors.to_string(),
            author_sort: authors.to_string(),
            series: series.map(str::to_string),
            subjects: subjects.iter().map(|s| s.to_string()).collect(),
            has_cover: false,
        }
    }

    fn fixture() -> Vec<Book> {
        vec![
            book(1, "Harry Potter and the Philosopher's Stone", "J. K. Rowling", Some("Harry Potter #1"), &["Fantasy"]),
            book(2, "Emma", "Jane Austen", None, &["Romance", "Classics"]),
            book(3, "Good Omens", "Terry Pratchett, Neil Gaiman", None, &["Humor"]),
        ]
    }

    fn ids(books: &[&Book]) -> Vec<i64> {
        books.iter().map(|b| b.id.value()).collect()
    }

    #[test]
    fn test_all_with_empty_query_is_identity() {
        let books = fixture();
        let result = filter_books(&books, "", FilterMode::All, &GenderRosters::default());
        assert_eq!(ids(&result), vec![1, 2, 3]);
    }

    #[test]
    fn test_series_and_standalone_are_complements() {
        let books = fixture();
        let rosters = GenderRosters::default();
        let series = filter_books(&books, "", FilterMode::Series, &rosters);
        let standalone = filter_books(&books, "", FilterMode::Standalone, &rosters);

        assert!(series.iter().all(|b| b.series.is_some()));
        assert!(standalone.iter().all(|b| b.series.is_none()));
        assert_eq!(series.len() + standalone.len(), books.len());
        assert_eq!(ids(&standalone), vec![2, 3]);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let books = fixture();
        let result = filter_books(&books, "HARRY", FilterMode::All, &GenderRosters::default());
        assert_eq!(ids(&result), vec![1]);
    }

    #[test]
    fn test_query_matches_subjects_and_series() {
        let books = fixture();
        let rosters = GenderRosters::default();
        assert_eq!(ids(&filter_books(&books, "classics", FilterMode::All, &rosters)), vec![2]);
        assert_eq!(ids(&filter_books(&books, "potter #1", FilterMode::All, &rosters)), vec![1]);
        assert!(filter_books(&books, "nothing like this", FilterMode::All, &rosters).is_empty());
    }

    #[test]
    fn test_mode_applies_before_query() {
        let books = fixture();
        let result = filter_books(&books, "emma", FilterMode::Series, &GenderRosters::default());
        assert!(result.is_empty());
    }

    #[test]
    fn test_gender_modes_use_roster_substrings() {
        let books = fixture();
        let rosters = GenderRosters::new(
            GenderRoster::new(["Neil Gaiman"]),
            GenderRoster::new(["Jane Austen", "J. K. Rowling"]),
        );
        assert_eq!(ids(&filter_books(&books, "", FilterMode::Male, &rosters)), vec![3]);
        assert_eq!(ids(&filter_books(&books, "", FilterMode::Female, &rosters)), vec![1, 2]);
    }

    #[test]
    fn test_gender_mode_with_empty_roster_yields_nothing() {
        let books = fixture();
        let result = filter_books(&books, "", FilterMode::Female, &GenderRosters::default());
        assert!(result.is_empty());
    }
}
