//! 页面布局：静态骨架 + 挂载点

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::application::controller::{ListKind, MountPoint, Page, Screen, ViewState};
use crate::domain::catalog::Gender;
use crate::domain::search::{FilterMode, SortKey};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f5f5f5; color: #222; }
header { display: flex; align-items: center; gap: 1rem; padding: 1rem 2rem; background: #2c3e50; color: #fff; }
header a { color: #fff; }
nav a { margin-right: 1rem; }
main { padding: 1rem 2rem; }
.books-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(160px, 1fr)); gap: 1rem; }
.book-card { background: #fff; border-radius: 6px; padding: .5rem; }
.book-card a { color: inherit; text-decoration: none; }
.book-card-cover, .book-card-cover-placeholder { width: 100%; height: 220px; object-fit: cover; font-size: 3rem; display: flex; align-items: center; justify-content: center; }
.subject-tag { display: inline-block; font-size: .75rem; background: #eef; border-radius: 3px; padding: 0 .3rem; margin: .1rem; }
.list-item { display: flex; gap: 1rem; background: #fff; margin-bottom: .5rem; padding: .5rem; color: inherit; text-decoration: none; }
.list-item-cover-thumb, .list-item-cover-placeholder { width: 40px; height: 60px; object-fit: cover; }
.no-results, .loading, .notice { padding: 2rem; text-align: center; color: #666; }
.modal { position: fixed; inset: 0; background: rgba(0,0,0,.5); display: flex; align-items: center; justify-content: center; }
.modal-content { background: #fff; max-width: 800px; width: 90%; max-height: 90vh; overflow: auto; padding: 1.5rem; border-radius: 6px; }
.book-detail-grid { display: grid; grid-template-columns: 200px 1fr; gap: 1.5rem; }
.book-cover, .book-cover-placeholder { width: 200px; }
.info-label { font-weight: bold; }
.download-btn { display: inline-block; margin: .25rem; }
"#;

fn mount(page: &Page, point: MountPoint) -> PreEscaped<&str> {
    PreEscaped(page.html(point))
}

fn authors_link(gender: Option<Gender>) -> String {
    match gender {
        Some(gender) => format!("/view/authors?gender={}", gender.code()),
        None => "/view/authors".to_string(),
    }
}

fn nav() -> Markup {
    html! {
        nav {
            a href="/view/all" { "All Books" }
            a href=(authors_link(None)) { "Authors" }
            a href=(authors_link(Some(Gender::Male))) { "Male Authors" }
            a href=(authors_link(Some(Gender::Female))) { "Female Authors" }
            a href="/view/series" { "Series" }
            a href="/view/subjects" { "Subjects" }
        }
    }
}

fn controls(state: &ViewState) -> Markup {
    html! {
        form.controls method="get" action="/" {
            input #searchInput type="search" name="q" value=(state.search_text)
                placeholder="Search by title, author, subject or series...";
            select #filterSelect name="filter" {
                @for mode in FilterMode::ALL {
                    option value=(mode.as_str()) selected[mode == state.filter] { (mode.label()) }
                }
            }
            select #sortSelect name="sort" {
                @for key in SortKey::KNOWN {
                    option value=(key.as_str()) selected[key == state.sort] { (key.label()) }
                }
            }
            button type="submit" { "Search" }
        }
    }
}

fn main_screen(state: &ViewState, page: &Page) -> Markup {
    html! {
        section #mainScreen {
            (controls(state))
            div #notice { (mount(page, MountPoint::Notice)) }
            div #booksContainer { (mount(page, MountPoint::BooksContainer)) }
        }
    }
}

fn list_screen(kind: ListKind, page: &Page) -> Markup {
    html! {
        section #listScreen {
            @if let ListKind::Authors(_) = kind {
                div.gender-filter {
                    a href=(authors_link(None)) { "All" }
                    " "
                    a href=(authors_link(Some(Gender::Male))) { "Male" }
                    " "
                    a href=(authors_link(Some(Gender::Female))) { "Female" }
                }
            }
            h2 #listTitle { (mount(page, MountPoint::ListTitle)) }
            div #listContainer { (mount(page, MountPoint::ListContainer)) }
        }
    }
}

pub(super) fn document(state: &ViewState, page: &Page) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Library" }
                style { (PreEscaped(STYLE)) }
            }
            body {
                header {
                    h1 { a href="/view/all" { "📚 Library" } }
                    span #totalBooks { (mount(page, MountPoint::TotalBooksBadge)) }
                    (nav())
                }
                main {
                    @match state.screen {
                        Screen::Main => { (main_screen(state, page)) }
                        Screen::List(kind) => { (list_screen(kind, page)) }
                    }
                }
                @if state.open_book.is_some() {
                    div.modal id="bookModal" {
                        div.modal-content {
                            a.close href="/modal/close" { "×" }
                            div #modalBody { (mount(page, MountPoint::ModalBody)) }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::BookId;

    #[test]
    fn test_main_document_reflects_state() {
        let mut state = ViewState::new(SortKey::AuthorDesc);
        state.search_text = "dune".to_string();
        state.filter = FilterMode::Standalone;
        let mut page = Page::new();
        page.mount(MountPoint::BooksContainer, html! { div.books-grid {} });

        let html = document(&state, &page).into_string();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"value="dune""#));
        assert!(html.contains(r#"<option value="standalone" selected>"#));
        assert!(html.contains(r#"<option value="author-desc" selected>"#));
        assert!(html.contains("books-grid"));
        assert!(!html.contains("listScreen"));
        assert!(!html.contains("bookModal"));
    }

    #[test]
    fn test_list_document_and_modal() {
        let mut state = ViewState::new(SortKey::TitleAsc);
        state.screen = Screen::List(ListKind::Series);
        state.open_book = Some(BookId::new(1));
        let mut page = Page::new();
        page.mount(MountPoint::ListTitle, html! { "All Series" });
        page.mount(MountPoint::ModalBody, html! { div.loading { "Loading book details..." } });

        let html = document(&state, &page).into_string();

        assert!(html.contains("All Series"));
        assert!(!html.contains("mainScreen"));
        assert!(!html.contains("gender-filter"));
        assert!(html.contains("bookModal"));
        assert!(html.contains("/modal/close"));
        assert!(html.contains("Loading book details..."));
    }
}
