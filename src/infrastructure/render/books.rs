//! 书目网格与详情视图

use maud::{html, Markup};

use super::{select_url, AssetUrls};
use crate::domain::catalog::{Book, BookDetail};

pub(super) fn grid(assets: &AssetUrls, books: &[Book]) -> Markup {
    html! {
        div.books-grid {
            @for book in books {
                (card(assets, book))
            }
        }
    }
}

fn card(assets: &AssetUrls, book: &Book) -> Markup {
    html! {
        div.book-card {
            a.book-card-link href=(format!("/book/{}", book.id)) {
                @if book.has_cover {
                    img.book-card-cover src=(assets.cover(book.id)) alt=(book.title) loading="lazy";
                } @else {
                    div.book-card-cover-placeholder { "📚" }
                }
                div.book-card-info {
                    div.book-title { (book.title) }
                    div.book-author { "by " (book.authors) }
                    @if let Some(series) = &book.series {
                        div.book-series { (series) }
                    }
                }
            }
            @if !book.subjects.is_empty() {
                (subject_tags(&book.subjects))
            }
        }
    }
}

fn subject_tags(subjects: &[String]) -> Markup {
    html! {
        div.book-subjects {
            @for subject in subjects {
                a.subject-tag href=(select_url(subject)) { (subject) }
            }
        }
    }
}

fn info_row(label: &str, value: Markup) -> Markup {
    html! {
        div.info-row {
            div.info-label { (label) }
            div.info-value { (value) }
        }
    }
}

/// 空串与缺失一样处理
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

pub(super) fn detail(assets: &AssetUrls, book: &BookDetail) -> Markup {
    html! {
        div.book-detail-grid {
            div {
                @if present(&book.cover_path).is_some() {
                    img.book-cover src=(assets.cover(book.id)) alt=(book.title);
                } @else {
                    div.book-cover-placeholder { "📚" }
                }
            }
            div.book-info {
                h2 { (book.title) }
                div.author { (book.authors) }
                @if let Some(series) = present(&book.series) {
                    (info_row("Series", html! { (series) }))
                }
                @if let Some(publisher) = present(&book.publisher) {
                    (info_row("Publisher", html! { (publisher) }))
                }
                @if let Some(date) = present(&book.publish_date) {
                    (info_row("Published", html! { (date) }))
                }
                @if let Some(isbn) = present(&book.isbn) {
                    (info_row("ISBN", html! { (isbn) }))
                }
            }
        }
        @if !book.subjects.is_empty() {
            (info_row("Subjects", subject_tags(&book.subjects)))
        }
        @if let Some(description) = present(&book.description) {
            div.info-row {
                div.info-label { "Description" }
                div.description { (description) }
            }
        }
        @if !book.files.is_empty() {
            div.download-section {
                div.info-label { "Download Book" }
                @for file in &book.files {
                    a.download-btn href=(assets.download(file.id)) download {
                        "Download "
                        span.format-badge { (file.format.to_uppercase()) }
                    }
                }
            }
        }
    }
}
