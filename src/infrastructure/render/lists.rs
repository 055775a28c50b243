//! 作者/系列/主题列表条目

use maud::{html, Markup};

use super::{select_url, AssetUrls};
use crate::domain::catalog::{CoverRef, SubjectSummary};

fn book_count(count: u32) -> String {
    if count == 1 {
        "1 book".to_string()
    } else {
        format!("{} books", count)
    }
}

/// 带封面缩略图的条目（作者、系列）
pub(super) fn cover_item(
    assets: &AssetUrls,
    name: &str,
    count: u32,
    covers: &[CoverRef],
    limit: usize,
) -> Markup {
    html! {
        a.list-item href=(select_url(name)) {
            div.list-item-covers {
                @for cover in covers.iter().take(limit) {
                    @if cover.has_cover {
                        img.list-item-cover-thumb src=(assets.cover(cover.book_id)) alt=(cover.title) loading="lazy";
                    } @else {
                        div.list-item-cover-placeholder { "📚" }
                    }
                }
            }
            div.list-item-info {
                div.list-item-name { (name) }
                div.list-item-count { (book_count(count)) }
            }
        }
    }
}

pub(super) fn subject_item(subject: &SubjectSummary) -> Markup {
    html! {
        a.list-item href=(select_url(&subject.name)) {
            div.list-item-info {
                div.list-item-name { (subject.name) }
                div.list-item-count { (book_count(subject.book_count)) }
            }
        }
    }
}
