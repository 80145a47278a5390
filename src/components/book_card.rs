use dioxus::prelude::*;

use crate::catalog::CatalogRecord;
use crate::utils::config::{PLACEHOLDER_COVER_URL, UNKNOWN_AUTHOR};
use crate::utils::format_utils::{cover_url, join_authors};

/// Display values for one result card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub key: String,
    pub cover_url: String,
    pub title: String,
    pub authors: String,
    pub year: String,
}

impl CardView {
    /// Pure mapping from a record to what the card shows. Missing fields degrade
    /// to the placeholder cover, "Unknown author" and an empty year.
    pub fn from_record(record: &CatalogRecord) -> Self {
        let cover_url = record
            .cover_i
            .map(cover_url)
            .unwrap_or_else(|| PLACEHOLDER_COVER_URL.to_string());

        let authors = record
            .author_name
            .as_deref()
            .and_then(join_authors)
            .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());

        let year = record
            .first_publish_year
            .map(|y| y.to_string())
            .unwrap_or_default();

        Self {
            key: list_key(record),
            cover_url,
            title: record.title.clone(),
            authors,
            year,
        }
    }
}

/// Stable list identity: the work key, else cover id + title
pub fn list_key(record: &CatalogRecord) -> String {
    match record.key.as_deref() {
        Some(key) if !key.is_empty() => key.to_string(),
        _ => {
            let cover = record
                .cover_i
                .map(|id| id.to_string())
                .unwrap_or_else(|| "no-cover".to_string());
            format!("{}-{}", cover, record.title)
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct BookCardProps {
    record: CatalogRecord,
}

#[component]
pub fn BookCard(props: BookCardProps) -> Element {
    let view = CardView::from_record(&props.record);

    rsx! {
        div { class: "book-card",
            img {
                class: "book-cover",
                src: "{view.cover_url}",
                alt: "{view.title}",
            }
            h3 { class: "book-title", "{view.title}" }
            p { class: "book-authors", "{view.authors}" }
            p { class: "book-year", "{view.year}" }
        }
    }
}
