//! Wire records for the Google Books volumes API.
//!
//! These types mirror the upstream JSON (camelCase keys) and are kept separate
//! from the domain types so the API shape never leaks past the repository.
//! Unknown fields are ignored and every optional object defaults to empty, so
//! partial responses decode without error.

use crate::domain::{Book, BookId, SearchResult};
use serde::{Deserialize, Serialize};

/// Body of `GET volumes?q=...`.
///
/// The API omits `items` entirely when nothing matched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeList {
    #[serde(default)]
    pub items: Vec<VolumeRef>,
}

/// One entry of a search response; only the identifier is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeRef {
    pub id: String,
}

/// Body of `GET volumes/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    pub id: String,

    #[serde(default)]
    pub volume_info: VolumeInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeInfo {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub authors: Option<Vec<String>>,

    #[serde(default)]
    pub image_links: Option<ImageLinks>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageLinks {
    #[serde(default)]
    pub thumbnail: Option<String>,
}

impl From<VolumeList> for SearchResult {
    fn from(list: VolumeList) -> Self {
        Self {
            items: list.items.into_iter().map(|item| BookId(item.id)).collect(),
        }
    }
}

impl From<Volume> for Book {
    fn from(volume: Volume) -> Self {
        let VolumeInfo {
            title,
            authors,
            image_links,
        } = volume.volume_info;

        Self {
            id: volume.id,
            title,
            authors,
            thumbnail_url: image_links.and_then(|links| links.thumbnail),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn volume_without_info_decodes_to_bare_book() {
        let volume: Volume = serde_json::from_str(r#"{"id": "x"}"#).unwrap();
        let book = Book::from(volume);

        assert_eq!(
            book,
            Book {
                id: "x".to_string(),
                title: None,
                authors: None,
                thumbnail_url: None,
            }
        );
    }

    #[test]
    fn full_volume_maps_display_fields() {
        let json = r#"{
            "kind": "books#volume",
            "id": "zyTCAlFPjgYC",
            "etag": "f0zKg75Mx/I",
            "volumeInfo": {
                "title": "The Google Story",
                "authors": ["David A. Vise", "Mark Malseed"],
                "publishedDate": "2005-11-15",
                "imageLinks": {
                    "smallThumbnail": "http://books.google.com/small.jpg",
                    "thumbnail": "http://books.google.com/thumb.jpg"
                }
            },
            "saleInfo": { "country": "US" }
        }"#;

        let book = Book::from(serde_json::from_str::<Volume>(json).unwrap());

        assert_eq!(book.id, "zyTCAlFPjgYC");
        assert_eq!(book.title.as_deref(), Some("The Google Story"));
        assert_eq!(
            book.authors,
            Some(vec!["David A. Vise".to_string(), "Mark Malseed".to_string()])
        );
        assert_eq!(book.thumbnail_url.as_deref(), Some("http://books.google.com/thumb.jpg"));
    }

    #[test]
    fn image_links_without_thumbnail_leave_url_empty() {
        let json = r#"{"id": "y", "volumeInfo": {"imageLinks": {"smallThumbnail": "s.jpg"}}}"#;
        let book = Book::from(serde_json::from_str::<Volume>(json).unwrap());
        assert!(book.thumbnail_url.is_none());
    }

    #[test]
    fn search_without_items_is_empty() {
        let list: VolumeList =
            serde_json::from_str(r#"{"kind": "books#volumes", "totalItems": 0}"#).unwrap();
        assert!(SearchResult::from(list).is_empty());
    }

    #[test]
    fn search_keeps_response_order() {
        let list: VolumeList = serde_json::from_str(
            r#"{"items": [{"id": "c", "selfLink": "..."}, {"id": "a"}, {"id": "b"}]}"#,
        )
        .unwrap();

        let result = SearchResult::from(list);
        let ids: Vec<&str> = result.items.iter().map(BookId::as_str).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn missing_id_is_a_decode_error() {
        assert!(serde_json::from_str::<Volume>(r#"{"volumeInfo": {}}"#).is_err());
    }
}
