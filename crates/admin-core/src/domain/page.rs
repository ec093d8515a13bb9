//! Response Envelopes
//!
//! The API is not uniform: categories report `totalData`, articles report
//! `total`, and single entities arrive either bare or under `data`.

use serde::{Deserialize, Deserializer};

/// One page of a remote list
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub data: Vec<T>,
    #[serde(default, alias = "totalData")]
    pub total: u64,
    #[serde(default = "first_page", deserialize_with = "at_least_one")]
    pub total_pages: u32,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, total: u64, total_pages: u32) -> Self {
        Self {
            data,
            total,
            total_pages: total_pages.max(1),
        }
    }
}

/// A payload that may or may not be wrapped in `{ "data": ... }`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    pub fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } => data,
            Envelope::Bare(inner) => inner,
        }
    }
}

fn first_page() -> u32 {
    1
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn at_least_one<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(1).max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Article, Category};

    #[test]
    fn test_category_page_uses_total_data() {
        let json = r#"{
            "data": [{"id": "c1", "name": "Tech", "createdAt": "2025-04-19T04:21:34.221Z"}],
            "totalData": 21,
            "totalPages": 3,
            "currentPage": 1
        }"#;
        let page: Page<Category> = serde_json::from_str(json).unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.total, 21);
        assert_eq!(page.total_pages, 3);
        assert!(page.data[0].created_at.is_some());
    }

    #[test]
    fn test_article_page_defaults_when_fields_missing() {
        let page: Page<Article> = serde_json::from_str(r#"{"data": null, "page": 1}"#).unwrap();
        assert!(page.data.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_zero_total_pages_is_raised_to_one() {
        let page: Page<Article> =
            serde_json::from_str(r#"{"data": [], "total": 0, "totalPages": 0}"#).unwrap();
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_envelope_accepts_both_shapes() {
        let wrapped: Envelope<Category> =
            serde_json::from_str(r#"{"data": {"id": "c1", "name": "Tech"}}"#).unwrap();
        let bare: Envelope<Category> = serde_json::from_str(r#"{"id": "c1", "name": "Tech"}"#).unwrap();
        assert_eq!(wrapped.into_inner(), bare.into_inner());
    }
}
