//! WordPress REST payloads and their conversion into content entities.

use serde::Deserialize;

use crate::domain::errors::ConversionError;
use crate::domain::models::timestamp::parse_timestamp;
use crate::domain::models::{ContentPost, PostStatus};

/// `{ "rendered": "..." }` wrapper used for title, content and excerpt.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Rendered {
    pub rendered: String,
}

/// Post as returned by `/wp-json/wp/v2/posts`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiPost {
    pub id: i64,
    pub date: Option<String>,
    pub date_gmt: Option<String>,
    pub modified: Option<String>,
    pub modified_gmt: Option<String>,
    pub slug: String,
    pub status: String,
    #[serde(rename = "type")]
    pub post_type: String,
    pub link: String,
    pub title: Rendered,
    pub content: Rendered,
    pub excerpt: Rendered,
    pub author: i64,
    pub featured_media: i64,
    pub comment_status: String,
    pub ping_status: String,
    pub sticky: bool,
    pub template: String,
    pub format: String,
    pub meta: MetaField,
    pub categories: Vec<i64>,
    pub tags: Vec<i64>,
}

/// WordPress sends `meta` as an object, or as `[]` when no meta keys are registered.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(untagged)]
pub enum MetaField {
    Map(serde_json::Map<String, serde_json::Value>),
    List(Vec<serde_json::Value>),
    #[default]
    #[serde(skip)]
    Missing,
}

impl MetaField {
    fn into_map(self) -> serde_json::Map<String, serde_json::Value> {
        match self {
            Self::Map(map) => map,
            Self::List(_) | Self::Missing => serde_json::Map::new(),
        }
    }
}

impl TryFrom<ApiPost> for ContentPost {
    type Error = ConversionError;

    fn try_from(api: ApiPost) -> Result<Self, Self::Error> {
        if api.id <= 0 {
            return Err(ConversionError::new(format!(
                "post ID must be positive, got {}",
                api.id
            )));
        }

        Ok(Self {
            id: api.id,
            date: api.date.as_deref().and_then(parse_timestamp),
            date_gmt: api.date_gmt.as_deref().and_then(parse_timestamp),
            modified: api.modified.as_deref().and_then(parse_timestamp),
            modified_gmt: api.modified_gmt.as_deref().and_then(parse_timestamp),
            status: PostStatus::parse(&api.status),
            title: api.title.rendered,
            content: api.content.rendered,
            excerpt: api.excerpt.rendered,
            slug: api.slug,
            format: api.format,
            post_type: api.post_type,
            link: api.link,
            author: api.author,
            featured_media: api.featured_media,
            comment_status: api.comment_status,
            ping_status: api.ping_status,
            sticky: api.sticky,
            template: api.template,
            categories: api.categories,
            tags: api.tags,
            meta: api.meta.into_map(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_post_conversion() {
        let api: ApiPost = serde_json::from_value(json!({
            "id": 12,
            "date": "2024-04-02T10:15:00",
            "modified": "garbage",
            "slug": "hello-world",
            "status": "publish",
            "type": "post",
            "title": {"rendered": "Hello world"},
            "content": {"rendered": "<p>Hi</p>", "protected": false},
            "excerpt": {"rendered": "Hi"},
            "author": 3,
            "categories": [1, 4],
            "tags": [],
            "meta": {"footnotes": ""}
        }))
        .unwrap();

        let post = ContentPost::try_from(api).unwrap();
        assert_eq!(post.title, "Hello world");
        assert_eq!(post.content, "<p>Hi</p>");
        assert!(post.is_published());
        assert!(post.date.is_some());
        assert!(post.modified.is_none());
        assert_eq!(post.categories, vec![1, 4]);
        assert_eq!(post.meta.get("footnotes"), Some(&json!("")));
    }

    #[test]
    fn test_meta_as_empty_list() {
        let api: ApiPost = serde_json::from_value(json!({"id": 1, "meta": []})).unwrap();
        let post = ContentPost::try_from(api).unwrap();
        assert!(post.meta.is_empty());
    }

    #[test]
    fn test_rejects_non_positive_id() {
        let api: ApiPost = serde_json::from_value(json!({"id": -4})).unwrap();
        let err = ContentPost::try_from(api).unwrap_err();
        assert_eq!(err.to_string(), "post ID must be positive, got -4");
    }
}
