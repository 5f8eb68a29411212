//! Content post entity.

use chrono::NaiveDateTime;
use serde::Serialize;

use super::criteria::PostStatus;
use super::timestamp;

/// A blog post as returned by a content search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentPost {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub slug: String,
    pub status: Option<PostStatus>,
    pub format: String,
    #[serde(rename = "type")]
    pub post_type: String,
    pub link: String,
    pub author: i64,
    pub featured_media: i64,
    pub comment_status: String,
    pub ping_status: String,
    pub sticky: bool,
    pub template: String,
    #[serde(serialize_with = "timestamp::serialize_optional")]
    pub date: Option<NaiveDateTime>,
    #[serde(serialize_with = "timestamp::serialize_optional")]
    pub date_gmt: Option<NaiveDateTime>,
    #[serde(serialize_with = "timestamp::serialize_optional")]
    pub modified: Option<NaiveDateTime>,
    #[serde(serialize_with = "timestamp::serialize_optional")]
    pub modified_gmt: Option<NaiveDateTime>,
    pub categories: Vec<i64>,
    pub tags: Vec<i64>,
    pub meta: serde_json::Map<String, serde_json::Value>,
}

impl ContentPost {
    pub fn is_published(&self) -> bool {
        matches!(self.status, Some(PostStatus::Publish))
    }
}
