use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;
use tracing::instrument;

use crate::domain::errors::{GatewayError, GatewayResult, Platform};
use crate::domain::models::{ContentCriteria, ContentPost, ContentSite, UpstreamConfig};
use crate::domain::ports::ContentRepository;
use crate::infrastructure::platform::{
    convert_item, endpoint_url, PlatformClient, FALLBACK_COUNT_PAGE_SIZE,
};

use super::types::ApiPost;

const POSTS_PATH: &str = "/wp-json/wp/v2/posts";

/// Content repository backed by the public WordPress REST API (wp/v2).
pub struct WordPressRepository {
    client: PlatformClient,
    site: ContentSite,
}

fn join_ids(ids: &[u64]) -> String {
    ids.iter().map(u64::to_string).collect::<Vec<_>>().join(",")
}

impl WordPressRepository {
    pub fn new(site: ContentSite, upstream: &UpstreamConfig) -> GatewayResult<Self> {
        Ok(Self {
            client: PlatformClient::new(Platform::WordPress, upstream)?,
            site,
        })
    }

    pub fn search_params(criteria: &ContentCriteria) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(search) = &criteria.search {
            params.push(("search", search.clone()));
        }
        if let Some(status) = criteria.status {
            params.push(("status", status.as_str().to_string()));
        }
        if let Some(author) = criteria.author {
            params.push(("author", author.to_string()));
        }
        if !criteria.categories.is_empty() {
            params.push(("categories", join_ids(&criteria.categories)));
        }
        if !criteria.tags.is_empty() {
            params.push(("tags", join_ids(&criteria.tags)));
        }
        if let Some(before) = &criteria.before {
            params.push(("before", before.clone()));
        }
        if let Some(after) = &criteria.after {
            params.push(("after", after.clone()));
        }
        params.push(("per_page", criteria.pagination.per_page().to_string()));
        params.push(("page", criteria.pagination.page().to_string()));
        params.push(("orderby", criteria.order_by.as_str().to_string()));
        params.push(("order", criteria.order.as_str().to_string()));
        params
    }

    fn url(&self, suffix: &str, params: &[(&str, String)]) -> GatewayResult<Url> {
        let mut url = endpoint_url(self.site.base_url(), &format!("{POSTS_PATH}{suffix}"))?;
        if !params.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(params.iter().map(|(key, value)| (*key, value.as_str())));
        }
        Ok(url)
    }

    fn paged_params(criteria: &ContentCriteria, per_page: u32) -> Vec<(&'static str, String)> {
        Self::search_params(criteria)
            .into_iter()
            .map(|(key, value)| match key {
                "per_page" => (key, per_page.to_string()),
                "page" => (key, "1".to_string()),
                _ => (key, value),
            })
            .collect()
    }

    fn convert(post: Value) -> GatewayResult<ContentPost> {
        convert_item::<ApiPost, ContentPost>("post", post)
    }
}

#[async_trait]
impl ContentRepository for WordPressRepository {
    #[instrument(skip_all, fields(page = criteria.pagination.page(), per_page = criteria.pagination.per_page()))]
    async fn search(&self, criteria: &ContentCriteria) -> GatewayResult<Vec<ContentPost>> {
        let url = self.url("", &Self::search_params(criteria))?;
        let posts = self.client.get_json::<Vec<Value>>(url).await?;
        posts.into_iter().map(Self::convert).collect()
    }

    #[instrument(skip_all)]
    async fn count(&self, criteria: &ContentCriteria) -> GatewayResult<u64> {
        let head_url = self.url("", &Self::paged_params(criteria, 1))?;
        let fallback_url = self.url("", &Self::paged_params(criteria, FALLBACK_COUNT_PAGE_SIZE))?;
        self.client.count(head_url, fallback_url).await
    }

    async fn find_by_id(&self, id: i64) -> GatewayResult<ContentPost> {
        let url = self.url(&format!("/{id}"), &[])?;
        match self.client.get_json::<Value>(url).await {
            Ok(post) => Self::convert(post),
            Err(err) if err.upstream_status() == Some(404) => {
                Err(GatewayError::not_found("post", id.to_string()))
            }
            Err(err) => Err(err),
        }
    }

    async fn save(&self, _post: &ContentPost) -> GatewayResult<()> {
        Err(GatewayError::NotImplemented { operation: "save" })
    }

    async fn delete(&self, _id: i64) -> GatewayResult<()> {
        Err(GatewayError::NotImplemented { operation: "delete" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Pagination, PostOrderBy, PostStatus, SortOrder};

    #[test]
    fn test_search_params() {
        let criteria = ContentCriteria {
            search: Some("rust".to_string()),
            status: Some(PostStatus::Publish),
            author: Some(2),
            categories: vec![3, 8],
            after: Some("2024-01-01T00:00:00".to_string()),
            pagination: Pagination::new(1, 5),
            order_by: PostOrderBy::Title,
            order: SortOrder::Asc,
            ..ContentCriteria::default()
        };
        let params = WordPressRepository::search_params(&criteria);
        assert!(params.contains(&("categories", "3,8".to_string())));
        assert!(params.contains(&("author", "2".to_string())));
        assert!(params.contains(&("orderby", "title".to_string())));
        assert!(params.contains(&("order", "asc".to_string())));
        assert!(!params.iter().any(|(k, _)| *k == "tags"));
        assert!(!params.iter().any(|(k, _)| *k == "before"));
    }

    #[test]
    fn test_url_has_no_credentials() {
        let repo =
            WordPressRepository::new(ContentSite::new("https://blog.test"), &UpstreamConfig::default())
                .unwrap();
        let url = repo.url("", &WordPressRepository::search_params(&ContentCriteria::default())).unwrap();
        assert_eq!(url.path(), "/wp-json/wp/v2/posts");
        assert!(!url.as_str().contains("consumer_"));
    }
}
