use async_trait::async_trait;

use crate::domain::errors::GatewayResult;
use crate::domain::models::{ContentCriteria, ContentPost};

/// Read-only access to one site's posts.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// List posts matching the criteria, in platform order.
    async fn search(&self, criteria: &ContentCriteria) -> GatewayResult<Vec<ContentPost>>;

    /// Total matching posts. Same header and fallback rules as the catalog count,
    /// including the under-count above 100 when the header is missing.
    async fn count(&self, criteria: &ContentCriteria) -> GatewayResult<u64>;

    async fn find_by_id(&self, id: i64) -> GatewayResult<ContentPost>;

    async fn save(&self, post: &ContentPost) -> GatewayResult<()>;

    async fn delete(&self, id: i64) -> GatewayResult<()>;
}
