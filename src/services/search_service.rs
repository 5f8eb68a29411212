//! Search orchestration for both domains.

use std::sync::Arc;
use tracing::debug;

use crate::domain::errors::GatewayResult;
use crate::domain::models::{
    CatalogCriteria, CatalogItem, ContentCriteria, ContentPost, ContentSite, SearchCredentials,
    SearchResult,
};
use crate::domain::ports::RepositoryProvider;
use crate::services::result_assembler::ResultAssembler;

/// Runs a catalog search with a repository built for the call's credentials.
#[derive(Clone)]
pub struct CatalogSearchService {
    provider: Arc<dyn RepositoryProvider>,
}

impl CatalogSearchService {
    pub fn new(provider: Arc<dyn RepositoryProvider>) -> Self {
        Self { provider }
    }

    /// Fetch one page, then the matching total, then assemble the envelope.
    ///
    /// The count only runs once the page succeeded, so a platform rejection is always
    /// reported from the listing response, which carries the error body.
    pub async fn search(
        &self,
        criteria: &CatalogCriteria,
        credentials: SearchCredentials,
    ) -> GatewayResult<SearchResult<CatalogItem>> {
        let repository = self.provider.catalog(credentials)?;
        let items = repository.search(criteria).await?;
        let total = repository.count(criteria).await?;
        debug!(items = items.len(), total, "catalog page fetched");
        Ok(ResultAssembler::assemble(items, total, criteria.pagination))
    }
}

#[derive(Clone)]
pub struct ContentSearchService {
    provider: Arc<dyn RepositoryProvider>,
}

impl ContentSearchService {
    pub fn new(provider: Arc<dyn RepositoryProvider>) -> Self {
        Self { provider }
    }

    pub async fn search(
        &self,
        criteria: &ContentCriteria,
        site: ContentSite,
    ) -> GatewayResult<SearchResult<ContentPost>> {
        let repository = self.provider.content(site)?;
        let posts = repository.search(criteria).await?;
        let total = repository.count(criteria).await?;
        debug!(posts = posts.len(), total, "content page fetched");
        Ok(ResultAssembler::assemble(posts, total, criteria.pagination))
    }
}
