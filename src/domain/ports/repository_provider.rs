use crate::domain::errors::GatewayResult;
use crate::domain::models::{ContentSite, SearchCredentials};
use crate::domain::ports::{CatalogRepository, ContentRepository};

/// Builds request-scoped repositories.
///
/// Nothing returned here is shared between calls: each call gets a repository bound
/// to its own credentials or site.
pub trait RepositoryProvider: Send + Sync {
    fn catalog(&self, credentials: SearchCredentials) -> GatewayResult<Box<dyn CatalogRepository>>;

    fn content(&self, site: ContentSite) -> GatewayResult<Box<dyn ContentRepository>>;
}
