//! Production repository provider.

use crate::domain::errors::GatewayResult;
use crate::domain::models::{ContentSite, SearchCredentials, UpstreamConfig};
use crate::domain::ports::{CatalogRepository, ContentRepository, RepositoryProvider};
use crate::infrastructure::woocommerce::WooCommerceRepository;
use crate::infrastructure::wordpress::WordPressRepository;

/// Builds HTTP-backed repositories with a fresh client per call.
#[derive(Debug, Clone, Default)]
pub struct HttpRepositoryProvider {
    upstream: UpstreamConfig,
}

impl HttpRepositoryProvider {
    pub fn new(upstream: UpstreamConfig) -> Self {
        Self { upstream }
    }
}

impl RepositoryProvider for HttpRepositoryProvider {
    fn catalog(&self, credentials: SearchCredentials) -> GatewayResult<Box<dyn CatalogRepository>> {
        Ok(Box::new(WooCommerceRepository::new(credentials, &self.upstream)?))
    }

    fn content(&self, site: ContentSite) -> GatewayResult<Box<dyn ContentRepository>> {
        Ok(Box::new(WordPressRepository::new(site, &self.upstream)?))
    }
}
