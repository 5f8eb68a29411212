use async_trait::async_trait;

use crate::domain::errors::GatewayResult;
use crate::domain::models::{CatalogCriteria, CatalogItem};

/// Read-only access to one store's product catalog.
///
/// An implementation is bound to a single set of credentials and is built fresh for
/// each tool call.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// List items matching the criteria, in platform order.
    ///
    /// # Arguments
    /// * `criteria` - Validated filters, sort and pagination
    ///
    /// # Returns
    /// * `Ok(Vec<CatalogItem>)` - One page of items
    /// * `Err(GatewayError)` - Connection, platform or item conversion failure
    async fn search(&self, criteria: &CatalogCriteria) -> GatewayResult<Vec<CatalogItem>>;

    /// Total number of items matching the criteria, ignoring pagination.
    ///
    /// Read from the platform's total-count header. When the header is missing, the
    /// count falls back to the number of items returned by a single 100-item page, so
    /// totals above 100 are under-reported in that case.
    async fn count(&self, criteria: &CatalogCriteria) -> GatewayResult<u64>;

    /// Fetch one item by its platform ID. Unknown IDs yield `NotFound`.
    async fn find_by_id(&self, id: i64) -> GatewayResult<CatalogItem>;

    /// Fetch one item by SKU. Unknown SKUs yield `NotFound`.
    async fn find_by_sku(&self, sku: &str) -> GatewayResult<CatalogItem>;

    /// Always fails with `NotImplemented`; the gateway is read-only.
    async fn save(&self, item: &CatalogItem) -> GatewayResult<()>;

    /// Always fails with `NotImplemented`; the gateway is read-only.
    async fn delete(&self, id: i64) -> GatewayResult<()>;
}
