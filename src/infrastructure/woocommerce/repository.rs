use async_trait::async_trait;
use reqwest::Url;
use serde_json::Value;
use tracing::instrument;

use crate::domain::errors::{GatewayError, GatewayResult, Platform};
use crate::domain::models::{CatalogCriteria, CatalogItem, SearchCredentials, UpstreamConfig};
use crate::domain::ports::CatalogRepository;
use crate::infrastructure::platform::{
    convert_item, endpoint_url, PlatformClient, FALLBACK_COUNT_PAGE_SIZE,
};

use super::types::ApiProduct;

const PRODUCTS_PATH: &str = "/wp-json/wc/v3/products";

/// Catalog repository backed by the WooCommerce REST API (v3).
///
/// Bound to one store's credentials, which travel as `consumer_key` /
/// `consumer_secret` query parameters on every request.
pub struct WooCommerceRepository {
    client: PlatformClient,
    credentials: SearchCredentials,
}

impl WooCommerceRepository {
    pub fn new(credentials: SearchCredentials, upstream: &UpstreamConfig) -> GatewayResult<Self> {
        Ok(Self {
            client: PlatformClient::new(Platform::WooCommerce, upstream)?,
            credentials,
        })
    }

    /// Query parameters for a listing request, using WooCommerce's own names.
    ///
    /// Optional filters are only included when set; pagination and sort always are.
    pub fn search_params(criteria: &CatalogCriteria) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(search) = &criteria.search {
            params.push(("search", search.clone()));
        }
        if let Some(category) = &criteria.category {
            params.push(("category", category.clone()));
        }
        if let Some(tag) = &criteria.tag {
            params.push(("tag", tag.clone()));
        }
        if let Some(status) = criteria.status {
            params.push(("status", status.as_str().to_string()));
        }
        if let Some(item_type) = criteria.item_type {
            params.push(("type", item_type.as_str().to_string()));
        }
        if let Some(featured) = criteria.featured {
            params.push(("featured", featured.to_string()));
        }
        if let Some(on_sale) = criteria.on_sale {
            params.push(("on_sale", on_sale.to_string()));
        }
        if let Some(min_price) = criteria.min_price {
            params.push(("min_price", min_price.to_string()));
        }
        if let Some(max_price) = criteria.max_price {
            params.push(("max_price", max_price.to_string()));
        }
        if let Some(stock_status) = criteria.stock_status {
            params.push(("stock_status", stock_status.as_str().to_string()));
        }
        params.push(("per_page", criteria.pagination.per_page().to_string()));
        params.push(("page", criteria.pagination.page().to_string()));
        params.push(("orderby", criteria.order_by.as_str().to_string()));
        params.push(("order", criteria.order.as_str().to_string()));
        params
    }

    fn url(&self, suffix: &str, params: &[(&str, String)]) -> GatewayResult<Url> {
        let mut url = endpoint_url(self.credentials.base_url(), &format!("{PRODUCTS_PATH}{suffix}"))?;
        url.query_pairs_mut()
            .extend_pairs(params.iter().map(|(key, value)| (*key, value.as_str())))
            .append_pair("consumer_key", self.credentials.consumer_key())
            .append_pair("consumer_secret", self.credentials.consumer_secret());
        Ok(url)
    }

    /// Same filters with pagination replaced.
    fn paged_params(criteria: &CatalogCriteria, per_page: u32) -> Vec<(&'static str, String)> {
        Self::search_params(criteria)
            .into_iter()
            .map(|(key, value)| match key {
                "per_page" => (key, per_page.to_string()),
                "page" => (key, "1".to_string()),
                _ => (key, value),
            })
            .collect()
    }

    /// Items are decoded one by one so a bad item is reported by its own ID.
    fn convert(product: Value) -> GatewayResult<CatalogItem> {
        convert_item::<ApiProduct, CatalogItem>("product", product)
    }
}

#[async_trait]
impl CatalogRepository for WooCommerceRepository {
    #[instrument(skip_all, fields(page = criteria.pagination.page(), per_page = criteria.pagination.per_page()))]
    async fn search(&self, criteria: &CatalogCriteria) -> GatewayResult<Vec<CatalogItem>> {
        let url = self.url("", &Self::search_params(criteria))?;
        let products = self.client.get_json::<Vec<Value>>(url).await?;
        products.into_iter().map(Self::convert).collect()
    }

    #[instrument(skip_all)]
    async fn count(&self, criteria: &CatalogCriteria) -> GatewayResult<u64> {
        let head_url = self.url("", &Self::paged_params(criteria, 1))?;
        let fallback_url = self.url("", &Self::paged_params(criteria, FALLBACK_COUNT_PAGE_SIZE))?;
        self.client.count(head_url, fallback_url).await
    }

    async fn find_by_id(&self, id: i64) -> GatewayResult<CatalogItem> {
        let url = self.url(&format!("/{id}"), &[])?;
        match self.client.get_json::<Value>(url).await {
            Ok(product) => Self::convert(product),
            Err(err) if err.upstream_status() == Some(404) => {
                Err(GatewayError::not_found("product", id.to_string()))
            }
            Err(err) => Err(err),
        }
    }

    async fn find_by_sku(&self, sku: &str) -> GatewayResult<CatalogItem> {
        let url = self.url("", &[("sku", sku.to_string()), ("per_page", "1".to_string())])?;
        let products = self.client.get_json::<Vec<Value>>(url).await?;
        match products.into_iter().next() {
            Some(product) => Self::convert(product),
            None => Err(GatewayError::not_found("product", sku)),
        }
    }

    async fn save(&self, _item: &CatalogItem) -> GatewayResult<()> {
        Err(GatewayError::NotImplemented { operation: "save" })
    }

    async fn delete(&self, _id: i64) -> GatewayResult<()> {
        Err(GatewayError::NotImplemented { operation: "delete" })
    }
}
