//! Common test utilities for integration tests
//!
//! Fixtures for fake WooCommerce and WordPress payloads plus gateway wiring.

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{json, Value};
use storefront_gateway::adapters::mcp::{ToolGateway, ToolRegistry};
use storefront_gateway::domain::models::UpstreamConfig;
use storefront_gateway::infrastructure::HttpRepositoryProvider;
use storefront_gateway::services::ToolDispatcher;

pub const PRODUCTS_PATH: &str = "/wp-json/wc/v3/products";
pub const POSTS_PATH: &str = "/wp-json/wp/v2/posts";

/// Short timeout so a misconfigured mock fails fast.
pub fn upstream() -> UpstreamConfig {
    UpstreamConfig {
        timeout_secs: 5,
        ..UpstreamConfig::default()
    }
}

/// Gateway wired to real HTTP repositories.
pub fn http_gateway() -> ToolGateway {
    let provider = Arc::new(HttpRepositoryProvider::new(upstream()));
    ToolGateway::new(
        Arc::new(ToolRegistry::standard()),
        Arc::new(ToolDispatcher::new(provider)),
    )
}

pub fn product_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "slug": name.to_lowercase().replace(' ', "-"),
        "permalink": format!("https://shop.test/product/{id}"),
        "date_created": "2024-03-01T09:30:00",
        "date_modified": "2024-03-02T10:00:00",
        "type": "simple",
        "status": "publish",
        "featured": false,
        "catalog_visibility": "visible",
        "description": "<p>Soft and pink</p>",
        "short_description": "",
        "sku": format!("SKU-{id}"),
        "price": "19.9",
        "regular_price": "24.5",
        "sale_price": "",
        "on_sale": true,
        "purchasable": true,
        "total_sales": 4,
        "virtual": false,
        "downloadable": false,
        "manage_stock": true,
        "stock_quantity": 12,
        "stock_status": "instock",
        "weight": "0.3",
        "dimensions": {"length": "10", "width": "5", "height": ""},
        "average_rating": "4.50",
        "rating_count": 2,
        "parent_id": 0,
        "menu_order": 0,
        "related_ids": [7, 8],
        "variations": [],
        "categories": [{"id": 15, "name": "Socks", "slug": "socks"}],
        "tags": [],
        "images": [
            {"id": 2, "src": "https://shop.test/b.jpg", "name": "b", "alt": "", "position": 1},
            {"id": 1, "src": "https://shop.test/a.jpg", "name": "a", "alt": "", "position": 0}
        ],
        "attributes": [],
        "default_attributes": [],
        "meta_data": [{"id": 99, "key": "_origin", "value": "import"}]
    })
}

pub fn post_json(id: i64, title: &str) -> Value {
    json!({
        "id": id,
        "date": "2024-05-04T08:00:00",
        "date_gmt": "2024-05-04T06:00:00",
        "modified": "2024-05-05T08:00:00",
        "modified_gmt": "2024-05-05T06:00:00",
        "slug": title.to_lowercase().replace(' ', "-"),
        "status": "publish",
        "type": "post",
        "link": format!("https://blog.test/?p={id}"),
        "title": {"rendered": title},
        "content": {"rendered": "<p>Body</p>", "protected": false},
        "excerpt": {"rendered": "<p>Summary</p>", "protected": false},
        "author": 1,
        "featured_media": 0,
        "comment_status": "open",
        "ping_status": "open",
        "sticky": false,
        "template": "",
        "format": "standard",
        "meta": [],
        "categories": [3],
        "tags": [5, 6]
    })
}
