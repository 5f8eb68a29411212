//! Catalog item entity.

use chrono::NaiveDateTime;
use serde::Serialize;

use super::criteria::{CatalogStatus, CatalogType, StockStatus};
use super::money::Money;
use super::timestamp;

/// Taxonomy reference (category or tag) attached to an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermRef {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemImage {
    pub id: i64,
    pub src: String,
    pub name: String,
    pub alt: String,
    pub position: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemAttribute {
    pub id: i64,
    pub name: String,
    pub position: i64,
    pub visible: bool,
    pub variation: bool,
    pub options: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefaultAttribute {
    pub id: i64,
    pub name: String,
    pub option: String,
}

/// Free-form key/value metadata entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetaEntry {
    pub id: i64,
    pub key: String,
    pub value: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    pub length: String,
    pub width: String,
    pub height: String,
}

/// A product as returned by a catalog search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogItem {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub permalink: String,
    #[serde(serialize_with = "timestamp::serialize_optional")]
    pub date_created: Option<NaiveDateTime>,
    #[serde(serialize_with = "timestamp::serialize_optional")]
    pub date_modified: Option<NaiveDateTime>,
    pub status: Option<CatalogStatus>,
    #[serde(rename = "type")]
    pub item_type: Option<CatalogType>,
    pub featured: bool,
    pub catalog_visibility: String,
    pub description: String,
    pub short_description: String,
    pub sku: String,
    pub price: Option<Money>,
    pub regular_price: Option<Money>,
    pub sale_price: Option<Money>,
    pub on_sale: bool,
    pub purchasable: bool,
    pub total_sales: i64,
    #[serde(rename = "virtual")]
    pub is_virtual: bool,
    pub downloadable: bool,
    pub manage_stock: bool,
    pub stock_quantity: Option<i64>,
    pub stock_status: Option<StockStatus>,
    pub weight: String,
    pub dimensions: Option<Dimensions>,
    pub average_rating: String,
    pub rating_count: i64,
    pub parent_id: i64,
    pub menu_order: i64,
    pub related_ids: Vec<i64>,
    pub variations: Vec<i64>,
    pub categories: Vec<TermRef>,
    pub tags: Vec<TermRef>,
    pub images: Vec<ItemImage>,
    pub attributes: Vec<ItemAttribute>,
    pub default_attributes: Vec<DefaultAttribute>,
    pub meta_data: Vec<MetaEntry>,
}

impl CatalogItem {
    pub fn is_in_stock(&self) -> bool {
        matches!(self.stock_status, Some(StockStatus::InStock))
    }

    pub fn primary_image(&self) -> Option<&ItemImage> {
        self.images.iter().min_by_key(|image| image.position)
    }
}
