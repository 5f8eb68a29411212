//! WooCommerce REST payloads and their conversion into catalog entities.

use serde::Deserialize;

use crate::domain::errors::ConversionError;
use crate::domain::models::timestamp::parse_timestamp;
use crate::domain::models::{
    CatalogItem, CatalogStatus, CatalogType, DefaultAttribute, Dimensions, ItemAttribute,
    ItemImage, MetaEntry, Money, StockStatus, TermRef,
};

/// Product as returned by `/wp-json/wc/v3/products`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiProduct {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub permalink: String,
    pub date_created: Option<String>,
    pub date_modified: Option<String>,
    #[serde(rename = "type")]
    pub product_type: String,
    pub status: String,
    pub featured: bool,
    pub catalog_visibility: String,
    pub description: String,
    pub short_description: String,
    pub sku: String,
    pub price: Option<String>,
    pub regular_price: Option<String>,
    pub sale_price: Option<String>,
    pub on_sale: bool,
    pub purchasable: bool,
    pub total_sales: i64,
    #[serde(rename = "virtual")]
    pub is_virtual: bool,
    pub downloadable: bool,
    pub manage_stock: bool,
    pub stock_quantity: Option<i64>,
    pub stock_status: String,
    pub weight: Option<String>,
    pub dimensions: ApiDimensions,
    pub average_rating: String,
    pub rating_count: i64,
    pub parent_id: i64,
    pub menu_order: i64,
    pub related_ids: Vec<i64>,
    pub variations: Vec<i64>,
    pub categories: Vec<ApiTerm>,
    pub tags: Vec<ApiTerm>,
    pub images: Vec<ApiImage>,
    pub attributes: Vec<ApiAttribute>,
    pub default_attributes: Vec<ApiDefaultAttribute>,
    pub meta_data: Vec<ApiMetaData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiDimensions {
    pub length: String,
    pub width: String,
    pub height: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiTerm {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiImage {
    pub id: i64,
    pub src: String,
    pub name: String,
    pub alt: String,
    pub position: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiAttribute {
    pub id: i64,
    pub name: String,
    pub position: i64,
    pub visible: bool,
    pub variation: bool,
    pub options: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiDefaultAttribute {
    pub id: i64,
    pub name: String,
    pub option: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiMetaData {
    pub id: i64,
    pub key: String,
    pub value: serde_json::Value,
}

fn money(raw: Option<&str>) -> Option<Money> {
    raw.and_then(Money::parse)
}

impl TryFrom<ApiProduct> for CatalogItem {
    type Error = ConversionError;

    /// Fails only on structural problems; bad dates and unknown enum values are dropped.
    fn try_from(api: ApiProduct) -> Result<Self, Self::Error> {
        if api.id <= 0 {
            return Err(ConversionError::new(format!(
                "product ID must be positive, got {}",
                api.id
            )));
        }

        let dimensions = {
            let d = &api.dimensions;
            let empty = d.length.is_empty() && d.width.is_empty() && d.height.is_empty();
            (!empty).then(|| Dimensions {
                length: d.length.clone(),
                width: d.width.clone(),
                height: d.height.clone(),
            })
        };

        Ok(Self {
            id: api.id,
            date_created: api.date_created.as_deref().and_then(parse_timestamp),
            date_modified: api.date_modified.as_deref().and_then(parse_timestamp),
            status: CatalogStatus::parse(&api.status),
            item_type: CatalogType::parse(&api.product_type),
            stock_status: StockStatus::parse(&api.stock_status),
            price: money(api.price.as_deref()),
            regular_price: money(api.regular_price.as_deref()),
            sale_price: money(api.sale_price.as_deref()),
            weight: api.weight.unwrap_or_default(),
            dimensions,
            name: api.name,
            slug: api.slug,
            permalink: api.permalink,
            featured: api.featured,
            catalog_visibility: api.catalog_visibility,
            description: api.description,
            short_description: api.short_description,
            sku: api.sku,
            on_sale: api.on_sale,
            purchasable: api.purchasable,
            total_sales: api.total_sales,
            is_virtual: api.is_virtual,
            downloadable: api.downloadable,
            manage_stock: api.manage_stock,
            stock_quantity: api.stock_quantity,
            average_rating: api.average_rating,
            rating_count: api.rating_count,
            parent_id: api.parent_id,
            menu_order: api.menu_order,
            related_ids: api.related_ids,
            variations: api.variations,
            categories: api.categories.into_iter().map(TermRef::from).collect(),
            tags: api.tags.into_iter().map(TermRef::from).collect(),
            images: api
                .images
                .into_iter()
                .map(|image| ItemImage {
                    id: image.id,
                    src: image.src,
                    name: image.name,
                    alt: image.alt,
                    position: image.position,
                })
                .collect(),
            attributes: api
                .attributes
                .into_iter()
                .map(|attr| ItemAttribute {
                    id: attr.id,
                    name: attr.name,
                    position: attr.position,
                    visible: attr.visible,
                    variation: attr.variation,
                    options: attr.options,
                })
                .collect(),
            default_attributes: api
                .default_attributes
                .into_iter()
                .map(|attr| DefaultAttribute {
                    id: attr.id,
                    name: attr.name,
                    option: attr.option,
                })
                .collect(),
            meta_data: api
                .meta_data
                .into_iter()
                .map(|meta| MetaEntry {
                    id: meta.id,
                    key: meta.key,
                    value: meta.value,
                })
                .collect(),
        })
    }
}

impl From<ApiTerm> for TermRef {
    fn from(term: ApiTerm) -> Self {
        Self {
            id: term.id,
            name: term.name,
            slug: term.slug,
        }
    }
}
