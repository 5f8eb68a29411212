//! HTTP plumbing shared by the WooCommerce and WordPress repositories.

pub mod client;

pub use client::{
    convert_item, endpoint_url, external_id, PlatformClient, FALLBACK_COUNT_PAGE_SIZE,
    TOTAL_COUNT_HEADERS,
};
