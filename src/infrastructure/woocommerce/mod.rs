//! WooCommerce catalog adapter.

pub mod repository;
pub mod types;

pub use repository::WooCommerceRepository;
