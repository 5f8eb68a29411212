//! Infrastructure layer module
//!
//! Concrete adapters behind the domain ports: the WooCommerce and WordPress
//! HTTP repositories, configuration loading and logging.

pub mod config;
pub mod logging;
pub mod platform;
pub mod provider;
pub mod woocommerce;
pub mod wordpress;

pub use provider::HttpRepositoryProvider;
