//! Domain layer for the storefront gateway
//!
//! Criteria, entities, the result envelope and the repository ports. Nothing here
//! performs I/O.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{ConversionError, GatewayError, GatewayResult, Platform, ValidationError};
