//! storefront-gateway - product and post search tools for AI assistants
//!
//! Exposes two read-only tools, `search_products` (WooCommerce) and
//! `search_posts` (WordPress), over three transports: MCP on stdio, JSON-RPC
//! answered as server-sent events, and a legacy REST pair.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): errors, criteria, entities and repository ports
//! - **Service Layer** (`services`): argument validation, search and result assembly
//! - **Infrastructure Layer** (`infrastructure`): platform HTTP clients, config, logging
//! - **Adapters** (`adapters`): the tool protocol transports
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use storefront_gateway::adapters::mcp::{ToolGateway, ToolRegistry};
//! use storefront_gateway::infrastructure::HttpRepositoryProvider;
//! use storefront_gateway::services::ToolDispatcher;
//!
//! let gateway = ToolGateway::new(
//!     Arc::new(ToolRegistry::standard()),
//!     Arc::new(ToolDispatcher::new(Arc::new(HttpRepositoryProvider::default()))),
//! );
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use adapters::mcp::{HttpGateway, StdioServer, ToolGateway, ToolRegistry};
pub use domain::errors::{GatewayError, GatewayResult, ValidationError};
pub use domain::models::{Config, LoggingConfig, ToolCallEnvelope};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use infrastructure::HttpRepositoryProvider;
pub use services::{ToolDispatcher, ToolOutput};
