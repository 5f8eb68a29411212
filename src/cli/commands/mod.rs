//! CLI command implementations.

pub mod call;
pub mod config;
pub mod serve;
pub mod stdio;
pub mod tools;

use std::sync::Arc;

use crate::adapters::mcp::{ToolGateway, ToolRegistry};
use crate::domain::models::Config;
use crate::infrastructure::HttpRepositoryProvider;
use crate::services::ToolDispatcher;

/// Registry and dispatcher wired to the real platform repositories.
pub fn build_gateway(config: &Config) -> ToolGateway {
    let provider = Arc::new(HttpRepositoryProvider::new(config.upstream.clone()));
    ToolGateway::new(
        Arc::new(ToolRegistry::standard()),
        Arc::new(ToolDispatcher::new(provider)),
    )
}
