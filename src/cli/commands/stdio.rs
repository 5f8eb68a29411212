use anyhow::Result;

use crate::adapters::mcp::StdioServer;
use crate::domain::models::Config;

/// Serve MCP over stdin/stdout until stdin closes.
pub async fn execute(config: Config) -> Result<()> {
    StdioServer::new(super::build_gateway(&config)).run().await
}
