use anyhow::Result;

use crate::adapters::mcp::HttpGateway;
use crate::cli::types::ServeArgs;
use crate::domain::models::Config;
use crate::infrastructure::config::ConfigLoader;

/// Run the HTTP gateway until Ctrl-C.
pub async fn execute(args: ServeArgs, mut config: Config) -> Result<()> {
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    ConfigLoader::validate(&config)?;

    let gateway = HttpGateway::new(config.server.clone(), super::build_gateway(&config));
    gateway.serve().await
}
