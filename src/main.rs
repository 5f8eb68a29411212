//! storefront-gateway CLI entry point.

use clap::Parser;

use storefront_gateway::cli::{commands, Cli, Commands};
use storefront_gateway::infrastructure::config::ConfigLoader;
use storefront_gateway::infrastructure::logging::LoggerImpl;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match ConfigLoader::load_with_override(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => storefront_gateway::cli::handle_error(err, cli.json),
    };

    // Keeps the file writer alive until exit
    let _logger = match LoggerImpl::init(&config.logging) {
        Ok(logger) => logger,
        Err(err) => storefront_gateway::cli::handle_error(err, cli.json),
    };

    let result = match cli.command {
        Commands::Serve(args) => commands::serve::execute(args, config).await,
        Commands::Stdio => commands::stdio::execute(config).await,
        Commands::Tools => commands::tools::execute(cli.json),
        Commands::Call(args) => commands::call::execute(args, config, cli.json).await,
        Commands::Config => commands::config::execute(&config, cli.json),
    };

    if let Err(err) = result {
        storefront_gateway::cli::handle_error(err, cli.json);
    }
}
