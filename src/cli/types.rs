//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "storefront-gateway")]
#[command(about = "Search tools for WooCommerce products and WordPress posts", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Read configuration from this YAML file instead of .storefront-gateway/
    #[arg(short, long, global = true, env = "STOREFRONT_GATEWAY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP gateway (JSON-RPC over SSE plus legacy REST)
    Serve(ServeArgs),

    /// Run the MCP tool server on stdin/stdout
    Stdio,

    /// List the registered tools
    Tools,

    /// Invoke a tool once and print its result
    Call(CallArgs),

    /// Print the effective configuration
    Config,
}

#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Interface to bind (overrides server.host)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides server.port)
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[derive(Args, Debug)]
pub struct CallArgs {
    /// Tool name (search_products or search_posts)
    pub tool: String,

    /// Tool argument as key=value; repeat for several
    #[arg(short, long = "arg", value_name = "KEY=VALUE")]
    pub args: Vec<String>,

    /// Tool arguments as a JSON object, merged before --arg values
    #[arg(long, value_name = "JSON")]
    pub args_json: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_call_with_args() {
        let cli = Cli::parse_from([
            "storefront-gateway",
            "call",
            "search_posts",
            "--arg",
            "base_url=https://blog.test",
            "-a",
            "per_page=5",
            "--json",
        ]);
        assert!(cli.json);
        match cli.command {
            Commands::Call(args) => {
                assert_eq!(args.tool, "search_posts");
                assert_eq!(args.args, vec!["base_url=https://blog.test", "per_page=5"]);
            }
            other => panic!("expected call, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::parse_from(["storefront-gateway", "serve", "--port", "9090"]);
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.port, Some(9090));
                assert!(args.host.is_none());
            }
            other => panic!("expected serve, got {other:?}"),
        }
    }
}
