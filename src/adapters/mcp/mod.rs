//! Tool protocol transports.
//!
//! - `stdio_server`: MCP over stdin/stdout
//! - `http_gateway`: JSON-RPC with single-event SSE replies, plus legacy REST
//!
//! Both share one [`ToolGateway`] built over the same [`ToolRegistry`].

pub mod http_gateway;
pub mod jsonrpc;
pub mod stdio_server;
pub mod tool_registry;

pub use http_gateway::{HttpGateway, LegacyContent, LegacyToolResult};
pub use jsonrpc::{CallFailure, ErrorCode, JsonRpcError, JsonRpcRequest, JsonRpcResponse, ToolGateway};
pub use stdio_server::StdioServer;
pub use tool_registry::{ServerIdentity, ToolDescriptor, ToolParameter, ToolRegistry};
