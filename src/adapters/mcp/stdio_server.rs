//! MCP stdio server: newline-delimited JSON-RPC 2.0 on stdin/stdout.
//!
//! Logging goes to stderr (stdout is reserved for protocol messages). Tool failures
//! come back as results flagged `isError` so the calling model can read them.

use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use super::jsonrpc::{
    text_content, CallFailure, ErrorCode, JsonRpcRequest, JsonRpcResponse, ToolGateway,
};

/// MCP revision announced during `initialize`.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

pub struct StdioServer {
    gateway: ToolGateway,
}

impl StdioServer {
    pub fn new(gateway: ToolGateway) -> Self {
        Self { gateway }
    }

    /// Serve the process's stdin/stdout until stdin closes.
    pub async fn run(&self) -> anyhow::Result<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.run_with(stdin, stdout).await
    }

    /// Serve any line-oriented reader/writer pair until the reader hits EOF.
    pub async fn run_with<R, W>(&self, reader: R, mut writer: W) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();
        tracing::info!(
            tools = self.gateway.registry().tools().len(),
            "stdio server started"
        );

        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(response) = self.handle_message(line).await {
                let mut bytes = serde_json::to_vec(&response)?;
                bytes.push(b'\n');
                writer.write_all(&bytes).await?;
                writer.flush().await?;
            }
        }

        tracing::info!("stdio server stopped");
        Ok(())
    }

    /// Answer one protocol line. Notifications produce no response.
    pub async fn handle_message(&self, line: &str) -> Option<JsonRpcResponse> {
        let value: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(err) => {
                return Some(JsonRpcResponse::error(
                    None,
                    ErrorCode::ParseError,
                    Some(Value::String(err.to_string())),
                ));
            }
        };

        let id = value.get("id").cloned();
        let request: JsonRpcRequest = match serde_json::from_value(value) {
            Ok(request) => request,
            Err(err) => {
                return Some(JsonRpcResponse::error(
                    id,
                    ErrorCode::ParseError,
                    Some(Value::String(err.to_string())),
                ));
            }
        };

        if request.is_notification() {
            tracing::debug!(method = %request.method, "notification received");
            return None;
        }

        let id = request.id;
        let response = match request.method.as_str() {
            "initialize" => JsonRpcResponse::success(id, self.initialize_result()),
            "ping" => JsonRpcResponse::success(id, json!({})),
            "tools/list" => JsonRpcResponse::success(id, self.gateway.list_tools()),
            "tools/call" => self.call_tool(id, request.params).await,
            other => JsonRpcResponse::error(
                id,
                ErrorCode::MethodNotFound,
                Some(Value::String(format!("Unknown method: {other}"))),
            ),
        };
        Some(response)
    }

    fn initialize_result(&self) -> Value {
        let identity = self.gateway.registry().identity();
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": { "tools": {} },
            "serverInfo": {
                "name": identity.name,
                "version": identity.version,
            },
            "instructions": identity.description,
        })
    }

    async fn call_tool(&self, id: Option<Value>, params: Value) -> JsonRpcResponse {
        match self.gateway.call_tool(params).await {
            Ok(output) => JsonRpcResponse::success(
                id,
                json!({ "content": text_content(output.to_text()), "isError": false }),
            ),
            Err(CallFailure::InvalidParams(detail)) => JsonRpcResponse::error(
                id,
                ErrorCode::InvalidParams,
                Some(Value::String(detail)),
            ),
            Err(CallFailure::UnknownTool(name)) => JsonRpcResponse::error_with_message(
                id,
                ErrorCode::InvalidParams,
                format!("Unknown tool: {name}"),
                None,
            ),
            Err(failure @ CallFailure::Tool(_)) => JsonRpcResponse::success(
                id,
                json!({ "content": text_content(failure.display_text()), "isError": true }),
            ),
        }
    }
}
