//! JSON-RPC 2.0 envelope types and the transport-independent tool protocol.
//!
//! [`ToolGateway`] owns the registry and dispatcher. The HTTP gateway and the
//! stdio server each wrap it in their own framing.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::domain::models::ToolCallEnvelope;
use crate::services::{DispatchError, ToolDispatcher, ToolOutput};

use super::tool_registry::ToolRegistry;

pub const JSONRPC_VERSION: &str = "2.0";

/// JSON-RPC error codes used by this gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    ParseError = -32700,
    MethodNotFound = -32601,
    InvalidParams = -32602,
    InternalError = -32603,
}

impl ErrorCode {
    pub fn code(&self) -> i32 {
        *self as i32
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::ParseError => "Parse error",
            Self::MethodNotFound => "Method not found",
            Self::InvalidParams => "Invalid params",
            Self::InternalError => "Tool execution failed",
        }
    }
}

/// JSON-RPC 2.0 request.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(default)]
    pub jsonrpc: Option<String>,
    /// `None` only when the member is absent; `"id": null` is `Some(Value::Null)`.
    #[serde(default, deserialize_with = "present_id")]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Value,
}

impl JsonRpcRequest {
    /// Requests without an `id` member expect no answer.
    pub fn is_notification(&self) -> bool {
        self.id.is_none()
    }
}

fn present_id<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// JSON-RPC 2.0 response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: id.unwrap_or(Value::Null),
            result: Some(result),
            error: None,
        }
    }

    pub fn error(id: Option<Value>, code: ErrorCode, data: Option<Value>) -> Self {
        Self::error_with_message(id, code, code.message(), data)
    }

    pub fn error_with_message(
        id: Option<Value>,
        code: ErrorCode,
        message: impl Into<String>,
        data: Option<Value>,
    ) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: id.unwrap_or(Value::Null),
            result: None,
            error: Some(JsonRpcError {
                code: code.code(),
                message: message.into(),
                data,
            }),
        }
    }
}

/// JSON-RPC 2.0 error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Why a `tools/call` did not produce output, independent of wire format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallFailure {
    /// Params were not `{name: string, arguments?: object}`.
    InvalidParams(String),
    UnknownTool(String),
    /// Validation, platform or conversion failure, already rendered for display.
    Tool(String),
}

impl CallFailure {
    /// Text shown to callers that only get a message and an error flag.
    pub fn display_text(&self) -> String {
        match self {
            Self::InvalidParams(detail) => format!("Invalid request format: {detail}"),
            Self::UnknownTool(name) => format!("Unknown tool: {name}"),
            Self::Tool(message) => format!("Error: {message}"),
        }
    }

    /// JSON-RPC error used by the HTTP transport.
    pub fn into_response(self, id: Option<Value>) -> JsonRpcResponse {
        match self {
            Self::InvalidParams(detail) => {
                JsonRpcResponse::error(id, ErrorCode::InvalidParams, Some(Value::String(detail)))
            }
            Self::UnknownTool(name) => JsonRpcResponse::error_with_message(
                id,
                ErrorCode::MethodNotFound,
                "Unknown tool",
                Some(Value::String(format!("Tool '{name}' not found"))),
            ),
            Self::Tool(message) => {
                JsonRpcResponse::error(id, ErrorCode::InternalError, Some(Value::String(message)))
            }
        }
    }
}

/// MCP `content` array holding a single text block.
pub fn text_content(text: impl Into<String>) -> Value {
    json!([{ "type": "text", "text": text.into() }])
}

/// Registry plus dispatcher: everything a transport needs to answer tool calls.
#[derive(Clone)]
pub struct ToolGateway {
    registry: Arc<ToolRegistry>,
    dispatcher: Arc<ToolDispatcher>,
}

impl ToolGateway {
    pub fn new(registry: Arc<ToolRegistry>, dispatcher: Arc<ToolDispatcher>) -> Self {
        Self {
            registry,
            dispatcher,
        }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// `{tools: [...]}`
    pub fn list_tools(&self) -> Value {
        json!({ "tools": self.registry.list_json() })
    }

    /// Decode `{name, arguments}` params, then run the named tool.
    pub async fn call_tool(&self, params: Value) -> Result<ToolOutput, CallFailure> {
        let envelope = ToolCallEnvelope::from_value(params).map_err(CallFailure::InvalidParams)?;
        self.call_envelope(envelope).await
    }

    pub async fn call_envelope(&self, envelope: ToolCallEnvelope) -> Result<ToolOutput, CallFailure> {
        self.dispatcher
            .dispatch(envelope)
            .await
            .map_err(|err| match err {
                DispatchError::UnknownTool(name) => CallFailure::UnknownTool(name),
                DispatchError::Failed(err) => CallFailure::Tool(err.to_string()),
            })
    }

    /// Answer one JSON-RPC request the way the HTTP endpoint does: tool failures
    /// become error objects rather than flagged results.
    pub async fn handle_request(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        let id = request.id;
        match request.method.as_str() {
            "tools/list" => JsonRpcResponse::success(id, self.list_tools()),
            "tools/call" => match self.call_tool(request.params).await {
                Ok(output) => {
                    JsonRpcResponse::success(id, json!({ "content": text_content(output.to_text()) }))
                }
                Err(failure) => failure.into_response(id),
            },
            other => JsonRpcResponse::error(
                id,
                ErrorCode::MethodNotFound,
                Some(Value::String(format!("Unknown method: {other}"))),
            ),
        }
    }

    /// Parse and answer a raw JSON-RPC body.
    pub async fn handle_body(&self, body: &[u8]) -> JsonRpcResponse {
        let value: Value = match serde_json::from_slice(body) {
            Ok(value) => value,
            Err(err) => {
                return JsonRpcResponse::error(
                    None,
                    ErrorCode::ParseError,
                    Some(Value::String(err.to_string())),
                );
            }
        };

        let id = value.get("id").cloned();
        match serde_json::from_value::<JsonRpcRequest>(value) {
            Ok(request) => self.handle_request(request).await,
            Err(err) => {
                JsonRpcResponse::error(id, ErrorCode::ParseError, Some(Value::String(err.to_string())))
            }
        }
    }
}
