//! HTTP front end for the search tools.
//!
//! Serves JSON-RPC 2.0 on `POST /`, answered as a single server-sent event, next to
//! the legacy `GET /list_tools` and `POST /call_tool` endpoints, a health probe and
//! the capability manifest.

use axum::{
    body::Bytes,
    extract::State,
    response::{
        sse::{Event, Sse},
        Json,
    },
    routing::{get, post},
    Router,
};
use chrono::Utc;
use futures::stream::{self, Stream};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domain::models::ServerConfig;

use super::jsonrpc::{JsonRpcResponse, ToolGateway};

/// Body of a legacy `/call_tool` answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyToolResult {
    pub content: Vec<LegacyContent>,
    #[serde(rename = "isError")]
    pub is_error: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyContent {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}

impl LegacyToolResult {
    fn text(text: String, is_error: bool) -> Self {
        Self {
            content: vec![LegacyContent {
                kind: "text".to_string(),
                text,
            }],
            is_error,
        }
    }
}

/// HTTP gateway bound to one listener address.
pub struct HttpGateway {
    config: ServerConfig,
    gateway: Arc<ToolGateway>,
}

impl HttpGateway {
    pub fn new(config: ServerConfig, gateway: ToolGateway) -> Self {
        Self {
            config,
            gateway: Arc::new(gateway),
        }
    }

    /// Build the router. Public so tests can drive it without a socket.
    pub fn router(&self) -> Router {
        let app = Router::new()
            .route("/", post(handle_jsonrpc))
            .route("/health", get(health_check))
            .route("/list_tools", get(legacy_list_tools))
            .route("/call_tool", post(legacy_call_tool))
            .route("/manifest.json", get(manifest))
            .route("/manifest", get(server_info))
            .with_state(Arc::clone(&self.gateway));

        if self.config.enable_cors {
            app.layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
            .layer(TraceLayer::new_for_http())
        } else {
            app.layer(TraceLayer::new_for_http())
        }
    }

    fn address(&self) -> anyhow::Result<SocketAddr> {
        let raw = format!("{}:{}", self.config.host, self.config.port);
        raw.parse()
            .map_err(|err| anyhow::anyhow!("invalid listen address {raw}: {err}"))
    }

    /// Serve until Ctrl-C.
    pub async fn serve(self) -> anyhow::Result<()> {
        self.serve_with_shutdown(async {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("shutdown signal received");
            }
        })
        .await
    }

    /// Serve until `shutdown` resolves, letting in-flight requests finish.
    pub async fn serve_with_shutdown<F>(self, shutdown: F) -> anyhow::Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let addr = self.address()?;
        let router = self.router();

        let listener = TcpListener::bind(addr).await?;
        tracing::info!(
            %addr,
            tools = self.gateway.registry().tools().len(),
            "HTTP gateway listening"
        );
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;
        tracing::info!("HTTP gateway stopped");
        Ok(())
    }
}

// Handler functions

fn single_event(response: &JsonRpcResponse) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let data = serde_json::to_string(response).unwrap_or_else(|err| {
        json!({
            "jsonrpc": "2.0",
            "id": Value::Null,
            "error": {"code": -32603, "message": "Internal error", "data": err.to_string()},
        })
        .to_string()
    });
    Sse::new(stream::once(async move { Ok(Event::default().data(data)) }))
}

async fn handle_jsonrpc(
    State(gateway): State<Arc<ToolGateway>>,
    body: Bytes,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let response = gateway.handle_body(&body).await;
    if let Some(error) = &response.error {
        tracing::debug!(code = error.code, "JSON-RPC request answered with an error");
    }
    single_event(&response)
}

async fn health_check(State(gateway): State<Arc<ToolGateway>>) -> Json<Value> {
    let identity = gateway.registry().identity();
    Json(json!({
        "status": "ok",
        "service": identity.name,
        "version": identity.version,
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

async fn legacy_list_tools(State(gateway): State<Arc<ToolGateway>>) -> Json<Value> {
    Json(gateway.registry().list_json())
}

async fn legacy_call_tool(
    State(gateway): State<Arc<ToolGateway>>,
    body: Bytes,
) -> Json<LegacyToolResult> {
    let params: Value = match serde_json::from_slice(&body) {
        Ok(params) => params,
        Err(err) => {
            return Json(LegacyToolResult::text(
                format!("Invalid request format: {err}"),
                true,
            ));
        }
    };

    match gateway.call_tool(params).await {
        Ok(output) => Json(LegacyToolResult::text(output.to_text(), false)),
        Err(failure) => Json(LegacyToolResult::text(failure.display_text(), true)),
    }
}

async fn manifest(State(gateway): State<Arc<ToolGateway>>) -> Json<Value> {
    Json(gateway.registry().manifest())
}

async fn server_info(State(gateway): State<Arc<ToolGateway>>) -> Json<Value> {
    let identity = gateway.registry().identity();
    Json(json!({
        "name": identity.name,
        "version": identity.version,
        "description": identity.description,
        "endpoints": {
            "jsonrpc": "POST /",
            "health": "GET /health",
            "list_tools": "GET /list_tools",
            "call_tool": "POST /call_tool",
            "manifest": "GET /manifest.json",
        },
    }))
}
