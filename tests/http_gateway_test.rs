//! End-to-end checks of the HTTP and stdio transports.

#![recursion_limit = "256"]

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use mockito::Matcher;
use serde_json::{json, Value};
use storefront_gateway::adapters::mcp::{HttpGateway, StdioServer};
use storefront_gateway::domain::models::ServerConfig;
use tower::ServiceExt;

use common::{http_gateway, product_json, PRODUCTS_PATH};

fn router() -> Router {
    HttpGateway::new(ServerConfig::default(), http_gateway()).router()
}

async fn send(request: Request<Body>) -> (StatusCode, String) {
    let response = router().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let (status, body) = send(Request::get(uri).body(Body::empty()).unwrap()).await;
    (status, serde_json::from_str(&body).unwrap())
}

async fn post(uri: &str, body: impl Into<String>) -> (StatusCode, String) {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.into()))
        .unwrap();
    send(request).await
}

/// Decode the single `data:` frame of an SSE body.
fn sse_payload(body: &str) -> Value {
    let data = body
        .lines()
        .find_map(|line| line.strip_prefix("data:"))
        .expect("data frame");
    serde_json::from_str(data.trim_start()).unwrap()
}

async fn rpc(body: impl Into<String>) -> Value {
    let (status, text) = post("/", body).await;
    assert_eq!(status, StatusCode::OK);
    sse_payload(&text)
}

fn credentials(base_url: &str) -> Value {
    json!({
        "base_url": base_url,
        "consumer_key": "ck_test",
        "consumer_secret": "cs_test",
    })
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "storefront-gateway");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_manifest_endpoints() {
    let (_, manifest) = get("/manifest.json").await;
    assert_eq!(manifest["tools"].as_array().unwrap().len(), 2);

    let (_, info) = get("/manifest").await;
    assert_eq!(info["endpoints"]["jsonrpc"], "POST /");
}

#[tokio::test]
async fn test_legacy_list_tools_is_plain_array() {
    let (status, body) = get("/list_tools").await;
    assert_eq!(status, StatusCode::OK);
    let tools = body.as_array().expect("array");
    assert_eq!(tools[0]["name"], "search_products");
    assert_eq!(tools[1]["inputSchema"]["required"], json!(["base_url"]));
}

#[tokio::test]
async fn test_jsonrpc_tools_list() {
    let response = rpc(r#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#).await;
    assert_eq!(response["id"], 1);
    assert_eq!(response["result"]["tools"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_jsonrpc_error_codes() {
    let parse = rpc("{oops").await;
    assert_eq!(parse["error"]["code"], -32700);

    let method = rpc(r#"{"jsonrpc":"2.0","id":2,"method":"prompts/list"}"#).await;
    assert_eq!(method["error"]["code"], -32601);

    let tool = rpc(r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"search_users"}}"#).await;
    assert_eq!(tool["error"]["code"], -32601);
    assert!(tool["error"]["data"].as_str().unwrap().contains("search_users"));

    let params = rpc(r#"{"jsonrpc":"2.0","id":4,"method":"tools/call","params":[1,2]}"#).await;
    assert_eq!(params["error"]["code"], -32602);

    let failed = rpc(
        r#"{"jsonrpc":"2.0","id":5,"method":"tools/call","params":{"name":"search_products","arguments":{"consumer_key":"k","consumer_secret":"s"}}}"#,
    )
    .await;
    assert_eq!(failed["error"]["code"], -32603);
    assert!(failed["error"]["data"].as_str().unwrap().contains("base_url"));
}

#[tokio::test]
async fn test_legacy_call_tool_malformed_body() {
    let (status, body) = post("/call_tool", "not json").await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["isError"], true);
    assert!(body["content"][0]["text"]
        .as_str()
        .unwrap()
        .starts_with("Invalid request format"));
}

#[tokio::test]
async fn test_legacy_call_tool_page_validation() {
    let mut arguments = credentials("https://shop.test");
    arguments["page"] = json!("abc");
    let (status, body) = post(
        "/call_tool",
        json!({"name": "search_products", "arguments": arguments}).to_string(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["isError"], true);
    assert!(body["content"][0]["text"].as_str().unwrap().contains("'page'"));
}

#[tokio::test]
async fn test_pink_search_through_every_transport() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", PRODUCTS_PATH)
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("search".into(), "pink".into()),
            Matcher::UrlEncoded("status".into(), "publish".into()),
            Matcher::UrlEncoded("per_page".into(), "10".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([
                product_json(1, "Pink Socks"),
                product_json(2, "Pink Scarf"),
                product_json(3, "Pink Hat")
            ])
            .to_string(),
        )
        .expect(3)
        .create_async()
        .await;
    server
        .mock("HEAD", PRODUCTS_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("X-Total-Count", "3")
        .expect(3)
        .create_async()
        .await;

    let mut arguments = credentials(&server.url());
    arguments["search"] = json!("pink");
    arguments["per_page"] = json!("10");
    arguments["status"] = json!("publish");
    let params = json!({"name": "search_products", "arguments": arguments});

    // JSON-RPC over SSE
    let response = rpc(json!({"jsonrpc": "2.0", "id": 9, "method": "tools/call", "params": params}).to_string()).await;
    let text = response["result"]["content"][0]["text"].as_str().unwrap();
    assert!(text.starts_with("Found 3 product(s) (page 1 of 1)\n\n"));
    let (_, document) = text.split_once("\n\n").unwrap();
    let document: Value = serde_json::from_str(document).unwrap();
    assert_eq!(document["total_count"], 3);
    assert_eq!(document["total_pages"], 1);
    assert_eq!(document["has_next"], false);
    assert_eq!(document["has_prev"], false);
    assert_eq!(document["products"].as_array().unwrap().len(), 3);
    assert_eq!(document["products"][0]["price"], "19.90");
    assert_eq!(document["products"][0]["date_created"], "2024-03-01T09:30:00");

    // Legacy REST
    let (_, body) = post("/call_tool", params.to_string()).await;
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["isError"], false);
    assert!(body["content"][0]["text"].as_str().unwrap().contains("\"total_count\": 3"));

    // stdio
    let stdio = StdioServer::new(http_gateway());
    let line = json!({"jsonrpc": "2.0", "id": 10, "method": "tools/call", "params": params}).to_string();
    let response = stdio.handle_message(&line).await.unwrap();
    let result = response.result.unwrap();
    assert_eq!(result["isError"], false);
}

#[tokio::test]
async fn test_platform_rejection_through_every_transport() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", PRODUCTS_PATH)
        .match_query(Matcher::Any)
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "code": "woocommerce_rest_cannot_view",
                "message": "Sorry, you cannot view this resource.",
                "data": {"status": 401}
            })
            .to_string(),
        )
        .create_async()
        .await;

    let params = json!({"name": "search_products", "arguments": credentials(&server.url())});
    let expected = "status 401, code woocommerce_rest_cannot_view): Sorry, you cannot view this resource.";

    let response = rpc(json!({"jsonrpc": "2.0", "id": 1, "method": "tools/call", "params": params}).to_string()).await;
    assert_eq!(response["error"]["code"], -32603);
    let data = response["error"]["data"].as_str().unwrap();
    assert!(data.contains(expected), "{data}");
    assert!(!data.contains("cs_test"));

    let (status, body) = post("/call_tool", params.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["isError"], true);
    assert!(body["content"][0]["text"].as_str().unwrap().contains(expected));

    let stdio = StdioServer::new(http_gateway());
    let line = json!({"jsonrpc": "2.0", "id": 2, "method": "tools/call", "params": params}).to_string();
    let result = stdio.handle_message(&line).await.unwrap().result.unwrap();
    assert_eq!(result["isError"], true);
    assert!(result["content"][0]["text"].as_str().unwrap().contains(expected));
}

#[tokio::test]
async fn test_empty_post_search_is_success() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", common::POSTS_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;
    server
        .mock("HEAD", common::POSTS_PATH)
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("X-WP-Total", "0")
        .create_async()
        .await;

    let params = json!({"name": "search_posts", "arguments": {"base_url": server.url()}});
    let (_, body) = post("/call_tool", params.to_string()).await;
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["isError"], false);
    let text = body["content"][0]["text"].as_str().unwrap();
    assert!(text.starts_with("No posts found matching the search criteria."));
    assert!(text.contains("\"total_pages\": 1"));
}
