use reqwest::header::HeaderMap;
use reqwest::{Client as ReqwestClient, Response, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::error::Error as _;
use tracing::{debug, warn};

use crate::domain::errors::{ConversionError, GatewayError, GatewayResult, Platform};
use crate::domain::models::UpstreamConfig;
use crate::infrastructure::logging::redaction::redact_url;

/// Total-count headers, most specific first.
pub const TOTAL_COUNT_HEADERS: [&str; 2] = ["x-wp-total", "x-total-count"];

/// Page size of the fallback request used when no total-count header is sent.
pub const FALLBACK_COUNT_PAGE_SIZE: u32 = 100;

/// Build `{base_url}{path}` with any trailing slash on the base removed.
pub fn endpoint_url(base_url: &str, path: &str) -> GatewayResult<Url> {
    let endpoint = format!("{}{}", base_url.trim().trim_end_matches('/'), path);
    let url = Url::parse(&endpoint)
        .map_err(|err| GatewayError::connection(endpoint.clone(), format!("invalid base URL: {err}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(GatewayError::connection(
            endpoint,
            format!("invalid base URL: unsupported scheme '{other}'"),
        )),
    }
}

/// Platform identifier of a raw item, as sent, for error reports.
pub fn external_id(item: &Value) -> String {
    match item.get("id") {
        Some(Value::Number(id)) => id.to_string(),
        Some(Value::String(id)) if !id.trim().is_empty() => id.clone(),
        _ => "unknown".to_string(),
    }
}

/// Decode one raw item into its payload type, then map it into the entity.
///
/// Any failure names the item by its platform identifier.
pub fn convert_item<Payload, Entity>(resource: &'static str, item: Value) -> GatewayResult<Entity>
where
    Payload: DeserializeOwned,
    Entity: TryFrom<Payload, Error = ConversionError>,
{
    let item_id = external_id(&item);
    serde_json::from_value::<Payload>(item)
        .map_err(|err| ConversionError::new(err.to_string()))
        .and_then(<Entity as TryFrom<Payload>>::try_from)
        .map_err(|err| GatewayError::item_conversion(resource, item_id, err))
}

/// Structured error body both platforms use: `{code, message, data}`.
#[derive(Debug, Default, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// One-shot HTTP access to a single platform, built per tool call.
#[derive(Debug, Clone)]
pub struct PlatformClient {
    http: ReqwestClient,
    platform: Platform,
}

impl PlatformClient {
    pub fn new(platform: Platform, upstream: &UpstreamConfig) -> GatewayResult<Self> {
        let http = ReqwestClient::builder()
            .timeout(upstream.timeout())
            .user_agent(upstream.user_agent.as_str())
            .build()
            .map_err(|err| GatewayError::Internal(format!("failed to build HTTP client: {err}")))?;
        Ok(Self { http, platform })
    }

    pub const fn platform(&self) -> Platform {
        self.platform
    }

    /// GET `url` and decode a JSON body. Non-2xx answers become `ExternalApi` errors.
    pub async fn get_json<T: DeserializeOwned>(&self, url: Url) -> GatewayResult<T> {
        debug!(platform = %self.platform, url = %redact_url(&url), "GET");
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|err| transport_error(&url, err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.api_error(response).await);
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|err| transport_error(&url, err))?;
        serde_json::from_slice(&bytes).map_err(|err| GatewayError::ExternalApi {
            platform: self.platform,
            status: status.as_u16(),
            code: None,
            message: format!("invalid JSON response: {err}"),
        })
    }

    /// HEAD `url` and return the response headers.
    pub async fn head(&self, url: Url) -> GatewayResult<HeaderMap> {
        debug!(platform = %self.platform, url = %redact_url(&url), "HEAD");
        let response = self
            .http
            .head(url.clone())
            .send()
            .await
            .map_err(|err| transport_error(&url, err))?;

        if !response.status().is_success() {
            return Err(self.api_error(response).await);
        }
        Ok(response.headers().clone())
    }

    /// Count matching items.
    ///
    /// Issues a HEAD for `head_url` and reads the total-count header. Without the
    /// header, GETs `fallback_url` (a single capped page) and counts what came back,
    /// which under-reports totals larger than the cap.
    pub async fn count(&self, head_url: Url, fallback_url: Url) -> GatewayResult<u64> {
        let headers = self.head(head_url).await?;
        if let Some(total) = total_from_headers(&headers) {
            return Ok(total);
        }

        warn!(
            platform = %self.platform,
            cap = FALLBACK_COUNT_PAGE_SIZE,
            "total-count header missing; counting a capped page instead"
        );
        let page: Vec<Value> = self.get_json(fallback_url).await?;
        Ok(page.len() as u64)
    }

    async fn api_error(&self, response: Response) -> GatewayError {
        let status = response.status();
        let fallback = status
            .canonical_reason()
            .unwrap_or("Unknown Status")
            .to_string();
        let body = response.text().await.unwrap_or_default();

        let parsed = if body.trim().is_empty() {
            ApiErrorBody::default()
        } else {
            serde_json::from_str::<ApiErrorBody>(&body).unwrap_or_default()
        };
        let message = parsed
            .message
            .filter(|message| !message.trim().is_empty())
            .unwrap_or(fallback);
        let code = parsed.code.filter(|code| !code.trim().is_empty());

        warn!(platform = %self.platform, status = status.as_u16(), code = ?code, "platform returned an error");
        GatewayError::ExternalApi {
            platform: self.platform,
            status: status.as_u16(),
            code,
            message,
        }
    }
}

/// First parseable total-count header, if any.
pub fn total_from_headers(headers: &HeaderMap) -> Option<u64> {
    TOTAL_COUNT_HEADERS.iter().find_map(|name| {
        headers
            .get(*name)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u64>().ok())
    })
}

fn transport_error(url: &Url, err: reqwest::Error) -> GatewayError {
    let detail = if err.is_timeout() {
        "request timed out".to_string()
    } else {
        let err = err.without_url();
        let mut detail = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            detail.push_str(": ");
            detail.push_str(&cause.to_string());
            source = cause.source();
        }
        detail
    };
    GatewayError::connection(redact_url(url), format!("HTTP request failed: {detail}"))
}
