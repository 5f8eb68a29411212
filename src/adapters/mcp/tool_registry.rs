//! Tool metadata shared by every transport.
//!
//! The registry is built once at startup and never mutated; transports only read it.

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::domain::models::{
    CatalogOrderBy, CatalogStatus, CatalogType, PostOrderBy, PostStatus, SortOrder, StockStatus,
};
use crate::services::{ToolName, SEARCH_POSTS, SEARCH_PRODUCTS};

/// Name, version and blurb this gateway reports about itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerIdentity {
    pub name: String,
    pub version: String,
    pub description: String,
}

impl Default for ServerIdentity {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: "Product and blog post search tools for WooCommerce stores and WordPress sites"
                .to_string(),
        }
    }
}

/// One accepted argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolParameter {
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
    /// Closed value set, advertised as a JSON-schema `enum`.
    pub choices: Vec<&'static str>,
}

impl ToolParameter {
    fn optional(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            description,
            required: false,
            choices: Vec::new(),
        }
    }

    fn required(name: &'static str, description: &'static str) -> Self {
        Self {
            required: true,
            ..Self::optional(name, description)
        }
    }

    fn one_of(name: &'static str, description: &'static str, choices: Vec<&'static str>) -> Self {
        Self {
            choices,
            ..Self::optional(name, description)
        }
    }

    fn schema(&self) -> Value {
        let mut property = json!({
            "type": "string",
            "description": self.description,
        });
        if !self.choices.is_empty() {
            property["enum"] = json!(self.choices);
        }
        property
    }
}

/// A registered tool as listed to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolDescriptor {
    pub tool: ToolName,
    pub description: &'static str,
    pub parameters: Vec<ToolParameter>,
}

impl ToolDescriptor {
    pub fn name(&self) -> &'static str {
        self.tool.as_str()
    }

    pub fn required_parameters(&self) -> Vec<&'static str> {
        self.parameters
            .iter()
            .filter(|parameter| parameter.required)
            .map(|parameter| parameter.name)
            .collect()
    }

    /// JSON schema for the tool's argument object.
    pub fn input_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .parameters
            .iter()
            .map(|parameter| (parameter.name.to_string(), parameter.schema()))
            .collect();
        json!({
            "type": "object",
            "properties": properties,
            "required": self.required_parameters(),
        })
    }

    /// `{name, description, inputSchema}` as sent by `tools/list` and `/list_tools`.
    pub fn to_json(&self) -> Value {
        json!({
            "name": self.name(),
            "description": self.description,
            "inputSchema": self.input_schema(),
        })
    }
}

fn pagination_parameters() -> [ToolParameter; 2] {
    [
        ToolParameter::optional("per_page", "Items per page (1-100, default 10)"),
        ToolParameter::optional("page", "Page number (default 1)"),
    ]
}

fn catalog_descriptor() -> ToolDescriptor {
    let mut parameters = vec![
        ToolParameter::required("base_url", "WooCommerce store base URL"),
        ToolParameter::required("consumer_key", "WooCommerce REST API consumer key"),
        ToolParameter::required("consumer_secret", "WooCommerce REST API consumer secret"),
        ToolParameter::optional("search", "Search term to filter products"),
        ToolParameter::optional("category", "Category filter"),
        ToolParameter::optional("tag", "Tag filter"),
        ToolParameter::one_of("status", "Product status filter", CatalogStatus::wire_values()),
        ToolParameter::one_of("type", "Product type filter", CatalogType::wire_values()),
        ToolParameter::one_of("featured", "Featured products filter", vec!["true", "false"]),
        ToolParameter::one_of("on_sale", "On sale products filter", vec!["true", "false"]),
        ToolParameter::optional("min_price", "Minimum price filter"),
        ToolParameter::optional("max_price", "Maximum price filter"),
        ToolParameter::one_of("stock_status", "Stock status filter", StockStatus::wire_values()),
    ];
    parameters.extend(pagination_parameters());
    parameters.push(ToolParameter::one_of("order", "Sort order", SortOrder::wire_values()));
    parameters.push(ToolParameter::one_of("orderby", "Sort field", CatalogOrderBy::wire_values()));

    ToolDescriptor {
        tool: ToolName::SearchProducts,
        description: "Search for products in WooCommerce store. Supports various filters like search terms, categories, tags, status, and more.",
        parameters,
    }
}

fn content_descriptor() -> ToolDescriptor {
    let mut parameters = vec![
        ToolParameter::required("base_url", "WordPress site base URL"),
        ToolParameter::optional("search", "Search term to filter posts"),
        ToolParameter::one_of("status", "Post status filter", PostStatus::wire_values()),
        ToolParameter::optional("author", "Author ID filter"),
        ToolParameter::optional("categories", "Comma-separated category IDs"),
        ToolParameter::optional("tags", "Comma-separated tag IDs"),
        ToolParameter::optional("before", "Posts published before date (ISO 8601)"),
        ToolParameter::optional("after", "Posts published after date (ISO 8601)"),
    ];
    parameters.extend(pagination_parameters());
    parameters.push(ToolParameter::one_of("order", "Sort order", SortOrder::wire_values()));
    parameters.push(ToolParameter::one_of("orderby", "Sort field", PostOrderBy::wire_values()));

    ToolDescriptor {
        tool: ToolName::SearchPosts,
        description: "Search for blog posts in WordPress sites. Supports various filters like search terms, categories, tags, author, status, and more.",
        parameters,
    }
}

/// Immutable set of tools offered by this gateway.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    identity: ServerIdentity,
    tools: Vec<ToolDescriptor>,
}

impl ToolRegistry {
    /// The catalog and content search tools.
    pub fn standard() -> Self {
        Self::with_identity(ServerIdentity::default())
    }

    pub fn with_identity(identity: ServerIdentity) -> Self {
        Self {
            identity,
            tools: vec![catalog_descriptor(), content_descriptor()],
        }
    }

    pub fn identity(&self) -> &ServerIdentity {
        &self.identity
    }

    pub fn tools(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    pub fn get(&self, name: &str) -> Option<&ToolDescriptor> {
        self.tools.iter().find(|descriptor| descriptor.name() == name)
    }

    /// Tool descriptors as a JSON array.
    pub fn list_json(&self) -> Value {
        Value::Array(self.tools.iter().map(ToolDescriptor::to_json).collect())
    }

    /// Capability descriptor served at `/manifest.json`.
    pub fn manifest(&self) -> Value {
        json!({
            "name": self.identity.name,
            "version": self.identity.version,
            "description": self.identity.description,
            "capabilities": { "tools": {} },
            "transports": ["stdio", "http+sse"],
            "tools": self.list_json(),
        })
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
