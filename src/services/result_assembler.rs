//! Result assembler
//!
//! Wraps repository output in a [`SearchResult`] and renders it as the response
//! document every transport returns.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::errors::GatewayResult;
use crate::domain::models::{CatalogItem, ContentPost, Pagination, SearchResult};

/// Rendered outcome of a successful tool call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolOutput {
    /// Human-readable summary line.
    pub message: String,
    /// Full response document.
    pub data: Value,
}

impl ToolOutput {
    /// Summary, a blank line, then the pretty-printed document.
    pub fn to_text(&self) -> String {
        let body = serde_json::to_string_pretty(&self.data).unwrap_or_else(|_| self.data.to_string());
        format!("{}\n\n{}", self.message, body)
    }
}

pub struct ResultAssembler;

impl ResultAssembler {
    /// Build the envelope; navigation fields are derived from the inputs.
    pub fn assemble<T>(items: Vec<T>, total_count: u64, pagination: Pagination) -> SearchResult<T> {
        SearchResult::new(items, total_count, pagination)
    }

    pub fn render_catalog(result: &SearchResult<CatalogItem>) -> GatewayResult<ToolOutput> {
        let message = if result.is_empty() {
            "No products found matching the search criteria.".to_string()
        } else {
            format!(
                "Found {} product(s) (page {} of {})",
                result.len(),
                result.current_page(),
                result.total_pages()
            )
        };
        let data = document(result, "products")?;
        Ok(ToolOutput { message, data })
    }

    pub fn render_content(result: &SearchResult<ContentPost>) -> GatewayResult<ToolOutput> {
        let message = if result.is_empty() {
            "No posts found matching the search criteria.".to_string()
        } else {
            format!(
                "Found {} post(s) (page {} of {})",
                result.len(),
                result.current_page(),
                result.total_pages()
            )
        };
        let data = document(result, "posts")?;
        Ok(ToolOutput { message, data })
    }
}

/// Items under `items_key`, followed by the pagination fields.
fn document<T: Serialize>(result: &SearchResult<T>, items_key: &str) -> GatewayResult<Value> {
    let mut doc = Map::new();
    doc.insert(items_key.to_string(), serde_json::to_value(result.items())?);
    doc.insert("total_count".to_string(), result.total_count().into());
    doc.insert("current_page".to_string(), result.current_page().into());
    doc.insert("per_page".to_string(), result.per_page().into());
    doc.insert("total_pages".to_string(), result.total_pages().into());
    doc.insert("has_next".to_string(), result.has_next().into());
    doc.insert("has_prev".to_string(), result.has_prev().into());
    Ok(Value::Object(doc))
}
