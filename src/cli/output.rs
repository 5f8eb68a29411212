//! Output formatting utilities for the CLI.

use comfy_table::{presets, Attribute, Cell, ContentArrangement, Table};
use serde::Serialize;

use crate::adapters::mcp::ToolDescriptor;

pub trait CommandOutput: Serialize {
    fn to_human(&self) -> String;
    fn to_json(&self) -> serde_json::Value;
}

pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&result.to_json()).unwrap_or_default());
    } else {
        println!("{}", result.to_human());
    }
}

/// Truncate a string to a maximum number of characters, appending "..." if truncated.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// One table row per tool: name, required arguments, optional arguments, description.
pub fn format_tools_table(tools: &[ToolDescriptor]) -> String {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Tool").add_attribute(Attribute::Bold),
        Cell::new("Required").add_attribute(Attribute::Bold),
        Cell::new("Optional").add_attribute(Attribute::Bold),
        Cell::new("Description").add_attribute(Attribute::Bold),
    ]);

    for tool in tools {
        let optional: Vec<&str> = tool
            .parameters
            .iter()
            .filter(|parameter| !parameter.required)
            .map(|parameter| parameter.name)
            .collect();
        table.add_row(vec![
            Cell::new(tool.name()),
            Cell::new(tool.required_parameters().join(", ")),
            Cell::new(optional.join(", ")),
            Cell::new(truncate(tool.description, 60)),
        ]);
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mcp::ToolRegistry;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer sentence", 10), "a longe...");
        assert_eq!(truncate("ééééééé", 5), "éé...");
    }

    #[test]
    fn test_tools_table_mentions_each_tool() {
        let registry = ToolRegistry::standard();
        let rendered = format_tools_table(registry.tools());
        assert!(rendered.contains("search_products"));
        assert!(rendered.contains("search_posts"));
        assert!(rendered.contains("consumer_secret"));
    }
}
