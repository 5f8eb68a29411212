use anyhow::Result;
use serde::Serialize;
use serde_json::Value;

use crate::adapters::mcp::ToolRegistry;
use crate::cli::output::{format_tools_table, output, CommandOutput};

#[derive(Debug, Serialize)]
pub struct ToolListOutput {
    #[serde(skip)]
    registry: ToolRegistry,
    pub tools: Value,
}

impl CommandOutput for ToolListOutput {
    fn to_human(&self) -> String {
        format_tools_table(self.registry.tools())
    }

    fn to_json(&self) -> Value {
        self.tools.clone()
    }
}

pub fn execute(json_mode: bool) -> Result<()> {
    let registry = ToolRegistry::standard();
    let tools = registry.list_json();
    output(&ToolListOutput { registry, tools }, json_mode);
    Ok(())
}
