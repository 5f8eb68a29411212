use anyhow::{Context, Result};

use crate::domain::models::Config;

/// Print the merged configuration as YAML, or JSON with `--json`.
pub fn execute(config: &Config, json_mode: bool) -> Result<()> {
    let rendered = if json_mode {
        serde_json::to_string_pretty(config).context("Failed to render configuration as JSON")?
    } else {
        serde_yaml::to_string(config).context("Failed to render configuration as YAML")?
    };
    println!("{}", rendered.trim_end());
    Ok(())
}
