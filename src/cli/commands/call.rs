use anyhow::{bail, Context, Result};
use serde_json::Value;

use crate::adapters::mcp::CallFailure;
use crate::cli::types::CallArgs;
use crate::domain::models::{ArgumentMap, Config, ToolCallEnvelope};

/// Split `key=value`; the value may itself contain `=`.
fn parse_pair(raw: &str) -> Result<(String, String)> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => bail!("Invalid argument '{raw}': expected KEY=VALUE"),
    }
}

/// Build the argument map from `--args-json` and then `--arg` pairs.
pub fn collect_arguments(args: &CallArgs) -> Result<ArgumentMap> {
    let mut arguments = match &args.args_json {
        Some(raw) => match serde_json::from_str::<Value>(raw).context("Invalid --args-json")? {
            Value::Object(map) => map,
            _ => bail!("--args-json must be a JSON object"),
        },
        None => ArgumentMap::new(),
    };

    for raw in &args.args {
        let (key, value) = parse_pair(raw)?;
        arguments.insert(key, Value::String(value));
    }
    Ok(arguments)
}

/// Run one tool call and print the result. A failed call is an error exit.
pub async fn execute(args: CallArgs, config: Config, json_mode: bool) -> Result<()> {
    let arguments = collect_arguments(&args)?;
    let gateway = super::build_gateway(&config);

    let output = gateway
        .call_envelope(ToolCallEnvelope::new(args.tool, arguments))
        .await
        .map_err(|failure| match failure {
            CallFailure::Tool(message) => anyhow::anyhow!(message),
            other => anyhow::anyhow!(other.display_text()),
        })?;

    if json_mode {
        println!("{}", serde_json::to_string_pretty(&output.data)?);
    } else {
        println!("{}", output.to_text());
    }
    Ok(())
}
