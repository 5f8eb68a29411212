//! Inbound adapters that expose the search tools to callers.

pub mod mcp;
