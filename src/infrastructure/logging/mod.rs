//! Logging infrastructure
//!
//! Structured logging with tracing and tracing-subscriber, plus redaction of
//! credentials carried in platform URLs.

pub mod logger;
pub mod redaction;

pub use logger::{parse_log_level, LoggerImpl};
pub use redaction::redact_url;
