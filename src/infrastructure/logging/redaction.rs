//! Credential redaction for URLs that end up in logs or error messages.

use reqwest::Url;

/// Query parameters whose values must never leave the process.
pub const SENSITIVE_QUERY_KEYS: &[&str] = &["consumer_key", "consumer_secret"];

const REDACTED: &str = "REDACTED";

fn is_sensitive(key: &str) -> bool {
    SENSITIVE_QUERY_KEYS
        .iter()
        .any(|sensitive| key.eq_ignore_ascii_case(sensitive))
}

/// Render `url` with every sensitive query value replaced.
pub fn redact_url(url: &Url) -> String {
    if !url.query_pairs().any(|(key, _)| is_sensitive(&key)) {
        return url.to_string();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| {
            let value = if is_sensitive(&key) {
                REDACTED.to_string()
            } else {
                value.into_owned()
            };
            (key.into_owned(), value)
        })
        .collect();

    let mut redacted = url.clone();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}
