//! Domain errors for the storefront gateway.
//!
//! Every failure a tool call can produce is one of these variants. Transports render
//! the `Display` text and never branch on the variant itself.

use thiserror::Error;

/// External platform a request was addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    WooCommerce,
    WordPress,
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WooCommerce => write!(f, "WooCommerce"),
            Self::WordPress => write!(f, "WordPress"),
        }
    }
}

/// Caller-fixable input problems, always tied to one argument name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required parameter '{field}'")]
    Missing { field: String },

    #[error("invalid value for '{field}': {reason}")]
    Invalid { field: String, reason: String },
}

impl ValidationError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::Missing { field: field.into() }
    }

    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the argument that failed.
    pub fn field(&self) -> &str {
        match self {
            Self::Missing { field } | Self::Invalid { field, .. } => field,
        }
    }

}

/// A platform item that does not have the shape of the entity it should become.
///
/// The platform sent it, so the caller cannot fix it by changing arguments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct ConversionError {
    pub reason: String,
}

impl ConversionError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Gateway-level errors shared by the catalog and content domains.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The platform could not be reached. `url` has credential values redacted.
    #[error("connection error to {url}: {message}")]
    Connection { url: String, message: String },

    #[error("{platform} API error (status {status}, code {}): {message}", .code.as_deref().unwrap_or("unknown"))]
    ExternalApi {
        platform: Platform,
        status: u16,
        code: Option<String>,
        message: String,
    },

    #[error("{resource} '{id}' not found")]
    NotFound { resource: &'static str, id: String },

    #[error("NOT_IMPLEMENTED: {operation} operation is not supported in read-only mode")]
    NotImplemented { operation: &'static str },

    /// A single platform item could not be mapped into an entity. `item_id` is the
    /// platform's own identifier as sent, or `unknown`.
    #[error("failed to convert {resource} {item_id}: {source}")]
    ItemConversion {
        resource: &'static str,
        item_id: String,
        #[source]
        source: ConversionError,
    },

    #[error("internal error: {0}")]
    Internal(String),
}

pub type GatewayResult<T> = Result<T, GatewayError>;

impl GatewayError {
    pub fn connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Connection {
            url: url.into(),
            message: message.into(),
        }
    }

    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    pub fn item_conversion(
        resource: &'static str,
        item_id: impl Into<String>,
        source: ConversionError,
    ) -> Self {
        Self::ItemConversion {
            resource,
            item_id: item_id.into(),
            source,
        }
    }

    pub fn is_connection(&self) -> bool {
        matches!(self, Self::Connection { .. })
    }

    /// Whether the caller can fix the problem by changing the request.
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::Validation(_) | Self::NotFound { .. } | Self::NotImplemented { .. } => true,
            Self::ExternalApi { status, .. } => (400..500).contains(status),
            Self::Connection { .. } | Self::ItemConversion { .. } | Self::Internal(_) => false,
        }
    }

    /// Argument name for validation failures.
    pub fn validation_field(&self) -> Option<&str> {
        match self {
            Self::Validation(err) => Some(err.field()),
            _ => None,
        }
    }

    /// HTTP status reported by the platform, if it answered at all.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::ExternalApi { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("serialization failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_api_display_includes_status_and_code() {
        let err = GatewayError::ExternalApi {
            platform: Platform::WooCommerce,
            status: 401,
            code: Some("woocommerce_rest_cannot_view".to_string()),
            message: "Sorry, you cannot view this resource.".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "WooCommerce API error (status 401, code woocommerce_rest_cannot_view): Sorry, you cannot view this resource."
        );
        assert!(err.is_client_error());
        assert_eq!(err.upstream_status(), Some(401));
    }

    #[test]
    fn test_external_api_without_code() {
        let err = GatewayError::ExternalApi {
            platform: Platform::WordPress,
            status: 502,
            code: None,
            message: "Bad Gateway".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "WordPress API error (status 502, code unknown): Bad Gateway"
        );
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_validation_error_names_field() {
        let err: GatewayError = ValidationError::missing("consumer_key").into();
        assert!(err.is_client_error());
        assert_eq!(err.validation_field(), Some("consumer_key"));
        assert_eq!(
            err.to_string(),
            "validation error: missing required parameter 'consumer_key'"
        );
    }

    #[test]
    fn test_item_conversion_is_a_platform_fault() {
        let err = GatewayError::item_conversion(
            "product",
            "0",
            ConversionError::new("product ID must be positive"),
        );
        assert_eq!(
            err.to_string(),
            "failed to convert product 0: product ID must be positive"
        );
        assert!(!err.is_client_error());
        assert_eq!(err.validation_field(), None);
    }

    #[test]
    fn test_not_implemented_message_is_fixed() {
        let err = GatewayError::NotImplemented { operation: "save" };
        assert_eq!(
            err.to_string(),
            "NOT_IMPLEMENTED: save operation is not supported in read-only mode"
        );
    }
}
