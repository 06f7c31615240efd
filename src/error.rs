//! Unified error model for metadata loading, validation and lookup.
//! A single enum is used across the library and the CLI, with helper
//! constructors and stable string codes for machine consumption.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MetadataError {
    /// Unknown service name in a lookup.
    ServiceNotFound { code: String, message: String },
    /// Unknown client variant in a lookup.
    VariantNotFound { code: String, message: String },
    /// Unknown RPC name in a lookup.
    RpcNotFound { code: String, message: String },
    /// The document is not parseable as a metadata table.
    Parse { code: String, message: String },
    /// Structural violation: unsupported schema version, empty method list, etc.
    Schema { code: String, message: String },
    /// Cross-variant parity violation within a service.
    Parity { code: String, message: String },
    /// RPC or method identifier does not follow its case convention.
    Naming { code: String, message: String },
    Io { code: String, message: String },
}

impl MetadataError {
    pub fn code_str(&self) -> &str {
        match self {
            MetadataError::ServiceNotFound { code, .. }
            | MetadataError::VariantNotFound { code, .. }
            | MetadataError::RpcNotFound { code, .. }
            | MetadataError::Parse { code, .. }
            | MetadataError::Schema { code, .. }
            | MetadataError::Parity { code, .. }
            | MetadataError::Naming { code, .. }
            | MetadataError::Io { code, .. } => code.as_str(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            MetadataError::ServiceNotFound { message, .. }
            | MetadataError::VariantNotFound { message, .. }
            | MetadataError::RpcNotFound { message, .. }
            | MetadataError::Parse { message, .. }
            | MetadataError::Schema { message, .. }
            | MetadataError::Parity { message, .. }
            | MetadataError::Naming { message, .. }
            | MetadataError::Io { message, .. } => message.as_str(),
        }
    }

    /// True for the lookup-miss family (unknown service/variant/RPC).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            MetadataError::ServiceNotFound { .. }
                | MetadataError::VariantNotFound { .. }
                | MetadataError::RpcNotFound { .. }
        )
    }

    pub fn service_not_found<S: Into<String>>(msg: S) -> Self {
        MetadataError::ServiceNotFound { code: "service_not_found".into(), message: msg.into() }
    }
    pub fn variant_not_found<S: Into<String>>(msg: S) -> Self {
        MetadataError::VariantNotFound { code: "variant_not_found".into(), message: msg.into() }
    }
    pub fn rpc_not_found<S: Into<String>>(msg: S) -> Self {
        MetadataError::RpcNotFound { code: "rpc_not_found".into(), message: msg.into() }
    }
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        MetadataError::Parse { code: "parse_error".into(), message: msg.into() }
    }
    pub fn schema<S: Into<String>>(msg: S) -> Self {
        MetadataError::Schema { code: "schema_error".into(), message: msg.into() }
    }
    pub fn parity<S: Into<String>>(msg: S) -> Self {
        MetadataError::Parity { code: "parity_error".into(), message: msg.into() }
    }
    pub fn naming<S: Into<String>>(msg: S) -> Self {
        MetadataError::Naming { code: "naming_error".into(), message: msg.into() }
    }
    pub fn io<S: Into<String>>(msg: S) -> Self {
        MetadataError::Io { code: "io_error".into(), message: msg.into() }
    }
}

impl Display for MetadataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code_str(), self.message())
    }
}

impl std::error::Error for MetadataError {}

pub type MetadataResult<T> = Result<T, MetadataError>;

impl From<serde_json::Error> for MetadataError {
    fn from(err: serde_json::Error) -> Self {
        MetadataError::parse(err.to_string())
    }
}

impl From<std::io::Error> for MetadataError {
    fn from(err: std::io::Error) -> Self {
        MetadataError::io(err.to_string())
    }
}

impl From<anyhow::Error> for MetadataError {
    fn from(err: anyhow::Error) -> Self {
        // Default mapping: treat as Schema unless downcasted elsewhere
        MetadataError::schema(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_strings_are_stable() {
        assert_eq!(MetadataError::service_not_found("x").code_str(), "service_not_found");
        assert_eq!(MetadataError::variant_not_found("x").code_str(), "variant_not_found");
        assert_eq!(MetadataError::rpc_not_found("x").code_str(), "rpc_not_found");
        assert_eq!(MetadataError::parse("x").code_str(), "parse_error");
        assert_eq!(MetadataError::schema("x").code_str(), "schema_error");
        assert_eq!(MetadataError::parity("x").code_str(), "parity_error");
        assert_eq!(MetadataError::naming("x").code_str(), "naming_error");
        assert_eq!(MetadataError::io("x").code_str(), "io_error");
    }

    #[test]
    fn not_found_family() {
        assert!(MetadataError::service_not_found("a").is_not_found());
        assert!(MetadataError::variant_not_found("b").is_not_found());
        assert!(MetadataError::rpc_not_found("c").is_not_found());
        assert!(!MetadataError::parity("d").is_not_found());
        assert!(!MetadataError::parse("e").is_not_found());
    }

    #[test]
    fn display_includes_code_and_message() {
        let e = MetadataError::rpc_not_found("no rpc 'NoSuchRpc' in DatabaseAdmin/grpc");
        assert_eq!(e.to_string(), "rpc_not_found: no rpc 'NoSuchRpc' in DatabaseAdmin/grpc");
    }
}
