//! Typed model of the GAPIC metadata document (schema "1.0")
//! ----------------------------------------------------------
//! Mirrors the on-disk JSON shape: top-level package fields plus
//! `services -> clients -> rpcs -> methods`. BTreeMaps keep key order
//! deterministic so a parse/serialize round trip is structurally stable.

use crate::error::MetadataError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Schema version this crate understands.
pub const SUPPORTED_SCHEMA: &str = "1.0";

/// One of the generated client shapes for the same underlying service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ClientVariant {
    /// Synchronous blocking client.
    #[serde(rename = "grpc")]
    Grpc,
    /// Asynchronous client.
    #[serde(rename = "grpc-async")]
    GrpcAsync,
    /// REST-transcoded client.
    #[serde(rename = "rest")]
    Rest,
}

impl ClientVariant {
    pub const ALL: [ClientVariant; 3] =
        [ClientVariant::Grpc, ClientVariant::GrpcAsync, ClientVariant::Rest];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClientVariant::Grpc => "grpc",
            ClientVariant::GrpcAsync => "grpc-async",
            ClientVariant::Rest => "rest",
        }
    }
}

impl Display for ClientVariant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClientVariant {
    type Err = MetadataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grpc" => Ok(ClientVariant::Grpc),
            "grpc-async" => Ok(ClientVariant::GrpcAsync),
            "rest" => Ok(ClientVariant::Rest),
            other => Err(MetadataError::variant_not_found(format!(
                "unknown client variant '{}' (expected grpc, grpc-async or rest)",
                other
            ))),
        }
    }
}

/// Mapping of one RPC to the generated stub method(s) that invoke it.
/// Every known artifact carries exactly one method per RPC; the list form
/// is part of the file format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RpcEntry {
    pub methods: Vec<String>,
}

impl RpcEntry {
    pub fn new<S: Into<String>>(method: S) -> Self {
        RpcEntry { methods: vec![method.into()] }
    }

    /// The method name `resolve` reports: the first entry of the list.
    pub fn primary_method(&self) -> Option<&str> {
        self.methods.first().map(|m| m.as_str())
    }
}

/// One generated client: its class name and the RPC dispatch table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ClientEntry {
    pub library_client: String,
    /// Keyed by PascalCase RPC name; map keys guarantee per-variant uniqueness.
    pub rpcs: BTreeMap<String, RpcEntry>,
}

/// One service: its client variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceEntry {
    pub clients: BTreeMap<ClientVariant, ClientEntry>,
}

/// Top-level metadata document. Fixed at generation time, read-only at
/// runtime; lookups are pure and need no synchronization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GapicMetadata {
    pub comment: String,
    pub language: String,
    pub library_package: String,
    pub proto_package: String,
    pub schema: String,
    pub services: BTreeMap<String, ServiceEntry>,
}

impl GapicMetadata {
    pub fn service(&self, name: &str) -> Option<&ServiceEntry> {
        self.services.get(name)
    }

    pub fn service_names(&self) -> Vec<&str> {
        self.services.keys().map(|k| k.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_wire_strings() {
        assert_eq!(ClientVariant::Grpc.as_str(), "grpc");
        assert_eq!(ClientVariant::GrpcAsync.as_str(), "grpc-async");
        assert_eq!(ClientVariant::Rest.as_str(), "rest");
        for v in ClientVariant::ALL {
            assert_eq!(v.as_str().parse::<ClientVariant>().unwrap(), v);
        }
    }

    #[test]
    fn variant_parse_rejects_unknown() {
        let err = "http".parse::<ClientVariant>().unwrap_err();
        assert_eq!(err.code_str(), "variant_not_found");
    }

    #[test]
    fn variant_serializes_as_map_key() {
        let mut clients: BTreeMap<ClientVariant, u32> = BTreeMap::new();
        clients.insert(ClientVariant::GrpcAsync, 1);
        let json = serde_json::to_string(&clients).unwrap();
        assert_eq!(json, r#"{"grpc-async":1}"#);
    }

    #[test]
    fn rpc_entry_primary_method() {
        let e = RpcEntry::new("create_backup");
        assert_eq!(e.primary_method(), Some("create_backup"));
        let empty = RpcEntry { methods: vec![] };
        assert_eq!(empty.primary_method(), None);
    }
}
