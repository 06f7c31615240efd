//! Structural validation of a metadata table. In practice these are
//! build-time checks: a generated artifact that fails here is malformed at
//! the source, not a runtime fault. Checks run in a fixed order and the
//! first violation is returned with the offending keys named.

use crate::error::{MetadataError, MetadataResult};
use crate::ident;
use crate::schema::{ClientVariant, GapicMetadata, ServiceEntry, SUPPORTED_SCHEMA};
use tracing::warn;

/// Full table validation: schema version, non-empty structure, identifier
/// conventions, and cross-variant parity per service.
pub fn validate(meta: &GapicMetadata) -> MetadataResult<()> {
    if meta.schema != SUPPORTED_SCHEMA {
        return Err(MetadataError::schema(format!(
            "unsupported schema version '{}' (supported: {})",
            meta.schema, SUPPORTED_SCHEMA
        )));
    }
    if meta.services.is_empty() {
        return Err(MetadataError::schema(format!(
            "{}: no services declared",
            meta.library_package
        )));
    }
    for (name, svc) in &meta.services {
        validate_service(name, svc)?;
    }
    Ok(())
}

fn validate_service(service: &str, svc: &ServiceEntry) -> MetadataResult<()> {
    if svc.clients.is_empty() {
        return Err(MetadataError::schema(format!(
            "service '{}' declares no client variants",
            service
        )));
    }
    for (variant, client) in &svc.clients {
        if client.library_client.is_empty() {
            return Err(MetadataError::schema(format!(
                "{}/{}: empty libraryClient",
                service, variant
            )));
        }
        for (rpc, entry) in &client.rpcs {
            if !ident::is_pascal_case(rpc) {
                return Err(MetadataError::naming(format!(
                    "{}/{}: rpc '{}' is not PascalCase",
                    service, variant, rpc
                )));
            }
            if entry.methods.is_empty() {
                return Err(MetadataError::schema(format!(
                    "{}/{}: rpc '{}' has an empty method list",
                    service, variant, rpc
                )));
            }
            for m in &entry.methods {
                if !ident::is_snake_identifier(m) {
                    return Err(MetadataError::naming(format!(
                        "{}/{}: method '{}' for rpc '{}' is not a lowercase identifier",
                        service, variant, m, rpc
                    )));
                }
                // Method and RPC must name the same operation across the case
                // conventions; mismatch is a generator bug worth surfacing.
                if ident::fold_convention(m) != ident::fold_convention(rpc) {
                    warn!(
                        target: "gapic_metadata",
                        "{}/{}: method '{}' does not match rpc '{}' under case folding",
                        service, variant, m, rpc
                    );
                }
            }
        }
    }
    check_parity(service, svc)
}

/// Every RPC present in one variant must be present in all variants of the
/// service, mapping to the same operation.
fn check_parity(service: &str, svc: &ServiceEntry) -> MetadataResult<()> {
    let mut iter = svc.clients.iter();
    let (first_variant, first) = match iter.next() {
        Some(kv) => kv,
        None => return Ok(()),
    };
    for (variant, client) in iter {
        for rpc in first.rpcs.keys() {
            if !client.rpcs.contains_key(rpc) {
                return Err(MetadataError::parity(format!(
                    "service '{}': rpc '{}' present in {} but missing from {}",
                    service, rpc, first_variant, variant
                )));
            }
        }
        for rpc in client.rpcs.keys() {
            if !first.rpcs.contains_key(rpc) {
                return Err(MetadataError::parity(format!(
                    "service '{}': rpc '{}' present in {} but missing from {}",
                    service, rpc, variant, first_variant
                )));
            }
        }
        for (rpc, entry) in &client.rpcs {
            let base = &first.rpcs[rpc];
            let same_operation = match (base.primary_method(), entry.primary_method()) {
                (Some(a), Some(b)) => {
                    ident::fold_convention(a) == ident::fold_convention(b)
                }
                _ => false,
            };
            if !same_operation {
                return Err(MetadataError::parity(format!(
                    "service '{}': rpc '{}' maps to different operations in {} and {}",
                    service, rpc, first_variant, variant
                )));
            }
        }
    }
    Ok(())
}

/// Convenience used by tooling: true when all three standard variants are
/// present for a service.
pub fn has_all_variants(meta: &GapicMetadata, service: &str) -> bool {
    meta.service(service)
        .map(|svc| ClientVariant::ALL.iter().all(|v| svc.clients.contains_key(v)))
        .unwrap_or(false)
}
