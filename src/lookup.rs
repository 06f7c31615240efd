//! Pure lookups over a loaded metadata table. No state, no side effects;
//! the only failure mode is a missing key, reported as the matching
//! not-found error so callers can tell which level of the table missed.

use crate::error::{MetadataError, MetadataResult};
use crate::schema::{ClientEntry, ClientVariant, GapicMetadata};

impl GapicMetadata {
    fn client(&self, service: &str, variant: ClientVariant) -> MetadataResult<&ClientEntry> {
        let svc = self.services.get(service).ok_or_else(|| {
            MetadataError::service_not_found(format!(
                "no service '{}' in {}",
                service, self.library_package
            ))
        })?;
        svc.clients.get(&variant).ok_or_else(|| {
            MetadataError::variant_not_found(format!(
                "service '{}' has no '{}' client",
                service, variant
            ))
        })
    }

    /// Resolve the stub method name to invoke for an RPC:
    /// `resolve("DatabaseAdmin", Grpc, "CreateBackup") == "create_backup"`.
    pub fn resolve(
        &self,
        service: &str,
        variant: ClientVariant,
        rpc: &str,
    ) -> MetadataResult<&str> {
        let client = self.client(service, variant)?;
        let entry = client.rpcs.get(rpc).ok_or_else(|| {
            MetadataError::rpc_not_found(format!(
                "no rpc '{}' in {}/{}",
                rpc, service, variant
            ))
        })?;
        entry.primary_method().ok_or_else(|| {
            // Rejected by validation; reachable only on unchecked tables.
            MetadataError::schema(format!(
                "rpc '{}' in {}/{} has an empty method list",
                rpc, service, variant
            ))
        })
    }

    /// All method names recorded for an RPC (the format allows more than one).
    pub fn methods(
        &self,
        service: &str,
        variant: ClientVariant,
        rpc: &str,
    ) -> MetadataResult<&[String]> {
        let client = self.client(service, variant)?;
        match client.rpcs.get(rpc) {
            Some(entry) => Ok(&entry.methods),
            None => Err(MetadataError::rpc_not_found(format!(
                "no rpc '{}' in {}/{}",
                rpc, service, variant
            ))),
        }
    }

    /// Reverse lookup: which RPC does a stub method belong to.
    pub fn rpc_for_method(
        &self,
        service: &str,
        variant: ClientVariant,
        method: &str,
    ) -> MetadataResult<&str> {
        let client = self.client(service, variant)?;
        for (rpc, entry) in &client.rpcs {
            if entry.methods.iter().any(|m| m == method) {
                return Ok(rpc.as_str());
            }
        }
        Err(MetadataError::rpc_not_found(format!(
            "no rpc maps to method '{}' in {}/{}",
            method, service, variant
        )))
    }

    /// Generated client class name for a variant, e.g. `DatabaseAdminClient`.
    pub fn library_client(&self, service: &str, variant: ClientVariant) -> MetadataResult<&str> {
        Ok(self.client(service, variant)?.library_client.as_str())
    }

    /// RPC names of one variant, in table (lexicographic) order.
    pub fn rpc_names(&self, service: &str, variant: ClientVariant) -> MetadataResult<Vec<&str>> {
        let client = self.client(service, variant)?;
        Ok(client.rpcs.keys().map(|k| k.as_str()).collect())
    }

    /// Variants present for a service, in wire-string order.
    pub fn variants(&self, service: &str) -> MetadataResult<Vec<ClientVariant>> {
        let svc = self.services.get(service).ok_or_else(|| {
            MetadataError::service_not_found(format!(
                "no service '{}' in {}",
                service, self.library_package
            ))
        })?;
        Ok(svc.clients.keys().copied().collect())
    }
}
