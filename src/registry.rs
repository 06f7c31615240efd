//! Process-wide registry of loaded metadata tables, keyed by library
//! package. Tables are immutable once registered; the mutex only guards the
//! registration list itself.

use crate::catalog;
use crate::error::{MetadataError, MetadataResult};
use crate::schema::{ClientVariant, GapicMetadata};
use once_cell::sync::OnceCell;
use std::sync::{Arc, Mutex};

static REGISTRY: OnceCell<Mutex<Vec<Arc<GapicMetadata>>>> = OnceCell::new();

fn registry() -> &'static Mutex<Vec<Arc<GapicMetadata>>> {
    REGISTRY.get_or_init(|| Mutex::new(Vec::new()))
}

/// Register a table. A table with the same library package replaces the
/// earlier registration so reloads behave predictably.
pub fn register(meta: GapicMetadata) {
    ensure_registered();
    let mut reg = registry().lock().unwrap();
    reg.retain(|m| m.library_package != meta.library_package);
    reg.push(Arc::new(meta));
}

/// If empty, populate the bundled defaults. Holds the lock across the
/// install so two first callers cannot both seed the list.
pub fn ensure_registered() {
    let mut reg = registry().lock().unwrap();
    if !reg.is_empty() {
        return;
    }
    for meta in catalog::builtin_tables() {
        reg.push(Arc::new(meta));
    }
}

pub fn all() -> Vec<Arc<GapicMetadata>> {
    ensure_registered();
    let reg = registry().lock().unwrap();
    reg.iter().cloned().collect()
}

/// Find a registered table by its library package name.
pub fn find(library_package: &str) -> Option<Arc<GapicMetadata>> {
    ensure_registered();
    let reg = registry().lock().unwrap();
    reg.iter().find(|m| m.library_package == library_package).cloned()
}

/// Registry-level resolve: library package, then the table's own lookup.
pub fn resolve(
    library_package: &str,
    service: &str,
    variant: ClientVariant,
    rpc: &str,
) -> MetadataResult<String> {
    let meta = find(library_package).ok_or_else(|| {
        MetadataError::service_not_found(format!(
            "no registered metadata for library package '{}'",
            library_package
        ))
    })?;
    Ok(meta.resolve(service, variant, rpc)?.to_string())
}
