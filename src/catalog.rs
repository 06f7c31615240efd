//! Built-in metadata tables shipped with the crate.
//! The Cloud Spanner `DatabaseAdmin` table is embedded at compile time and
//! parsed once on first use; the raw JSON is also exposed for tests and
//! tooling that want the original artifact bytes.

use crate::schema::GapicMetadata;
use once_cell::sync::Lazy;

/// Raw gapic_metadata.json for google.cloud.spanner_admin_database_v1.
pub const DATABASE_ADMIN_JSON: &str = include_str!("../data/database_admin.json");

static DATABASE_ADMIN: Lazy<GapicMetadata> = Lazy::new(|| {
    // The bundled artifact is validated by tests; a parse failure here is a
    // packaging error, not a runtime condition.
    serde_json::from_str(DATABASE_ADMIN_JSON)
        .unwrap_or_else(|e| panic!("bundled database_admin.json is malformed: {}", e))
});

/// The DatabaseAdmin mapping table (26 RPCs across grpc, grpc-async, rest).
pub fn database_admin() -> &'static GapicMetadata {
    &DATABASE_ADMIN
}

/// All bundled tables, used by the registry to install defaults.
pub fn builtin_tables() -> Vec<GapicMetadata> {
    vec![database_admin().clone()]
}
