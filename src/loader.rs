//! Reading and writing metadata documents.
//! Parsing validates by default so a bad artifact is rejected at load time;
//! `load_unchecked` is the escape hatch for tooling that wants to inspect a
//! broken file. `load_dir` walks a tree and collects every JSON file that
//! parses as a metadata table, skipping the rest quietly.

use crate::error::{MetadataError, MetadataResult};
use crate::schema::GapicMetadata;
use crate::validate::validate;
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Parse and validate a metadata document from a JSON string.
pub fn from_str(json: &str) -> MetadataResult<GapicMetadata> {
    let meta: GapicMetadata = serde_json::from_str(json)?;
    validate(&meta)?;
    Ok(meta)
}

/// Parse without validating.
pub fn from_str_unchecked(json: &str) -> MetadataResult<GapicMetadata> {
    Ok(serde_json::from_str(json)?)
}

/// Parse and validate from any reader.
pub fn from_reader<R: Read>(reader: R) -> MetadataResult<GapicMetadata> {
    let meta: GapicMetadata = serde_json::from_reader(reader)?;
    validate(&meta)?;
    Ok(meta)
}

/// Parse and validate a metadata file. IO and parse errors carry the path.
pub fn from_path<P: AsRef<Path>>(path: P) -> MetadataResult<GapicMetadata> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .map_err(|e| MetadataError::io(format!("{}: {}", path.display(), e)))?;
    from_str(&json).map_err(|e| match e {
        MetadataError::Parse { message, .. } => {
            MetadataError::parse(format!("{}: {}", path.display(), message))
        }
        other => other,
    })
}

/// Parse a metadata file without validating.
pub fn load_unchecked<P: AsRef<Path>>(path: P) -> MetadataResult<GapicMetadata> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)
        .map_err(|e| MetadataError::io(format!("{}: {}", path.display(), e)))?;
    from_str_unchecked(&json)
}

/// Walk `root` and load every `.json` file that parses and validates as a
/// metadata table. Non-metadata JSON is skipped with a debug log; IO errors
/// below the root are skipped the same way (an unreadable subtree should not
/// abort the whole scan).
pub fn load_dir<P: AsRef<Path>>(root: P) -> MetadataResult<Vec<GapicMetadata>> {
    let root = root.as_ref();
    if !root.exists() {
        return Err(MetadataError::io(format!("{}: no such directory", root.display())));
    }
    let mut out: Vec<GapicMetadata> = Vec::new();
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                debug!(target: "gapic_metadata", "skipping unreadable entry under {}: {}", root.display(), e);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        match from_path(path) {
            Ok(meta) => {
                info!(target: "gapic_metadata", "loaded {} from {}", meta.library_package, path.display());
                out.push(meta);
            }
            Err(e) => {
                debug!(target: "gapic_metadata", "skipping {}: {}", path.display(), e);
            }
        }
    }
    Ok(out)
}

/// Pretty-printed JSON rendering; parse/serialize round trips are
/// structurally stable because the model keys are ordered maps.
pub fn to_json_string(meta: &GapicMetadata) -> MetadataResult<String> {
    Ok(serde_json::to_string_pretty(meta)?)
}

pub fn to_writer<W: Write>(writer: W, meta: &GapicMetadata) -> MetadataResult<()> {
    Ok(serde_json::to_writer_pretty(writer, meta)?)
}
