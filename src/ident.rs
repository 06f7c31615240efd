//! Identifier case-convention utilities
//! ------------------------------------
//! RPC names are PascalCase (proto convention); generated stub methods are
//! snake_case in this table's target language. These helpers convert between
//! the conventions and check that identifiers follow them, so validation can
//! confirm an RPC and its method refer to the same semantic operation.

use once_cell::sync::Lazy;
use regex::Regex;

static PASCAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][A-Za-z0-9]*$").unwrap());
static SNAKE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9]*(_[a-z0-9]+)*$").unwrap());

/// PascalCase check for RPC names: `CreateBackup`, `UpdateDatabaseDdl`.
pub fn is_pascal_case(s: &str) -> bool {
    PASCAL_RE.is_match(s)
}

/// snake_case check for stub method names: `create_backup`.
pub fn is_snake_identifier(s: &str) -> bool {
    SNAKE_RE.is_match(s)
}

/// Convert a PascalCase RPC name to its snake_case method rendering.
/// Runs of capitals stay together until the last one: `DdlV2` -> `ddl_v2`,
/// `GetIAMPolicy` -> `get_iam_policy`.
pub fn pascal_to_snake(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() {
            let prev_lower_or_digit =
                i > 0 && (chars[i - 1].is_ascii_lowercase() || chars[i - 1].is_ascii_digit());
            let next_lower = chars.get(i + 1).map(|n| n.is_ascii_lowercase()).unwrap_or(false);
            let prev_upper = i > 0 && chars[i - 1].is_ascii_uppercase();
            if prev_lower_or_digit || (prev_upper && next_lower) {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(*c);
        }
    }
    out
}

/// Convert a snake_case method name to camelCase (the convention some other
/// target languages use for the same table).
pub fn snake_to_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Strip separators and lowercase, so `CreateBackup`, `create_backup` and
/// `createBackup` all collapse to `createbackup`. Used by parity checks to
/// compare method names across case conventions.
pub fn fold_convention(s: &str) -> String {
    s.chars().filter(|c| *c != '_' && *c != '-').map(|c| c.to_ascii_lowercase()).collect()
}
