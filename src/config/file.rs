//! # Config File Parsing
//!
//! Parses the fallback credentials file: plain `KEY=value` lines. The
//! format replaces a sourced shell snippet, so an optional `export `
//! prefix and surrounding quotes are tolerated, but nothing is ever
//! evaluated. Parsing is inert.
//!
//! Copyright (c) 2026 the notedrop authors. All rights reserved.
//! Licensed under the MIT License.

/// Extracts `KEY=value` assignments from the file content.
///
/// Blank lines and `#` comments are skipped, as are lines without an
/// `=`. Keys are returned in file order; duplicates are preserved so
/// the caller can apply last-one-wins.
pub fn parse_assignments(content: &str) -> Vec<(String, String)> {
    let mut assignments = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line = line.strip_prefix("export ").map_or(line, str::trim_start);

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };

        let key = key.trim();
        if key.is_empty() {
            continue;
        }

        assignments.push((key.to_string(), unquote(value.trim()).to_string()));
    }

    assignments
}

/// Strips one pair of matching single or double quotes, if present.
fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'"' || first == b'\'') {
            return &value[1..value.len() - 1];
        }
    }
    value
}
