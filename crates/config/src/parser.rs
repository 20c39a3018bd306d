//! Env file parsing.
//!
//! Responsibilities:
//! - Turn `KEY=VALUE` text into an [`EnvMap`].
//! - Read env files from disk with permissive and strict missing-file handling.
//!
//! Does NOT handle:
//! - Writing to any environment (see `merge.rs`).
//! - Quoting, escapes, multi-line values or `${VAR}` interpolation; such text is kept literally.
//!
//! Invariants:
//! - Parsing never touches the process environment.
//! - Lines are split on the first `=` only; key and value are trimmed.
//! - Blank lines, `#` comments, lines without `=` and lines with an empty key are skipped.
//! - Values are never logged.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, trace};

use crate::error::EnvError;
use crate::map::EnvMap;

/// Parse env file contents into a map.
///
/// Later assignments of the same key win.
pub fn parse_str(contents: &str) -> EnvMap {
    let contents = contents.strip_prefix('\u{feff}').unwrap_or(contents);

    let mut map = EnvMap::new();
    for (idx, raw_line) in contents.lines().enumerate() {
        if let Some((key, value)) = parse_line(raw_line, idx + 1) {
            map.insert(key, value);
        }
    }
    map
}

fn parse_line(raw_line: &str, line_no: usize) -> Option<(&str, &str)> {
    let line = raw_line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let Some((key, value)) = line.split_once('=') else {
        trace!(line = line_no, "skipping line without '='");
        return None;
    };

    let key = key.trim();
    if key.is_empty() {
        trace!(line = line_no, "skipping line with empty key");
        return None;
    }

    Some((key, value.trim()))
}

/// Read and parse an env file, reporting a missing file as [`EnvError::NotFound`].
pub fn read_env_file(path: &Path) -> Result<EnvMap, EnvError> {
    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => EnvError::NotFound {
            path: path.to_path_buf(),
        },
        kind => EnvError::Io {
            path: path.to_path_buf(),
            kind,
        },
    })?;

    let map = parse_str(&contents);
    debug!(path = %path.display(), entries = map.len(), "parsed env file");
    Ok(map)
}

/// Read and parse an env file without touching the process environment.
///
/// A missing file yields an empty map. Any other read failure is still an error.
pub fn dotenv_values(path: &Path) -> Result<EnvMap, EnvError> {
    match read_env_file(path) {
        Err(EnvError::NotFound { path }) => {
            debug!(path = %path.display(), "env file not found, using empty map");
            Ok(EnvMap::new())
        }
        other => other,
    }
}
