//! Upward discovery of env files.
//!
//! Responsibilities:
//! - Find the closest file with a given name in a directory or its ancestors.
//!
//! Does NOT handle:
//! - Searching subdirectories.
//! - Reading the file (see `parser.rs`).
//!
//! Invariants:
//! - The walk starts at the given directory (or the cwd) and ends at the filesystem root.
//! - The closest match wins; only regular files match.
//! - Relative start paths are resolved against the cwd and normalized lexically
//!   so `..` segments do not cut the walk short.

use std::path::{Component, Path, PathBuf};
use tracing::{debug, trace};

use crate::constants::DEFAULT_ENV_FILENAME;
use crate::error::EnvError;

/// Search `start` (default: cwd) and its ancestors for `filename`.
pub fn find_upward(start: Option<&Path>, filename: &str) -> Result<Option<PathBuf>, EnvError> {
    let start = resolve_start(start)?;

    for dir in start.ancestors() {
        let candidate = dir.join(filename);
        trace!(path = %candidate.display(), "checking for env file");
        if candidate.is_file() {
            debug!(path = %candidate.display(), "found env file");
            return Ok(Some(candidate));
        }
    }

    debug!(start = %start.display(), filename, "no env file found in ancestors");
    Ok(None)
}

/// Search `start` (default: cwd) and its ancestors for `.env`.
pub fn find_dotenv(start: Option<&Path>) -> Result<Option<PathBuf>, EnvError> {
    find_upward(start, DEFAULT_ENV_FILENAME)
}

/// Absolute, lexically normalized starting directory.
pub(crate) fn resolve_start(start: Option<&Path>) -> Result<PathBuf, EnvError> {
    let absolute = match start {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => current_dir()?.join(path),
        None => current_dir()?,
    };
    Ok(normalize(&absolute))
}

fn current_dir() -> Result<PathBuf, EnvError> {
    std::env::current_dir().map_err(|e| EnvError::CurrentDir { kind: e.kind() })
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
