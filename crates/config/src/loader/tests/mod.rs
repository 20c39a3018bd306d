//! Tests for the env loader builder.
//!
//! Responsibilities:
//! - Test builder options (explicit path, start dir, filename, required, override).
//! - Test the `DOTENV_DISABLED` gate and cwd-based discovery.
//!
//! Does NOT handle:
//! - Line parsing details (tested in parser.rs).
//! - Store behavior (tested in store.rs).
//!
//! Invariants:
//! - Tests that read or write the process environment or cwd use `serial_test`.
//! - Tests that only need a store use `MemoryEnv`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::path::{Path, PathBuf};

use crate::constants::DOTENV_DISABLED_VAR;


/// RAII guard for temporarily changing the current working directory.
pub struct CwdGuard {
    original_dir: PathBuf,
}

impl CwdGuard {
    pub fn new(dir: &Path) -> Self {
        let original_dir = std::env::current_dir().expect("Failed to get current directory");
        std::env::set_current_dir(dir).expect("Failed to set current directory");
        Self { original_dir }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
    }
}

/// Run `f` with the `DOTENV_DISABLED` gate cleared.
pub fn with_dotenv_enabled<R>(f: impl FnOnce() -> R) -> R {
    temp_env::with_var_unset(DOTENV_DISABLED_VAR, f)
}
