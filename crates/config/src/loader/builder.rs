//! Env loader builder implementation.
//!
//! Responsibilities:
//! - Resolve which env file to use (explicit path or upward discovery).
//! - Parse it and merge it into a store under the configured override policy.
//!
//! Does NOT handle:
//! - Synchronizing access to the process environment.
//!
//! Invariants / Assumptions:
//! - `values()` never mutates any environment.
//! - The `DOTENV_DISABLED` variable is checked before the file system is touched by a load.
//! - Error messages never include raw env file contents.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::{DEFAULT_ENV_FILENAME, DOTENV_DISABLED_VAR};
use crate::error::EnvError;
use crate::locate::{find_upward, resolve_start};
use crate::map::EnvMap;
use crate::merge::{MergeReport, OverridePolicy, merge};
use crate::parser::read_env_file;
use crate::store::{EnvStore, ProcessEnv};

/// Result of a load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Loading was skipped because `DOTENV_DISABLED` is set.
    Disabled,
    /// No env file was found and none was required.
    NotFound,
    /// The file at `path` was merged.
    Loaded { path: PathBuf, report: MergeReport },
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded { .. })
    }

    /// Merge report, if a file was loaded.
    pub fn report(&self) -> Option<&MergeReport> {
        match self {
            LoadOutcome::Loaded { report, .. } => Some(report),
            _ => None,
        }
    }
}

/// Loader that locates, parses and merges an env file.
#[derive(Debug, Clone)]
pub struct EnvLoader {
    path: Option<PathBuf>,
    start_dir: Option<PathBuf>,
    filename: String,
    policy: OverridePolicy,
    required: bool,
}

impl Default for EnvLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvLoader {
    /// Create a loader that discovers `.env` upward from the cwd and keeps existing variables.
    pub fn new() -> Self {
        Self {
            path: None,
            start_dir: None,
            filename: DEFAULT_ENV_FILENAME.to_string(),
            policy: OverridePolicy::KeepExisting,
            required: false,
        }
    }

    /// Check if env file loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(DOTENV_DISABLED_VAR).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load exactly this file instead of discovering one.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Start discovery here instead of the cwd.
    pub fn with_start_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.start_dir = Some(dir.into());
        self
    }

    /// File name to discover (default `.env`).
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    /// Whether file values replace variables that are already set.
    pub fn override_existing(mut self, override_existing: bool) -> Self {
        self.policy = OverridePolicy::from(override_existing);
        self
    }

    /// Whether a missing file is an error.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn policy(&self) -> OverridePolicy {
        self.policy
    }

    /// Resolve the file to read. `Ok(None)` means discovery found nothing.
    fn resolve_path(&self) -> Result<Option<PathBuf>, EnvError> {
        match &self.path {
            Some(path) => Ok(Some(path.clone())),
            None => find_upward(self.start_dir.as_deref(), &self.filename),
        }
    }

    /// Where a required file was expected, for `NotFound` errors after discovery.
    fn expected_path(&self) -> Result<PathBuf, EnvError> {
        Ok(resolve_start(self.start_dir.as_deref())?.join(&self.filename))
    }

    /// Read the env file into a map without touching any environment.
    ///
    /// Missing files yield an empty map unless the loader is `required`.
    pub fn values(&self) -> Result<EnvMap, EnvError> {
        match self.read()? {
            Some((_, map)) => Ok(map),
            None => Ok(EnvMap::new()),
        }
    }

    fn read(&self) -> Result<Option<(PathBuf, EnvMap)>, EnvError> {
        let Some(path) = self.resolve_path()? else {
            if self.required {
                return Err(EnvError::NotFound {
                    path: self.expected_path()?,
                });
            }
            return Ok(None);
        };

        match read_env_file(&path) {
            Ok(map) => Ok(Some((path, map))),
            Err(EnvError::NotFound { .. }) if !self.required => {
                debug!(path = %path.display(), "env file not found, skipping");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Locate, parse and merge the env file into `store`.
    ///
    /// If `DOTENV_DISABLED` is `1` or `true`, nothing is read and
    /// `LoadOutcome::Disabled` is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists but cannot be read (`EnvError::Io`)
    /// - The loader is `required` and no file exists (`EnvError::NotFound`)
    /// - The store rejects an entry (`EnvError::InvalidEntry`)
    pub fn load_into<S: EnvStore + ?Sized>(&self, store: &mut S) -> Result<LoadOutcome, EnvError> {
        if Self::dotenv_disabled() {
            debug!("{DOTENV_DISABLED_VAR} is set, skipping env file loading");
            return Ok(LoadOutcome::Disabled);
        }

        let Some((path, map)) = self.read()? else {
            return Ok(LoadOutcome::NotFound);
        };

        let report = merge(&map, store, self.policy)?;
        debug!(
            path = %path.display(),
            applied = report.applied().len(),
            kept = report.kept().len(),
            "loaded env file"
        );
        Ok(LoadOutcome::Loaded { path, report })
    }

    /// Locate, parse and merge the env file into the process environment.
    ///
    /// Call this once, early, before spawning threads that read the environment.
    pub fn load(&self) -> Result<LoadOutcome, EnvError> {
        self.load_into(&mut ProcessEnv)
    }
}

/// Merge `.env` discovered upward from the cwd into the process environment,
/// keeping existing variables.
pub fn dotenv() -> Result<LoadOutcome, EnvError> {
    EnvLoader::new().load()
}

/// Merge the env file at `path` into the process environment.
///
/// A missing file is a no-op.
pub fn load_dotenv(path: &Path, override_existing: bool) -> Result<LoadOutcome, EnvError> {
    EnvLoader::new()
        .with_path(path)
        .override_existing(override_existing)
        .load()
}
