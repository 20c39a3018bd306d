//! Merging parsed env maps into an environment store.
//!
//! Responsibilities:
//! - Apply an [`EnvMap`] to an [`EnvStore`] under an [`OverridePolicy`].
//! - Report which keys were applied and which were kept.
//!
//! Invariants:
//! - Only keys present in the map are written.
//! - `KeepExisting` never replaces a key that is already present, whatever its value.
//! - Reports and logs carry key names only.

use serde::Serialize;
use tracing::{debug, trace};

use crate::error::EnvError;
use crate::map::EnvMap;
use crate::store::EnvStore;

/// Whether a merge may replace variables that are already set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OverridePolicy {
    /// Existing variables win over file values.
    #[default]
    KeepExisting,
    /// File values replace existing variables.
    Override,
}

impl OverridePolicy {
    pub fn is_override(self) -> bool {
        matches!(self, OverridePolicy::Override)
    }
}

impl From<bool> for OverridePolicy {
    fn from(override_existing: bool) -> Self {
        if override_existing {
            OverridePolicy::Override
        } else {
            OverridePolicy::KeepExisting
        }
    }
}

/// Outcome of a merge, by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MergeReport {
    applied: Vec<String>,
    kept: Vec<String>,
}

impl MergeReport {
    /// Keys written to the store, in map order.
    pub fn applied(&self) -> &[String] {
        &self.applied
    }

    /// Keys left untouched because they were already present.
    pub fn kept(&self) -> &[String] {
        &self.kept
    }
}

/// Merge `map` into `store`.
///
/// Stops at the first entry the store rejects; entries before it stay applied.
pub fn merge<S: EnvStore + ?Sized>(
    map: &EnvMap,
    store: &mut S,
    policy: OverridePolicy,
) -> Result<MergeReport, EnvError> {
    let mut report = MergeReport::default();

    for (key, value) in map.iter() {
        if !policy.is_override() && store.contains(key) {
            trace!(key, "keeping existing variable");
            report.kept.push(key.to_string());
            continue;
        }
        store.set(key, value)?;
        trace!(key, "set variable");
        report.applied.push(key.to_string());
    }

    debug!(
        ?policy,
        applied = report.applied.len(),
        kept = report.kept.len(),
        "merged env map"
    );
    Ok(report)
}
