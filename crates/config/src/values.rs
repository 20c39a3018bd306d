//! Typed reads of environment variables.
//!
//! Env files only ever produce strings; these helpers are the caller-side
//! coercions applied after a merge.
//!
//! Invariants:
//! - Empty or whitespace-only values are treated as unset.
//! - Returned values are trimmed.
//! - Parse errors name the variable, never its value.

use std::str::FromStr;

use crate::constants::TRUTHY_VALUES;
use crate::error::EnvError;
use crate::store::EnvStore;

/// Read `key`, returning None if unset, empty, or whitespace-only.
pub fn var_or_none<S: EnvStore + ?Sized>(store: &S, key: &str) -> Option<String> {
    store.get(key).and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Read `key`, falling back to `default`.
pub fn var_or<S: EnvStore + ?Sized>(store: &S, key: &str, default: &str) -> String {
    var_or_none(store, key).unwrap_or_else(|| default.to_string())
}

/// Read `key` as a boolean flag.
///
/// `1`, `true`, `yes` and `on` (any case) are true; any other present value is false.
pub fn flag<S: EnvStore + ?Sized>(store: &S, key: &str, default: bool) -> bool {
    match var_or_none(store, key) {
        Some(value) => TRUTHY_VALUES
            .iter()
            .any(|truthy| value.eq_ignore_ascii_case(truthy)),
        None => default,
    }
}

/// Read and parse `key`. Unset is `Ok(None)`.
pub fn parse_var<T, S>(store: &S, key: &str) -> Result<Option<T>, EnvError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    S: EnvStore + ?Sized,
{
    var_or_none(store, key)
        .map(|value| {
            value.parse::<T>().map_err(|e| EnvError::InvalidValue {
                var: key.to_string(),
                message: e.to_string(),
            })
        })
        .transpose()
}
