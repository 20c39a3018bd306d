//! Environment stores that merges write into.
//!
//! Responsibilities:
//! - Abstract the process environment behind the [`EnvStore`] trait.
//! - Provide the real process-backed store and an in-memory store.
//!
//! Does NOT handle:
//! - Override policy decisions (see `merge.rs`).
//!
//! Invariants / Assumptions:
//! - `ProcessEnv` is the only type in the workspace that writes to the process environment.
//! - `ProcessEnv` adds no synchronization. Writes are sound only while no other
//!   thread reads or writes the environment, so merges happen once, early,
//!   before worker threads are spawned.

use std::collections::BTreeMap;

use crate::error::EnvError;

/// A mutable key/value environment.
pub trait EnvStore {
    /// Current value of `key`, if present and valid UTF-8.
    fn get(&self, key: &str) -> Option<String>;

    /// Whether `key` is present at all.
    fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Set `key` to `value`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), EnvError>;
}

impl<S: EnvStore + ?Sized> EnvStore for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn contains(&self, key: &str) -> bool {
        (**self).contains(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), EnvError> {
        (**self).set(key, value)
    }
}

/// The running process's environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ProcessEnv {
    fn validate(key: &str, value: &str) -> Result<(), EnvError> {
        let reason = if key.is_empty() {
            "key is empty"
        } else if key.contains('=') {
            "key contains '='"
        } else if key.contains('\0') {
            "key contains a NUL byte"
        } else if value.contains('\0') {
            "value contains a NUL byte"
        } else {
            return Ok(());
        };
        Err(EnvError::InvalidEntry {
            key: key.to_string(),
            reason,
        })
    }
}

impl EnvStore for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    // A non-UTF-8 value is still present and must not be overwritten.
    fn contains(&self, key: &str) -> bool {
        std::env::var_os(key).is_some()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), EnvError> {
        Self::validate(key, value)?;
        // SAFETY: callers merge before spawning threads that touch the
        // environment (see module docs); key and value were validated above.
        unsafe {
            std::env::set_var(key, value);
        }
        Ok(())
    }
}

/// An in-memory environment, for isolated tests and dry runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryEnv {
    vars: BTreeMap<String, String>,
}

impl MemoryEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all variables, sorted by key.
    pub fn vars(&self) -> &BTreeMap<String, String> {
        &self.vars
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MemoryEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvStore for MemoryEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn contains(&self, key: &str) -> bool {
        self.vars.contains_key(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), EnvError> {
        self.vars.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_memory_env_roundtrip() {
        let mut env = MemoryEnv::from_iter([("EXISTING", "1")]);
        assert!(env.contains("EXISTING"));
        assert!(!env.contains("NEW"));

        env.set("NEW", "2").unwrap();
        assert_eq!(env.get("NEW"), Some("2".to_string()));
        assert_eq!(env.vars().len(), 2);
    }

    #[test]
    #[serial]
    fn test_process_env_set_and_get() {
        let key = "_ENVOVERLAY_TEST_STORE_SET";
        temp_env::with_vars([(key, None::<&str>)], || {
            let mut env = ProcessEnv;
            assert!(!env.contains(key));

            env.set(key, "value").unwrap();
            assert_eq!(env.get(key), Some("value".to_string()));
            assert_eq!(std::env::var(key).as_deref(), Ok("value"));
        });
    }

    #[test]
    fn test_process_env_rejects_unrepresentable_entries() {
        let mut env = ProcessEnv;
        for (key, value) in [("", "x"), ("A=B", "x"), ("A\0B", "x"), ("OK_KEY", "a\0b")] {
            match env.set(key, value) {
                Err(EnvError::InvalidEntry { .. }) => {}
                other => panic!("Expected InvalidEntry for {:?}, got {:?}", key, other),
            }
        }
    }

    #[test]
    fn test_mut_ref_forwards_to_store() {
        fn write<S: EnvStore>(mut store: S) {
            store.set("FORWARDED", "yes").unwrap();
        }

        let mut env = MemoryEnv::new();
        write(&mut env);
        assert_eq!(env.get("FORWARDED"), Some("yes".to_string()));
    }
}
