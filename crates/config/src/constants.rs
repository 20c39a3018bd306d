//! Centralized constants for env file loading.

/// Canonical file name searched for during discovery.
pub const DEFAULT_ENV_FILENAME: &str = ".env";

/// Process environment variable that disables env file loading when set to
/// `1` or `true`.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

/// Values accepted as `true` by [`crate::flag`], compared case-insensitively.
pub const TRUTHY_VALUES: &[&str] = &["1", "true", "yes", "on"];
