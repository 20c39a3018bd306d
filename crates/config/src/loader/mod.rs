//! Env file loader.
//!
//! Responsibilities:
//! - Provide a builder-pattern `EnvLoader` that composes locate, parse and merge.
//! - Enforce the `DOTENV_DISABLED` gate so tests can opt out of ambient `.env` files.
//! - Offer `dotenv()` / `load_dotenv()` shortcuts for entrypoints.
//!
//! Does NOT handle:
//! - Line parsing (see `parser.rs`) or discovery (see `locate.rs`).
//! - Typed reads of loaded values (see `values.rs`).
//!
//! Invariants / Assumptions:
//! - Existing variables win unless `override_existing(true)` is set.
//! - A missing file is a no-op unless `required(true)` is set.
//! - `load()` writes to the process environment and must run before threads are spawned.

mod builder;

#[cfg(test)]
mod tests;

pub use builder::{EnvLoader, LoadOutcome, dotenv, load_dotenv};
