//! Environment overlay loading for envoverlay.
//!
//! This crate reads `KEY=VALUE` files (canonically `.env`), merges them into
//! an environment store under an explicit override policy, and discovers such
//! files by walking up from a starting directory.
//!
//! The pieces compose as parse -> merge -> locate-then-parse-then-merge:
//!
//! ```no_run
//! use envoverlay_config::{EnvLoader, LoadOutcome};
//!
//! // Merge the closest `.env` into the process environment before spawning threads.
//! match EnvLoader::new().load()? {
//!     LoadOutcome::Loaded { path, report } => {
//!         println!("{}: {} applied", path.display(), report.applied().len())
//!     }
//!     LoadOutcome::NotFound | LoadOutcome::Disabled => {}
//! }
//! # Ok::<(), envoverlay_config::EnvError>(())
//! ```

pub mod constants;
mod error;
mod loader;
mod locate;
mod map;
mod merge;
mod parser;
mod store;
mod values;

pub use error::EnvError;
pub use loader::{EnvLoader, LoadOutcome, dotenv, load_dotenv};
pub use locate::{find_dotenv, find_upward};
pub use map::EnvMap;
pub use merge::{MergeReport, OverridePolicy, merge};
pub use parser::{dotenv_values, parse_str, read_env_file};
pub use store::{EnvStore, MemoryEnv, ProcessEnv};
pub use values::{flag, parse_var, var_or, var_or_none};
