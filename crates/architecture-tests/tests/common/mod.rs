//! Shared helpers for static source checks.

#![allow(dead_code)]

use anyhow::{Context, bail};
use std::fs;
use std::path::{Path, PathBuf};

/// A Rust source file under `crates/`, excluding this crate.
pub struct SourceFile {
    pub path: PathBuf,
    pub content: String,
}

impl SourceFile {
    /// Whether the whole file is test code (integration tests or `*_tests.rs`).
    pub fn is_test_file(&self) -> bool {
        let path = self.path.to_string_lossy().replace('\\', "/");
        path.contains("/tests/") || path.ends_with("_tests.rs")
    }

    /// Source before the first `#[cfg(test)]`.
    pub fn non_test_code(&self) -> &str {
        match self.content.find("#[cfg(test)]") {
            Some(idx) => &self.content[..idx],
            None => &self.content,
        }
    }
}

/// Find the workspace root by looking for Cargo.toml with [workspace].
pub fn workspace_root() -> anyhow::Result<PathBuf> {
    for dir in Path::new(env!("CARGO_MANIFEST_DIR")).ancestors() {
        let cargo_toml = dir.join("Cargo.toml");
        if cargo_toml.is_file()
            && fs::read_to_string(&cargo_toml)
                .with_context(|| format!("read {}", cargo_toml.display()))?
                .contains("[workspace]")
        {
            return Ok(dir.to_path_buf());
        }
    }
    bail!("no workspace Cargo.toml above {}", env!("CARGO_MANIFEST_DIR"))
}

/// All `.rs` files under `crates/`, skipping build output and this crate.
pub fn rust_sources() -> anyhow::Result<Vec<SourceFile>> {
    let crates_dir = workspace_root()?.join("crates");
    let mut files = Vec::new();

    for entry in walkdir::WalkDir::new(&crates_dir)
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name();
            name != "target" && name != "architecture-tests"
        })
    {
        let entry = entry.context("walk crates/")?;
        let path = entry.path();
        if path.extension().is_none_or(|ext| ext != "rs") {
            continue;
        }
        let content =
            fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        files.push(SourceFile {
            path: path.to_path_buf(),
            content,
        });
    }

    Ok(files)
}
