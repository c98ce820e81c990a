// oran-mirror: Gerrit to GitHub mirroring tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem helpers for the modules root and publish directory.
//!
//! ```text
//! is_populated()   exists and has at least one entry (hidden ones count)
//! list_entries()   direct children, sorted
//! copy:  copy_dir_contents_async()  recursive directory copy
//!        move_entry()               rename, else copy + remove
//! ```

pub mod copy;

#[cfg(test)]
mod tests;

use anyhow::Context;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// True when `path` is a directory with at least one entry.
///
/// Missing paths and unreadable directories count as empty.
#[must_use]
pub fn is_populated(path: &Path) -> bool {
    std::fs::read_dir(path).is_ok_and(|mut entries| entries.next().is_some())
}

/// Direct children of `dir`, sorted by path.
///
/// # Errors
///
/// Returns an error if the directory cannot be read.
pub async fn list_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .with_context(|| format!("failed to read directory {}", dir.display()))?;

    let mut paths = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .with_context(|| format!("failed to read entry from {}", dir.display()))?
    {
        paths.push(entry.path());
    }
    paths.sort();
    Ok(paths)
}
