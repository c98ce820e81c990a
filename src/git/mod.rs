// oran-mirror: Gerrit to GitHub mirroring tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations module.
//!
//! ```text
//!   cmd.rs                 mod.rs
//!   clone/pull/switch      normalize_repo_name
//!   init/branch/remote     clone_url
//!   add/commit/push        is_repo
//!   status --porcelain
//!        |
//!        v
//!   ShellCommand --> CommandRunner --> git CLI
//! ```
//!
//! Everything goes through the git CLI so the user's SSH agent and
//! credential helpers apply.

pub mod cmd;


use std::path::Path;

use crate::config::types::GerritConfig;

/// Local directory name for a Gerrit project: `/` becomes `-`.
///
/// ```
/// use oran_mirror::git::normalize_repo_name;
///
/// assert_eq!(normalize_repo_name("ric-plt/e2mgr"), "ric-plt-e2mgr");
/// ```
#[must_use]
pub fn normalize_repo_name(name: &str) -> String {
    name.replace('/', "-")
}

/// SSH clone URL: `ssh://{user}@{host}:{port}/{name}.git`.
#[must_use]
pub fn clone_url(gerrit: &GerritConfig, name: &str) -> String {
    format!(
        "ssh://{}@{}:{}/{}.git",
        gerrit.username, gerrit.host, gerrit.port, name
    )
}

/// True when `path` holds a `.git` entry.
#[must_use]
pub fn is_repo(path: &Path) -> bool {
    path.join(".git").exists()
}
