// oran-mirror: Gerrit to GitHub mirroring tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git command lines.
//!
//! ```text
//! cmd.rs --> ShellCommand --> CommandRunner --> git
//! ```
//!
//! Each function only builds the command; callers decide where it runs and
//! what a failure means.

use std::path::Path;

use crate::core::process::ShellCommand;

/// Disables the clone-protection hook check for repositories with hooks.
pub const CLONE_PROTECTION_VAR: &str = "GIT_CLONE_PROTECTION_ACTIVE";

/// `git clone {url} "{dest}"` with clone protection disabled.
pub fn clone(url: &str, dest: &Path) -> ShellCommand {
    ShellCommand::new(format!("git clone {url} \"{}\"", dest.display()))
        .env(CLONE_PROTECTION_VAR, "false")
}

/// `git pull` in the current branch.
pub fn pull(repo_path: &Path) -> ShellCommand {
    ShellCommand::new("git pull").cwd(repo_path)
}

/// `git pull origin {branch}`.
pub fn pull_branch(repo_path: &Path, branch: &str) -> ShellCommand {
    ShellCommand::new(format!("git pull origin {branch}")).cwd(repo_path)
}

/// Create `branch`, or check it out when it already exists.
pub fn switch_or_checkout(repo_path: &Path, branch: &str) -> ShellCommand {
    ShellCommand::new(format!("git switch -c {branch} || git checkout {branch}"))
        .cwd(repo_path)
}

pub fn init(repo_path: &Path) -> ShellCommand {
    ShellCommand::new("git init").cwd(repo_path)
}

/// `git branch -m {branch}`.
pub fn rename_branch(repo_path: &Path, branch: &str) -> ShellCommand {
    ShellCommand::new(format!("git branch -m {branch}")).cwd(repo_path)
}

/// `git remote add origin {url}`.
pub fn add_origin(repo_path: &Path, url: &str) -> ShellCommand {
    ShellCommand::new(format!("git remote add origin {url}")).cwd(repo_path)
}

pub fn add_all(repo_path: &Path) -> ShellCommand {
    ShellCommand::new("git add .").cwd(repo_path)
}

/// `git commit -m '{message}'` (single-quoted message).
pub fn commit(repo_path: &Path, message: &str) -> ShellCommand {
    ShellCommand::new(format!("git commit -m '{message}'")).cwd(repo_path)
}

/// `git commit -m "{message}"` (double-quoted message).
pub fn commit_quoted(repo_path: &Path, message: &str) -> ShellCommand {
    ShellCommand::new(format!("git commit -m \"{message}\"")).cwd(repo_path)
}

/// `git push -u origin {branch}`.
pub fn push_upstream(repo_path: &Path, branch: &str) -> ShellCommand {
    ShellCommand::new(format!("git push -u origin {branch}")).cwd(repo_path)
}

/// `git status --porcelain`; empty stdout means nothing to commit.
pub fn status_porcelain(repo_path: &Path) -> ShellCommand {
    ShellCommand::new("git status --porcelain")
        .cwd(repo_path)
        .quiet()
}
