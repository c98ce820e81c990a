// oran-mirror: Gerrit to GitHub mirroring tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Publish the modules root as one fresh repository.
//!
//! ```text
//! rm -rf repo_dir; mkdir repo_dir
//! git init; git branch -m B; git remote add origin URL
//!   ┌─ MoveGuard ─────────────────────────────────────┐
//!   │ move modules_dir/* -> repo_dir/                 │
//!   │ git add .                                       │
//!   │ git commit -m '...'                             │
//!   │   any failure: move entries back, return error  │
//!   └─────────────────────────────────────────────────┘
//! git push -u origin B   (failure logged, commit stays local)
//! ```

use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::config::Config;
use crate::core::process::{CommandRunner, ShellCommand};
use crate::error::{FsError, GitError, MirrorError, MirrorResult};
use crate::git;
use crate::utility::fs::copy::move_entry;
use crate::utility::fs::list_entries;

/// Result of a publish that got as far as a local commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublishSummary {
    /// Entries moved out of the modules root.
    pub moved: usize,
    /// Whether `git push` succeeded.
    pub pushed: bool,
}

/// Tracks entries moved into the destination so they can be put back.
///
/// Dropping an armed guard restores synchronously.
struct MoveGuard {
    source: PathBuf,
    dest: PathBuf,
    moved: Vec<std::ffi::OsString>,
    armed: bool,
}

impl MoveGuard {
    const fn new(source: PathBuf, dest: PathBuf) -> Self {
        Self {
            source,
            dest,
            moved: Vec::new(),
            armed: true,
        }
    }

    fn record(&mut self, name: std::ffi::OsString) {
        self.moved.push(name);
    }

    /// Keep the moved entries where they are.
    fn commit(&mut self) {
        self.armed = false;
    }

    /// Move every recorded entry back; returns how many made it.
    async fn restore(&mut self) -> usize {
        self.armed = false;
        let mut restored = 0;
        for name in self.moved.drain(..).rev() {
            let from = self.dest.join(&name);
            let to = self.source.join(&name);
            match move_entry(&from, &to).await {
                Ok(()) => restored += 1,
                Err(e) => error!(path = %from.display(), error = %e, "failed to restore module"),
            }
        }
        restored
    }
}

impl Drop for MoveGuard {
    fn drop(&mut self) {
        if self.armed {
            for name in self.moved.drain(..).rev() {
                let _ = std::fs::rename(self.dest.join(&name), self.source.join(&name));
            }
        }
    }
}

fn io_error(path: &Path, source: std::io::Error) -> MirrorError {
    FsError::IoError {
        path: path.display().to_string(),
        source,
    }
    .into()
}

async fn rolled_back(guard: &mut MoveGuard, step: &str, message: String) -> MirrorError {
    let restored = guard.restore().await;
    warn!(step = %step, restored, "publish rolled back");
    GitError::PublishRolledBack {
        step: step.to_string(),
        restored,
        message,
    }
    .into()
}

/// Run `command` and turn a failure into a rollback.
async fn guarded_step(
    runner: &dyn CommandRunner,
    guard: &mut MoveGuard,
    command: &ShellCommand,
) -> MirrorResult<()> {
    let output = runner.run(command).await;
    if output.success() {
        return Ok(());
    }
    let message = if output.stderr().trim().is_empty() {
        output.stdout().trim().to_string()
    } else {
        output.stderr().trim().to_string()
    };
    Err(rolled_back(guard, command.line(), message).await)
}

/// Rebuild `publish.repo_dir` from the modules root and push it.
///
/// # Errors
///
/// Returns an error if the modules root is missing, the destination cannot
/// be recreated, or a move, `git add` or `git commit` fails. In the last
/// case the moved modules are back in the modules root.
pub async fn publish(runner: &dyn CommandRunner, config: &Config) -> MirrorResult<PublishSummary> {
    let modules_dir = config.sync.modules_dir.as_path();
    let repo_dir = config.publish.repo_dir.as_path();
    let branch = config.publish.branch.as_str();

    if !modules_dir.is_dir() {
        return Err(io_error(
            modules_dir,
            std::io::Error::new(std::io::ErrorKind::NotFound, "modules root not found"),
        ));
    }

    if repo_dir.exists() {
        tokio::fs::remove_dir_all(repo_dir)
            .await
            .map_err(|e| io_error(repo_dir, e))?;
    }
    tokio::fs::create_dir_all(repo_dir)
        .await
        .map_err(|e| io_error(repo_dir, e))?;

    runner.run(&git::cmd::init(repo_dir)).await;
    runner.run(&git::cmd::rename_branch(repo_dir, branch)).await;
    runner
        .run(&git::cmd::add_origin(repo_dir, &config.publish.repo_url))
        .await;

    let entries = list_entries(modules_dir)
        .await
        .map_err(|e| MirrorError::Other(format!("{e:#}").into_boxed_str()))?;

    let mut guard = MoveGuard::new(modules_dir.to_path_buf(), repo_dir.to_path_buf());
    for entry in entries {
        let Some(name) = entry.file_name().map(std::ffi::OsStr::to_os_string) else {
            continue;
        };
        if let Err(e) = move_entry(&entry, &repo_dir.join(&name)).await {
            return Err(rolled_back(&mut guard, "move", e.to_string()).await);
        }
        guard.record(name);
    }
    let moved = guard.moved.len();
    info!(moved, dest = %repo_dir.display(), "Moved modules into publish directory");

    guarded_step(runner, &mut guard, &git::cmd::add_all(repo_dir)).await?;
    guarded_step(
        runner,
        &mut guard,
        &git::cmd::commit(repo_dir, &config.publish.commit_message),
    )
    .await?;
    guard.commit();

    let pushed = runner
        .run(&git::cmd::push_upstream(repo_dir, branch))
        .await
        .success();
    if !pushed {
        error!(
            dest = %repo_dir.display(),
            "Push failed; the commit is kept locally in the publish directory"
        );
    }

    Ok(PublishSummary { moved, pushed })
}
