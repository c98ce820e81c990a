// oran-mirror: Gerrit to GitHub mirroring tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Push a local directory to the provisioned repository.
//!
//! ```text
//! .git present?  yes --> git pull origin B
//!                no  --> git init; git branch -m B; git remote add origin URL
//! git add .
//! git status --porcelain  empty --> NothingToCommit
//!                         else  --> git commit -m "..."; git push -u origin B
//! ```

use std::fmt;
use std::path::Path;

use tracing::{error, info};

use crate::core::process::CommandRunner;
use crate::git::{self, is_repo};

/// How [`push_local`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushOutcome {
    /// Committed and pushed (the push itself may still have failed; see log).
    Pushed,
    /// `git status --porcelain` was empty after staging.
    NothingToCommit,
    /// The local path does not exist.
    LocalPathMissing,
}

impl fmt::Display for PushOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pushed => "pushed",
            Self::NothingToCommit => "nothing to commit",
            Self::LocalPathMissing => "local path missing",
        })
    }
}

/// Stage, commit and push everything under `path`.
pub async fn push_local(
    runner: &dyn CommandRunner,
    path: &Path,
    url: &str,
    branch: &str,
    message: &str,
) -> PushOutcome {
    if !path.exists() {
        error!(path = %path.display(), "Local path {} does not exist.", path.display());
        return PushOutcome::LocalPathMissing;
    }

    if is_repo(path) {
        runner.run(&git::cmd::pull_branch(path, branch)).await;
    } else {
        runner.run(&git::cmd::init(path)).await;
        runner.run(&git::cmd::rename_branch(path, branch)).await;
        runner.run(&git::cmd::add_origin(path, url)).await;
    }

    runner.run(&git::cmd::add_all(path)).await;

    let status = runner.run(&git::cmd::status_porcelain(path)).await;
    if status.stdout().trim().is_empty() {
        info!(path = %path.display(), "No changes to commit.");
        return PushOutcome::NothingToCommit;
    }

    runner.run(&git::cmd::commit_quoted(path, message)).await;
    if runner
        .run(&git::cmd::push_upstream(path, branch))
        .await
        .success()
    {
        info!(url = %url, "Successfully pushed to {url}");
    }
    PushOutcome::Pushed
}
