// oran-mirror: Gerrit to GitHub mirroring tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Clone-or-update for a single Gerrit project.
//!
//! ```text
//! sync(name)
//!   path = modules_dir / normalize(name)
//!   populated? --yes--> git pull --> Updated | Failed
//!       | no
//!       v
//!   git clone --> populated? --no--> remove, clone once more
//!       |                                 |
//!       v                                 v
//!   fix permissions  <--------------------+
//!   git switch -c B || git checkout B
//!       |
//!       v
//!   populated? Cloned{retried} : EmptyAfterRetry
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, warn};

use crate::config::Config;
use crate::config::types::GerritConfig;
use crate::core::process::{CommandRunner, ShellCommand};
use crate::git::{self, normalize_repo_name};
use crate::utility::fs::is_populated;

/// What happened to one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Already present; `git pull` succeeded.
    Updated,
    /// Freshly cloned, possibly on the second attempt.
    Cloned { retried: bool },
    /// Both clone attempts left the directory absent or empty.
    EmptyAfterRetry,
    /// `git pull` on an existing clone failed.
    Failed(String),
    /// Another name maps to the same local directory; not synced.
    Collision { with: String },
}

impl SyncOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Updated | Self::Cloned { .. })
    }
}

impl fmt::Display for SyncOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Updated => f.write_str("updated"),
            Self::Cloned { retried: false } => f.write_str("cloned"),
            Self::Cloned { retried: true } => f.write_str("cloned after retry"),
            Self::EmptyAfterRetry => f.write_str("empty after retry"),
            Self::Failed(reason) => write!(f, "failed: {reason}"),
            Self::Collision { with } => write!(f, "skipped, directory collides with '{with}'"),
        }
    }
}

/// Command that broadens permissions on a fresh clone.
pub fn permissions_command(path: &Path) -> ShellCommand {
    #[cfg(windows)]
    {
        ShellCommand::new(format!(
            "icacls \"{}\" /grant Everyone:F /t /c /q",
            path.display()
        ))
    }
    #[cfg(not(windows))]
    {
        ShellCommand::new(format!("chmod -R a+rwX \"{}\"", path.display()))
    }
}

/// Synchronizes Gerrit projects into the modules root.
#[derive(Clone)]
pub struct Synchronizer {
    gerrit: GerritConfig,
    modules_dir: PathBuf,
    branch: String,
    runner: Arc<dyn CommandRunner>,
}

impl Synchronizer {
    pub fn new(config: &Config, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            gerrit: config.gerrit.clone(),
            modules_dir: config.sync.modules_dir.clone(),
            branch: config.sync.branch.clone(),
            runner,
        }
    }

    #[must_use]
    pub fn modules_dir(&self) -> &Path {
        &self.modules_dir
    }

    /// Local directory for `name`.
    #[must_use]
    pub fn local_path(&self, name: &str) -> PathBuf {
        self.modules_dir.join(normalize_repo_name(name))
    }

    /// Clone or update one repository.
    pub async fn sync(&self, name: &str) -> SyncOutcome {
        let url = git::clone_url(&self.gerrit, name);
        let path = self.local_path(name);

        if is_populated(&path) {
            info!(repo = %name, "Updating {name}...");
            let output = self.runner.run(&git::cmd::pull(&path)).await;
            return if output.success() {
                SyncOutcome::Updated
            } else {
                SyncOutcome::Failed(output.stderr().trim().to_string())
            };
        }

        info!(repo = %name, "Cloning {name}...");
        let clone = git::cmd::clone(&url, &path);
        self.runner.run(&clone).await;

        let mut retried = false;
        if !is_populated(&path) {
            warn!(repo = %name, "Repository {name} is empty. Retrying...");
            let _ = tokio::fs::remove_dir_all(&path).await;
            self.runner.run(&clone).await;
            retried = true;
        }

        if !path.exists() {
            warn!(repo = %name, path = %path.display(), "clone produced no directory");
        }
        info!(repo = %name, path = %path.display(), "Fixing permissions for {}...", path.display());
        self.runner.run(&permissions_command(&path)).await;
        self.runner
            .run(&git::cmd::switch_or_checkout(&path, &self.branch))
            .await;

        if is_populated(&path) {
            SyncOutcome::Cloned { retried }
        } else {
            SyncOutcome::EmptyAfterRetry
        }
    }
}

/// Per-repository outcomes of one dispatch, sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    entries: Vec<(String, SyncOutcome)>,
}

impl SyncReport {
    #[must_use]
    pub fn new(mut entries: Vec<(String, SyncOutcome)>) -> Self {
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Self { entries }
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &SyncOutcome)> {
        self.entries.iter().map(|(name, outcome)| (name.as_str(), outcome))
    }

    /// Entries that did not end in `Updated` or `Cloned`.
    pub fn failed(&self) -> impl Iterator<Item = (&str, &SyncOutcome)> {
        self.entries().filter(|(_, outcome)| !outcome.is_success())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SyncOutcome> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, outcome)| outcome)
    }

    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.failed().next().is_none()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One-line tally, e.g. `3 repositories: 1 updated, 1 cloned, 1 failed`.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut updated = 0;
        let mut cloned = 0;
        let mut failed = 0;
        for (_, outcome) in self.entries() {
            match outcome {
                SyncOutcome::Updated => updated += 1,
                SyncOutcome::Cloned { .. } => cloned += 1,
                _ => failed += 1,
            }
        }
        format!(
            "{} repositories: {updated} updated, {cloned} cloned, {failed} failed",
            self.len()
        )
    }
}
