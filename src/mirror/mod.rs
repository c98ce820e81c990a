// oran-mirror: Gerrit to GitHub mirroring tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Gerrit mirroring workflow.
//!
//! ```text
//! access::setup_access      key + probe
//!        |
//!        v
//! lister::list_repositories ssh gerrit ls-projects
//!        |
//!        v
//! dispatch::dispatch        Synchronizer per name, bounded pool, joined
//!        |                  --> SyncReport
//!        v
//! core::env::configure_environment --> Env overlay
//!        |
//!        v
//! publish::publish          runner with the overlay
//! ```

pub mod access;
pub mod dispatch;
pub mod lister;
pub mod publish;
pub mod sync;

#[cfg(test)]
pub(crate) mod test_utils;

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::Config;
use crate::core::env::{Env, configure_environment};
use crate::core::process::CommandRunner;
use crate::error::{Result, bail_out};

pub use publish::PublishSummary;
pub use sync::{SyncOutcome, SyncReport, Synchronizer};

/// Switches for [`run_mirror`].
#[derive(Debug, Clone, Copy)]
pub struct MirrorOptions {
    /// Skip key setup and the SSH probe.
    pub skip_access: bool,
    /// Stop after syncing.
    pub no_publish: bool,
    /// Refuse to publish when any repository failed.
    pub strict: bool,
    /// Worker pool size.
    pub jobs: usize,
    /// Show a progress bar during the sync.
    pub progress: bool,
}

impl Default for MirrorOptions {
    fn default() -> Self {
        Self {
            skip_access: false,
            no_publish: false,
            strict: false,
            jobs: 1,
            progress: false,
        }
    }
}

impl MirrorOptions {
    /// Options taken from the `sync` section.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            strict: config.sync.strict,
            jobs: config.sync.effective_jobs(),
            ..Self::default()
        }
    }
}

/// What a mirror run did.
#[derive(Debug, Clone)]
pub struct MirrorRun {
    pub report: SyncReport,
    pub publish: Option<PublishSummary>,
}

/// List every project and sync it into the modules root.
///
/// # Errors
///
/// Returns an error if the modules root cannot be created.
pub async fn sync_all(
    config: &Config,
    runner: Arc<dyn CommandRunner>,
    options: &MirrorOptions,
) -> Result<SyncReport> {
    let names = lister::list_repositories(runner.as_ref(), &config.gerrit).await;

    tokio::fs::create_dir_all(&config.sync.modules_dir)
        .await
        .map_err(|e| {
            anyhow::anyhow!(
                "failed to create modules root {}: {e}",
                config.sync.modules_dir.display()
            )
        })?;

    let progress = options
        .progress
        .then(|| dispatch::progress_bar(names.len()));
    let synchronizer = Arc::new(Synchronizer::new(config, runner));
    let report = dispatch::dispatch(synchronizer, &names, options.jobs, progress).await;

    info!("{}", report.summary());
    for (name, outcome) in report.failed() {
        warn!(repo = %name, "{name}: {outcome}");
    }

    Ok(report)
}

/// Full workflow: access, list, sync, environment, publish.
///
/// `publish_runner` receives the environment overlay and returns the runner
/// used for the publish stage.
///
/// # Errors
///
/// Returns an error if the sync cannot start, if `strict` is set and any
/// repository failed, or if the publish had to be rolled back.
pub async fn run_mirror<F>(
    config: &Config,
    runner: Arc<dyn CommandRunner>,
    options: &MirrorOptions,
    publish_runner: F,
) -> Result<MirrorRun>
where
    F: FnOnce(Env) -> Arc<dyn CommandRunner>,
{
    if !options.skip_access {
        access::setup_access(runner.as_ref(), config).await;
    }

    let report = sync_all(config, runner, options).await?;

    if options.no_publish {
        info!("Publishing skipped");
        return Ok(MirrorRun {
            report,
            publish: None,
        });
    }

    if options.strict && !report.all_succeeded() {
        let failed = report.failed().count();
        return Err(bail_out(format!(
            "{failed} repositories failed to sync; not publishing in strict mode"
        ))
        .into());
    }

    let env = configure_environment(config)?;
    let publish_runner = publish_runner(env);
    let summary = publish::publish(publish_runner.as_ref(), config).await?;

    if summary.pushed {
        info!("ORAN modules downloaded and pushed to your new repository successfully!");
    } else {
        warn!("ORAN modules committed locally, but the push failed");
    }

    Ok(MirrorRun {
        report,
        publish: Some(summary),
    })
}
