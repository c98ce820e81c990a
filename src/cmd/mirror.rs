// oran-mirror: Gerrit to GitHub mirroring tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Handlers for the Gerrit side: access, list, sync, publish, mirror.

use std::sync::Arc;

use tracing::{info, warn};

use super::preflight;
use crate::cli::sync::{MirrorArgs, SyncArgs};
use crate::config::Config;
use crate::config::types::SyncConfig;
use crate::core::env::configure_environment;
use crate::core::process::{CommandRunner, ShellRunner};
use crate::error::{Result, bail_out};
use crate::mirror::{self, MirrorOptions, SyncReport, access, lister, publish};

fn shell_runner() -> Arc<dyn CommandRunner> {
    Arc::new(ShellRunner::new())
}

pub(super) fn sync_options(args: &SyncArgs, config: &Config) -> MirrorOptions {
    let mut options = MirrorOptions::from_config(config);
    if let Some(jobs) = args.jobs {
        let sync = SyncConfig {
            jobs,
            ..config.sync.clone()
        };
        options.jobs = sync.effective_jobs();
    }
    options.strict |= args.strict;
    options.progress = !args.no_progress;
    options
}

fn print_report(report: &SyncReport) {
    for (name, outcome) in report.entries() {
        println!("{name}: {outcome}");
    }
    println!("{}", report.summary());
}

/// Create the SSH key if missing and probe Gerrit.
///
/// # Errors
///
/// Never fails; problems are logged.
pub async fn run_access_command(config: &Config) -> Result<()> {
    preflight(&["ssh", "ssh-keygen"]);
    access::setup_access(shell_runner().as_ref(), config).await;
    Ok(())
}

/// Print every Gerrit project, one per line.
///
/// # Errors
///
/// Returns an error if the listing came back empty.
pub async fn run_list_command(config: &Config) -> Result<()> {
    preflight(&["ssh"]);
    let repos = lister::list_repositories(shell_runner().as_ref(), &config.gerrit).await;
    if repos.is_empty() {
        return Err(bail_out("no repositories listed").into());
    }
    for repo in &repos {
        println!("{repo}");
    }
    Ok(())
}

/// Clone or update every project and print the report.
///
/// # Errors
///
/// Returns an error if the modules root cannot be created, or in strict mode
/// when any repository failed.
pub async fn run_sync_command(args: &SyncArgs, config: &Config) -> Result<()> {
    preflight(&["git", "ssh"]);
    let options = sync_options(args, config);
    let report = mirror::sync_all(config, shell_runner(), &options).await?;
    print_report(&report);

    if options.strict && !report.all_succeeded() {
        let failed = report.failed().count();
        return Err(bail_out(format!("{failed} repositories failed to sync")).into());
    }
    Ok(())
}

/// Publish the modules root with the mirror environment applied.
///
/// # Errors
///
/// Returns an error if the environment cannot be prepared or the publish
/// was rolled back.
pub async fn run_publish_command(config: &Config) -> Result<()> {
    preflight(&["git"]);
    let env = configure_environment(config)?;
    let runner = ShellRunner::with_env(env);
    let summary = publish::publish(&runner, config).await?;

    if summary.pushed {
        info!(moved = summary.moved, "Published modules to {}", config.publish.repo_url);
    } else {
        warn!(moved = summary.moved, "Modules committed locally, push failed");
    }
    Ok(())
}

/// Full workflow.
///
/// # Errors
///
/// Propagates errors from [`mirror::run_mirror`].
pub async fn run_mirror_command(args: &MirrorArgs, config: &Config) -> Result<()> {
    preflight(&["git", "ssh", "ssh-keygen"]);
    let options = MirrorOptions {
        skip_access: args.skip_access,
        no_publish: args.no_publish,
        ..sync_options(&args.sync, config)
    };

    let run = mirror::run_mirror(config, shell_runner(), &options, |env| {
        Arc::new(ShellRunner::with_env(env)) as Arc<dyn CommandRunner>
    })
    .await?;

    print_report(&run.report);
    Ok(())
}
