// oran-mirror: Gerrit to GitHub mirroring tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Bounded parallel fan-out of the synchronizer.
//!
//! ```text
//! names ──> collision check ──> JoinSet (one task per name)
//!                                  │  each task holds a Semaphore permit
//!                                  v
//!                          join_next() until empty
//!                                  │
//!                                  v
//!                              SyncReport
//! ```
//!
//! Returns only after every task has finished.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, OnceLock};

use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error, warn};

use super::sync::{SyncOutcome, SyncReport, Synchronizer};
use crate::git::normalize_repo_name;

fn bar_style() -> ProgressStyle {
    static STYLE: OnceLock<ProgressStyle> = OnceLock::new();
    STYLE
        .get_or_init(|| {
            ProgressStyle::with_template(
                "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-")
        })
        .clone()
}

/// Progress bar sized for `total` repositories.
#[must_use]
pub fn progress_bar(total: usize) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    pb.set_style(bar_style());
    pb
}

/// Splits names into those to sync and those whose directory is taken.
fn partition_collisions(names: &[String]) -> (Vec<String>, Vec<(String, SyncOutcome)>) {
    let mut owners: BTreeMap<String, &str> = BTreeMap::new();
    let mut accepted = Vec::new();
    let mut skipped = Vec::new();

    for name in names {
        let dir = normalize_repo_name(name);
        if let Some(first) = owners.get(&dir) {
            if *first == name.as_str() {
                debug!(repo = %name, "duplicate name in listing, skipped");
                continue;
            }
            warn!(repo = %name, with = %first, dir = %dir, "directory collision, not syncing");
            skipped.push((
                name.clone(),
                SyncOutcome::Collision {
                    with: (*first).to_string(),
                },
            ));
        } else {
            owners.insert(dir, name);
            accepted.push(name.clone());
        }
    }

    (accepted, skipped)
}

/// Runs `sync` for every name with at most `jobs` in flight.
pub async fn dispatch(
    sync: Arc<Synchronizer>,
    names: &[String],
    jobs: usize,
    progress: Option<ProgressBar>,
) -> SyncReport {
    debug_assert!(jobs > 0, "worker pool must not be empty");
    let (accepted, mut entries) = partition_collisions(names);
    if let Some(pb) = &progress {
        pb.inc(entries.len() as u64);
    }

    let semaphore = Arc::new(Semaphore::new(jobs));
    let mut set = JoinSet::new();
    let mut pending: BTreeSet<String> = accepted.iter().cloned().collect();

    for name in accepted {
        let sync = Arc::clone(&sync);
        let semaphore = Arc::clone(&semaphore);
        set.spawn(async move {
            let outcome = match semaphore.acquire_owned().await {
                Ok(_permit) => sync.sync(&name).await,
                Err(e) => SyncOutcome::Failed(format!("worker pool closed: {e}")),
            };
            (name, outcome)
        });
    }

    while let Some(result) = set.join_next().await {
        match result {
            Ok((name, outcome)) => {
                pending.remove(&name);
                if let Some(pb) = &progress {
                    pb.set_message(name.clone());
                    pb.inc(1);
                }
                entries.push((name, outcome));
            }
            Err(e) => error!(error = %e, "sync task panicked"),
        }
    }

    // Whatever never reported back panicked.
    for name in pending {
        entries.push((name, SyncOutcome::Failed("sync task panicked".to_string())));
    }

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    SyncReport::new(entries)
}
