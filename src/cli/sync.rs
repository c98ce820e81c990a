// oran-mirror: Gerrit to GitHub mirroring tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for `sync` and `mirror`.
//!
//! ```text
//! sync   [-j N] [--strict]
//! mirror [-j N] [--strict] [--skip-access] [--no-publish] [--no-progress]
//! ```

use clap::Args;

/// Arguments for the `sync` command.
#[derive(Debug, Clone, Default, Args)]
pub struct SyncArgs {
    /// Number of repositories synced at once (defaults to `sync.jobs`, 0 = all cores).
    #[arg(short = 'j', long = "jobs", value_name = "N")]
    pub jobs: Option<usize>,

    /// Exit with an error when any repository failed to sync.
    #[arg(long)]
    pub strict: bool,

    /// Hide the progress bar.
    #[arg(long = "no-progress")]
    pub no_progress: bool,
}

/// Arguments for the `mirror` command.
#[derive(Debug, Clone, Default, Args)]
pub struct MirrorArgs {
    #[command(flatten)]
    pub sync: SyncArgs,

    /// Skip SSH key setup and the connection probe.
    #[arg(long = "skip-access")]
    pub skip_access: bool,

    /// Stop after syncing.
    #[arg(long = "no-publish")]
    pub no_publish: bool,
}
