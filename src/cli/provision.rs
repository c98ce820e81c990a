// oran-mirror: Gerrit to GitHub mirroring tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI arguments for the `provision` command.
//!
//! ```text
//! oran-mirror provision --github-user USER --github-token $TOKEN
//!   GET  /repos/USER/NAME     200 --> reuse
//!   POST /user/repos          201 | 422 --> ok
//!   push --local-path to https://github.com/USER/NAME.git
//! ```
//!
//! Every flag overrides the matching `hosting.*` key.

use clap::Args;
use std::path::PathBuf;

/// Arguments for the `provision` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ProvisionArgs {
    /// Hosting account name.
    #[arg(long = "github-user", value_name = "USER")]
    pub github_user: Option<String>,

    /// GitHub API key.
    #[arg(long = "github-token", value_name = "TOKEN", env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Repository to check or create.
    #[arg(long = "repo-name", value_name = "NAME")]
    pub repo_name: Option<String>,

    /// Create the repository as private.
    #[arg(long)]
    pub private: bool,

    /// Directory to push.
    #[arg(long = "local-path", value_name = "DIR")]
    pub local_path: Option<PathBuf>,
}
