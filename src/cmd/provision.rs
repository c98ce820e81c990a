// oran-mirror: Gerrit to GitHub mirroring tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Provision command: hosting repository check/create and local push.

use super::preflight;
use crate::cli::provision::ProvisionArgs;
use crate::config::Config;
use crate::core::process::ShellRunner;
use crate::error::Result;
use crate::hosting::{self, PushOutcome};

/// Config with the command-line flags applied on top.
#[must_use]
pub fn apply_args(args: &ProvisionArgs, config: &Config) -> Config {
    let mut config = config.clone();
    let hosting = &mut config.hosting;
    if let Some(user) = &args.github_user {
        hosting.username.clone_from(user);
    }
    if let Some(token) = &args.github_token {
        hosting.token.clone_from(token);
    }
    if let Some(name) = &args.repo_name {
        hosting.repo_name.clone_from(name);
    }
    if let Some(path) = &args.local_path {
        hosting.local_path.clone_from(path);
    }
    hosting.private |= args.private;
    config
}

/// Main handler for the provision command.
///
/// # Errors
///
/// Returns an error if credentials are missing, the hosting API rejects the
/// request, or the local path does not exist.
pub async fn run_provision_command(args: &ProvisionArgs, config: &Config) -> Result<()> {
    let config = apply_args(args, config);
    preflight(&["git"]);

    let run = hosting::provision(&config, &ShellRunner::new()).await?;
    println!("{}", run.url);

    match run.push {
        PushOutcome::LocalPathMissing => Err(anyhow::anyhow!(
            "local path {} does not exist",
            config.hosting.local_path.display()
        )),
        PushOutcome::Pushed | PushOutcome::NothingToCommit => Ok(()),
    }
}
