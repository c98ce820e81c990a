// oran-mirror: Gerrit to GitHub mirroring tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Gerrit project listing over SSH.

use tracing::{error, info};

use crate::config::types::GerritConfig;
use crate::core::process::{CommandRunner, ShellCommand};

/// `ssh -p {port} {user}@{host} gerrit ls-projects`.
pub fn ls_projects_command(gerrit: &GerritConfig) -> ShellCommand {
    ShellCommand::new(format!(
        "ssh -p {} {}@{} gerrit ls-projects",
        gerrit.port, gerrit.username, gerrit.host
    ))
}

/// One project name per non-blank line, in server order.
#[must_use]
pub fn parse_project_list(stdout: &str) -> Vec<String> {
    stdout
        .trim()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// List every project visible to the configured account.
///
/// A failed listing is logged and yields an empty list.
pub async fn list_repositories(runner: &dyn CommandRunner, gerrit: &GerritConfig) -> Vec<String> {
    let output = runner.run(&ls_projects_command(gerrit).quiet()).await;
    if !output.success() {
        error!("Failed to retrieve repository list.");
        return Vec::new();
    }

    let repos = parse_project_list(output.stdout());
    info!(count = repos.len(), "Available repositories: {repos:?}");
    repos
}
