// oran-mirror: Gerrit to GitHub mirroring tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Hosting repository provisioning.
//!
//! ```text
//! require_hosting_credentials()  (fatal, before any request)
//!        |
//!        v
//! HostingClient::provision   GET /repos/{user}/{name}
//!        |                   200 --> reuse
//!        |                   else POST /user/repos  201 | 422 --> ok
//!        v                                          other  --> error
//! push::push_local           local path --> clone URL
//! ```

pub mod client;
pub mod push;

#[cfg(test)]
mod tests;

use tracing::info;

use crate::config::Config;
use crate::core::process::CommandRunner;
use crate::error::{MirrorError, Result};

pub use client::{CreateOutcome, HostingClient};
pub use push::{PushOutcome, push_local};

/// What a provision run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProvisionRun {
    pub url: String,
    pub push: PushOutcome,
}

/// Ensure the hosting repository exists, then push `hosting.local_path`.
///
/// # Errors
///
/// Returns an error if credentials are missing, the API request fails, or
/// creation is rejected. Nothing is pushed in those cases.
pub async fn provision(config: &Config, runner: &dyn CommandRunner) -> Result<ProvisionRun> {
    config
        .require_hosting_credentials()
        .map_err(MirrorError::from)?;
    let hosting = &config.hosting;

    let client = HostingClient::from_config(hosting);
    let url = client.provision(&hosting.repo_name, hosting.private).await?;
    info!(url = %url, "Using repository {url}");

    let push = push_local(
        runner,
        &hosting.local_path,
        &url,
        &hosting.branch,
        &hosting.commit_message,
    )
    .await;

    Ok(ProvisionRun { url, push })
}
