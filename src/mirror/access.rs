// oran-mirror: Gerrit to GitHub mirroring tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! SSH key setup and a Gerrit connectivity probe.
//!
//! ```text
//! {key}.pub missing? --> ssh-keygen
//! {key}.pub present? --> print it for the Gerrit settings page
//! ssh ... gerrit ls-projects (probe)
//! ```
//!
//! Nothing here stops the run; every problem is logged.

use tracing::{error, info};

use super::lister::ls_projects_command;
use crate::config::Config;
use crate::core::process::{CommandRunner, ShellCommand};

/// `ssh-keygen -t {type} -b {bits} -C "{email}" -f {key} -N ""`.
pub fn keygen_command(config: &Config) -> ShellCommand {
    ShellCommand::new(format!(
        "ssh-keygen -t {} -b {} -C \"{}\" -f {} -N \"\"",
        config.ssh.key_type,
        config.ssh.key_bits,
        config.gerrit.email,
        config.ssh.resolved_key_path().display()
    ))
}

/// Make sure a key pair exists, show the public key and probe Gerrit.
pub async fn setup_access(runner: &dyn CommandRunner, config: &Config) {
    let public_key = config.ssh.public_key_path();

    if public_key.exists() {
        info!("SSH key already exists, skipping key generation.");
    } else {
        info!("Generating SSH Key...");
        if let Some(dir) = public_key.parent()
            && let Err(e) = tokio::fs::create_dir_all(dir).await
        {
            error!(path = %dir.display(), error = %e, "failed to create key directory");
        }
        runner.run(&keygen_command(config)).await;
    }

    match tokio::fs::read_to_string(&public_key).await {
        Ok(contents) => {
            info!("Add this SSH key to Gerrit:");
            info!("{}", contents.trim());
        }
        Err(_) => {
            error!(
                path = %public_key.display(),
                "SSH key not found. Please generate one and add it to Gerrit."
            );
        }
    }

    info!("Testing SSH connection...");
    runner.run(&ls_projects_command(&config.gerrit).quiet()).await;
}
