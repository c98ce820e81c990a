// oran-mirror: Gerrit to GitHub mirroring tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for oran-mirror.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. ./oran-mirror.toml
//! 3. --config
//! 4. MIRROR_* env vars
//! 5. legacy env names
//! 6. --set overrides
//! 7. command flags
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! MIRROR_GERRIT__USERNAME=jdoe   → gerrit.username = "jdoe"
//! MIRROR_SYNC__JOBS=8            → sync.jobs = 8
//! GITHUB_TOKEN=ghp_...           → hosting.token
//! NEW_REPO_URL=https://...       → publish.repo_url
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{GerritConfig, GlobalConfig, HostingConfig, PublishConfig, SshConfig, SyncConfig};

/// Name of the optional configuration file read from the working directory.
pub const LOCAL_CONFIG_FILE: &str = "oran-mirror.toml";

/// Prefix of the structured environment variables.
pub const ENV_PREFIX: &str = "MIRROR";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Gerrit account and server.
    pub gerrit: GerritConfig,
    /// SSH key material.
    pub ssh: SshConfig,
    /// Repository synchronization.
    pub sync: SyncConfig,
    /// Publish destination.
    pub publish: PublishConfig,
    /// Hosting platform provisioning.
    pub hosting: HostingConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use oran_mirror::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("oran-mirror.toml")
    ///     .with_env_prefix("MIRROR")
    ///     .with_env_aliases()?
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file (simple API).
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Ensure the hosting account is known before any API call.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingKey` for an empty `hosting.username` or
    /// `hosting.token`.
    pub fn require_hosting_credentials(&self) -> std::result::Result<(), ConfigError> {
        for (key, value) in [
            ("username", &self.hosting.username),
            ("token", &self.hosting.token),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::MissingKey {
                    section: "hosting".to_string(),
                    key: key.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Sensitive fields are hidden with a `[hidden]` marker. Output is
    /// deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_gerrit_options(&mut options);
        self.format_ssh_options(&mut options);
        self.format_sync_options(&mut options);
        self.format_publish_options(&mut options);
        self.format_hosting_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
    }

    fn format_gerrit_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("gerrit.username".into(), self.gerrit.username.clone());
        options.insert("gerrit.email".into(), self.gerrit.email.clone());
        options.insert("gerrit.host".into(), self.gerrit.host.clone());
        options.insert("gerrit.port".into(), self.gerrit.port.to_string());
        options.insert("gerrit.http_base".into(), self.gerrit.http_base.clone());
    }

    fn format_ssh_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "ssh.key_path".into(),
            self.ssh.key_path.display().to_string(),
        );
        options.insert("ssh.key_type".into(), self.ssh.key_type.clone());
        options.insert("ssh.key_bits".into(), self.ssh.key_bits.to_string());
    }

    fn format_sync_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "sync.modules_dir".into(),
            self.sync.modules_dir.display().to_string(),
        );
        options.insert("sync.branch".into(), self.sync.branch.clone());
        options.insert("sync.jobs".into(), self.sync.jobs.to_string());
        options.insert("sync.strict".into(), self.sync.strict.to_string());
    }

    fn format_publish_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("publish.repo_url".into(), self.publish.repo_url.clone());
        options.insert(
            "publish.repo_dir".into(),
            self.publish.repo_dir.display().to_string(),
        );
        options.insert("publish.branch".into(), self.publish.branch.clone());
        options.insert(
            "publish.commit_message".into(),
            self.publish.commit_message.clone(),
        );
    }

    fn format_hosting_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("hosting.username".into(), self.hosting.username.clone());
        if !self.hosting.token.is_empty() {
            options.insert("hosting.token".into(), "[hidden]".into());
        }
        options.insert("hosting.repo_name".into(), self.hosting.repo_name.clone());
        options.insert("hosting.private".into(), self.hosting.private.to_string());
        options.insert(
            "hosting.local_path".into(),
            self.hosting.local_path.display().to_string(),
        );
        options.insert("hosting.api_url".into(), self.hosting.api_url.clone());
        options.insert("hosting.web_url".into(), self.hosting.web_url.clone());
        options.insert("hosting.branch".into(), self.hosting.branch.clone());
        options.insert(
            "hosting.commit_message".into(),
            self.hosting.commit_message.clone(),
        );
    }
}
