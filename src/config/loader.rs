// oran-mirror: Gerrit to GitHub mirroring tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file_optional()   ./oran-mirror.toml
//!   .add_toml_file(req)         --config
//!   .with_env_prefix()          MIRROR_*
//!   .with_env_aliases()?        GERRIT_USERNAME, GITHUB_TOKEN, ...
//!   .set_assignment()?          --set section.key=value
//!        |
//!        v
//!    build() --> Config
//! ```
//!
//! Environment sources are read at `build()`, overrides are applied on top
//! of every source in the order they were added.

use std::path::{Path, PathBuf};

use super::Config;
use crate::error::{ConfigError, Result};

/// Legacy environment variable names and the keys they set.
pub const ENV_ALIASES: &[(&str, &str)] = &[
    ("GERRIT_USERNAME", "gerrit.username"),
    ("GERRIT_EMAIL", "gerrit.email"),
    ("NEW_REPO_URL", "publish.repo_url"),
    ("GITHUB_USERNAME", "hosting.username"),
    ("GITHUB_TOKEN", "hosting.token"),
    ("GITHUB_REPO_NAME", "hosting.repo_name"),
    ("ORAN_LOCAL_PATH", "hosting.local_path"),
];

/// Builder for loading configuration from multiple sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    files: Vec<(String, PathBuf)>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            files: Vec::new(),
        }
    }

    /// Adds a TOML configuration file to the loader.
    ///
    /// The file will be read when `build()` is called. If the file doesn't exist
    /// or contains invalid TOML, `build()` will return an error.
    #[must_use]
    pub fn add_toml_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(true));
        self.files.push(("file".to_string(), p.to_path_buf()));
        self
    }

    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(false));
        if p.exists() {
            self.files.push(("optional".to_string(), p.to_path_buf()));
        }
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.files
            .push(("string".to_string(), PathBuf::from("<string>")));
        self
    }

    /// Reads `{PREFIX}_SECTION__KEY` variables at build time.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Applies the legacy environment names from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be recorded.
    pub fn with_env_aliases(self) -> Result<Self> {
        self.with_env_aliases_from(|name| std::env::var(name).ok())
    }

    /// Applies the legacy environment names using `lookup` to read them.
    ///
    /// Unset and empty variables are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if an override cannot be recorded.
    pub fn with_env_aliases_from<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        for (name, key) in ENV_ALIASES {
            if let Some(value) = lookup(name).filter(|v| !v.is_empty()) {
                self = self.set(key, value)?;
                self.files
                    .push(("env".to_string(), PathBuf::from(format!("${name}"))));
            }
        }
        Ok(self)
    }

    /// Sets a configuration override.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or if the value cannot be converted
    /// to a configuration value.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
        Ok(self)
    }

    /// Applies a `section.key=value` assignment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidOverride` if the assignment is malformed.
    pub fn set_assignment(self, assignment: &str) -> Result<Self> {
        let (key, value) = parse_assignment(assignment)?;
        self.set(key, value)
    }

    /// Builds the configuration from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required configuration files are missing.
    /// - Configuration files have invalid TOML syntax.
    /// - Environment variables cannot be parsed.
    /// - The merged configuration cannot be deserialized into the `Config` struct.
    pub fn build(self) -> Result<Config> {
        let builder = match &self.env_prefix {
            Some(prefix) => self.builder.add_source(
                config::Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            ),
            None => self.builder,
        };
        let cfg = builder.build()?;
        let config: Config = cfg.try_deserialize()?;
        Ok(config)
    }

    #[must_use]
    pub fn loaded_files(&self) -> Vec<(String, PathBuf)> {
        self.files.clone()
    }

    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.files
            .iter()
            .enumerate()
            .map(|(i, (source, path))| format!("{}. [{}] {}", i + 1, source, path.display()))
            .collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Split `section.key=value` into key and value.
///
/// # Errors
///
/// Returns `ConfigError::InvalidOverride` when `=` is missing or the key has
/// no section.
pub fn parse_assignment(assignment: &str) -> std::result::Result<(&str, &str), ConfigError> {
    let invalid = || ConfigError::InvalidOverride(assignment.to_string());

    let (key, value) = assignment.split_once('=').ok_or_else(invalid)?;
    let key = key.trim();
    match key.split_once('.') {
        Some((section, field)) if !section.is_empty() && !field.is_empty() => {
            Ok((key, value.trim()))
        }
        _ => Err(invalid()),
    }
}
