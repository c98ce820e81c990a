// oran-mirror: Gerrit to GitHub mirroring tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration section types.
//!
//! ```text
//! Config
//!   global   log levels, log file
//!   gerrit   account + server coordinates
//!   ssh      key material
//!   sync     modules root, branch, pool size
//!   publish  destination repository
//!   hosting  hosting API account + provisioning target
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::logging::LogLevel;

/// Default branch used for checkout, publish and provisioning.
pub const DEFAULT_BRANCH: &str = "main";

/// Default commit message for publish and provisioning.
pub const DEFAULT_COMMIT_MESSAGE: &str = "Initial commit with ORAN modules";

/// Default name of the directory that holds every synced repository.
pub const DEFAULT_MODULES_DIR: &str = "oran_modules";

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Log level for stdout output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file; no file logging when unset.
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Gerrit account and server coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GerritConfig {
    pub username: String,
    pub email: String,
    pub host: String,
    pub port: u16,
    /// Anonymous HTTP base, exported as `ORAN_REPO`.
    pub http_base: String,
}

impl Default for GerritConfig {
    fn default() -> Self {
        Self {
            username: "your_username".to_string(),
            email: "your_email@example.com".to_string(),
            host: "gerrit.o-ran-sc.org".to_string(),
            port: 29418,
            http_base: "https://gerrit.o-ran-sc.org/r/".to_string(),
        }
    }
}

/// SSH key material used to reach Gerrit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SshConfig {
    /// Private key path; `~` is expanded against the home directory.
    pub key_path: PathBuf,
    pub key_type: String,
    pub key_bits: u32,
}

impl Default for SshConfig {
    fn default() -> Self {
        Self {
            key_path: PathBuf::from("~/.ssh/id_rsa"),
            key_type: "rsa".to_string(),
            key_bits: 4096,
        }
    }
}

impl SshConfig {
    /// Private key path with a leading `~` replaced by the home directory.
    #[must_use]
    pub fn resolved_key_path(&self) -> PathBuf {
        expand_home(&self.key_path)
    }

    /// Public key path (`{key_path}.pub`).
    #[must_use]
    pub fn public_key_path(&self) -> PathBuf {
        let mut path = self.resolved_key_path().into_os_string();
        path.push(".pub");
        PathBuf::from(path)
    }
}

/// Repository synchronization options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SyncConfig {
    /// Root directory holding one subdirectory per repository.
    pub modules_dir: PathBuf,
    /// Branch switched to (or created) after a fresh clone.
    pub branch: String,
    /// Worker pool size; 0 means available parallelism.
    pub jobs: usize,
    /// Abort the mirror workflow before publishing when any sync failed.
    pub strict: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            modules_dir: PathBuf::from(DEFAULT_MODULES_DIR),
            branch: DEFAULT_BRANCH.to_string(),
            jobs: 0,
            strict: false,
        }
    }
}

impl SyncConfig {
    /// Effective pool size.
    #[must_use]
    pub fn effective_jobs(&self) -> usize {
        if self.jobs > 0 {
            return self.jobs;
        }
        std::thread::available_parallelism()
            .map(std::num::NonZeroUsize::get)
            .unwrap_or(4)
    }
}

/// Destination repository for the publish step.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PublishConfig {
    pub repo_url: String,
    /// Working directory rebuilt from scratch on every publish.
    pub repo_dir: PathBuf,
    pub branch: String,
    pub commit_message: String,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            repo_url: "https://your-default-repository-url.git".to_string(),
            repo_dir: PathBuf::from("oran_repo"),
            branch: DEFAULT_BRANCH.to_string(),
            commit_message: DEFAULT_COMMIT_MESSAGE.to_string(),
        }
    }
}

/// Hosting platform account and the repository to provision.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostingConfig {
    pub username: String,
    pub token: String,
    pub repo_name: String,
    pub private: bool,
    /// Directory pushed by the local push routine.
    pub local_path: PathBuf,
    /// REST API base, e.g. `https://api.github.com`.
    pub api_url: String,
    /// Web base used to derive clone URLs.
    pub web_url: String,
    pub branch: String,
    pub commit_message: String,
}

impl Default for HostingConfig {
    fn default() -> Self {
        Self {
            username: String::new(),
            token: String::new(),
            repo_name: "oran_modules_repo".to_string(),
            private: false,
            local_path: PathBuf::from(DEFAULT_MODULES_DIR),
            api_url: "https://api.github.com".to_string(),
            web_url: "https://github.com".to_string(),
            branch: DEFAULT_BRANCH.to_string(),
            commit_message: DEFAULT_COMMIT_MESSAGE.to_string(),
        }
    }
}

fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir().map_or_else(|| path.to_path_buf(), |home| home.join(rest)),
        Err(_) => path.to_path_buf(),
    }
}
