// oran-mirror: Gerrit to GitHub mirroring tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!              MirrorError (~24 bytes)
//!                     |
//!   +------+------+---+---+------+------+
//!   |      |      |       |      |      |
//!   v      v      v       v      v      v
//! Bail    Git    Net   Hosting  Cfg    Fs   Io/Other
//!         Box    Box    Box     Box    Box  Box<str>
//!
//! Sub-errors:
//!   Git      PublishRolledBack
//!   Network  Reqwest
//!   Hosting  CreateRejected
//!   Config   MissingKey, InvalidValue, InvalidOverride
//!   Fs       MoveFailed, IoError
//! ```
//!
//! Workflows mostly log failures and keep going. The typed errors cover the
//! few places that stop a run: missing credentials, a rejected repository
//! creation, and a publish that had to be rolled back.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`MirrorError`].
pub type MirrorResult<T> = std::result::Result<T, MirrorError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum MirrorError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Network operation failed.
    #[error("network error: {0}")]
    Network(#[from] Box<NetworkError>),

    /// Hosting platform refused a request.
    #[error("hosting error: {0}")]
    Hosting(#[from] Box<HostingError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

/// Create a fatal [`MirrorError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> MirrorError {
    MirrorError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for MirrorError {
                fn from(err: $error) -> Self {
                    MirrorError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    NetworkError => Network,
    HostingError => Hosting,
    ConfigError => Config,
    FsError => Fs,
    std::io::Error => Io,
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// A publish step failed and the moved modules were put back.
    #[error("publish step '{step}' failed, restored {restored} module(s): {message}")]
    PublishRolledBack {
        step: String,
        restored: usize,
        message: String,
    },
}

// --- Network Errors ---

/// Network operation errors.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Error from reqwest library.
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

// --- Hosting Errors ---

/// Errors reported by the hosting platform API.
#[derive(Debug, Error)]
pub enum HostingError {
    /// Repository creation answered with something other than 201 or 422.
    #[error("failed to create repository '{name}' (status {status}): {body}")]
    CreateRejected {
        name: String,
        status: u16,
        body: String,
    },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// A `--set` override was not of the form `section.key=value`.
    #[error("invalid override '{0}', expected section.key=value")]
    InvalidOverride(String),
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Moving a directory entry failed.
    #[error("failed to move '{from}' to '{to}': {source}")]
    MoveFailed {
        from: String,
        to: String,
        #[source]
        source: std::io::Error,
    },

    /// General I/O error.
    #[error("I/O error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests;
