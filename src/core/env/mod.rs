// oran-mirror: Gerrit to GitHub mirroring tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment overlays applied to child processes.
//!
//! # Architecture
//!
//! ```text
//! Env (copy-on-write Arc<BTreeMap<String, String>>)
//!   set/get/iter
//!
//! configure_environment(&Config)
//!   ORAN_HOME          = absolute modules root
//!   ORAN_REPO          = gerrit.http_base
//!   GIT_SSL_NO_VERIFY  = 1
//!        |
//!        v
//!   ShellRunner::with_env(env)  --> every later child process
//! ```
//!
//! The parent process environment is never modified; an overlay only adds to
//! what children inherit.


use std::collections::BTreeMap;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use crate::config::Config;
use crate::error::Result;

/// Variables added on top of the inherited environment.
///
/// Clones share data until one of them is modified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Env {
    vars: Arc<BTreeMap<String, String>>,
}

impl Env {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a variable, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        Arc::make_mut(&mut self.vars).insert(key.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Iterates variables in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Env {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let vars = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            vars: Arc::new(vars),
        }
    }
}

/// Build the overlay used by the publish stage.
///
/// Calling it again yields the same overlay; values always overwrite.
///
/// # Errors
///
/// Returns an error if the modules root cannot be made absolute.
pub fn configure_environment(config: &Config) -> Result<Env> {
    let modules_root = std::path::absolute(&config.sync.modules_dir).with_context(|| {
        format!(
            "failed to resolve modules root {}",
            config.sync.modules_dir.display()
        )
    })?;

    let mut env = Env::new();
    for (key, value) in [
        ("ORAN_HOME", modules_root.display().to_string()),
        ("ORAN_REPO", config.gerrit.http_base.clone()),
        ("GIT_SSL_NO_VERIFY", "1".to_string()),
    ] {
        info!("Set {key}={value}");
        env.set(key, value);
    }

    Ok(env)
}
