// oran-mirror: Gerrit to GitHub mirroring tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shell command lines and the runner seam used by every workflow.
//!
//! ```text
//! ShellCommand { line, cwd, envs, quiet }
//!        |
//!        v
//! dyn CommandRunner::run(&cmd) --> ProcessOutput
//!        |
//!        +-- ShellRunner   ProcessBuilder::raw(line)
//!        |                 + overlay Env + cmd envs
//!        |                 run_logged()
//!        +-- test runners  scripted outputs
//! ```

use futures_util::future::BoxFuture;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::builder::{ProcessBuilder, ProcessFlags, ProcessOutput};
use crate::core::env::Env;

/// A command line for the system shell, plus where and how to run it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    line: String,
    cwd: Option<PathBuf>,
    envs: Vec<(String, String)>,
    quiet: bool,
}

impl ShellCommand {
    pub fn new(line: impl Into<String>) -> Self {
        Self {
            line: line.into(),
            cwd: None,
            envs: Vec::new(),
            quiet: false,
        }
    }

    #[must_use]
    pub fn cwd(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    #[must_use]
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    /// Do not log output when the command succeeds.
    #[must_use]
    pub const fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }

    #[must_use]
    pub fn line(&self) -> &str {
        &self.line
    }

    #[must_use]
    pub fn working_dir(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    #[must_use]
    pub fn env_vars(&self) -> &[(String, String)] {
        &self.envs
    }

    #[must_use]
    pub const fn is_quiet(&self) -> bool {
        self.quiet
    }
}

/// Renders as the operator would type it on Unix: `K=V cmd args`.
impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.envs {
            write!(f, "{key}={value} ")?;
        }
        f.write_str(&self.line)
    }
}

/// Runs shell commands and reports the outcome.
///
/// Implementations never fail: spawn errors and non-zero exits come back as
/// an unsuccessful [`ProcessOutput`] and are logged by the runner.
pub trait CommandRunner: Send + Sync {
    fn run<'a>(&'a self, command: &'a ShellCommand) -> BoxFuture<'a, ProcessOutput>;
}

/// [`CommandRunner`] backed by the system shell.
#[derive(Debug, Clone, Default)]
pub struct ShellRunner {
    env: Env,
}

impl ShellRunner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runner that adds `env` to every child process.
    #[must_use]
    pub const fn with_env(env: Env) -> Self {
        Self { env }
    }

    #[must_use]
    pub const fn env(&self) -> &Env {
        &self.env
    }
}

impl CommandRunner for ShellRunner {
    fn run<'a>(&'a self, command: &'a ShellCommand) -> BoxFuture<'a, ProcessOutput> {
        Box::pin(async move {
            let label = command.to_string();
            debug!(cmd = %label, "running");

            let mut builder = ProcessBuilder::raw(command.line())
                .envs(self.env.iter())
                .envs(command.env_vars().iter().cloned());
            if let Some(cwd) = command.working_dir() {
                builder = builder.cwd(cwd);
            }
            if command.is_quiet() {
                builder = builder.flag(ProcessFlags::IGNORE_OUTPUT_ON_SUCCESS);
            }

            builder.run_logged(&label).await
        })
    }
}
