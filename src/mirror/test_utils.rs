// oran-mirror: Gerrit to GitHub mirroring tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scripted command runner for workflow tests.
//!
//! Records every command and answers through a handler, which may also
//! simulate filesystem effects (a clone creating its directory).

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use futures_util::future::BoxFuture;

use crate::core::process::{CommandRunner, ProcessOutput, ShellCommand};

type Handler = Box<dyn Fn(&ShellCommand) -> ProcessOutput + Send + Sync>;

pub(crate) struct ScriptedRunner {
    calls: Mutex<Vec<ShellCommand>>,
    handler: Handler,
}

impl ScriptedRunner {
    pub(crate) fn new<F>(handler: F) -> Arc<Self>
    where
        F: Fn(&ShellCommand) -> ProcessOutput + Send + Sync + 'static,
    {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            handler: Box::new(handler),
        })
    }

    /// Every command succeeds with empty output.
    pub(crate) fn succeeding() -> Arc<Self> {
        Self::new(|_| ProcessOutput::ok(""))
    }

    pub(crate) fn calls(&self) -> Vec<ShellCommand> {
        self.calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Command lines, env prefixes included.
    pub(crate) fn lines(&self) -> Vec<String> {
        self.calls().iter().map(ToString::to_string).collect()
    }

    /// Commands whose line starts with `prefix`.
    pub(crate) fn matching(&self, prefix: &str) -> Vec<ShellCommand> {
        self.calls()
            .into_iter()
            .filter(|c| c.line().starts_with(prefix))
            .collect()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run<'a>(&'a self, command: &'a ShellCommand) -> BoxFuture<'a, ProcessOutput> {
        self.calls
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(command.clone());
        let output = (self.handler)(command);
        Box::pin(async move { output })
    }
}

/// Destination of a `git clone URL "DEST"` line.
pub(crate) fn clone_dest(command: &ShellCommand) -> Option<PathBuf> {
    let rest = command.line().strip_prefix("git clone ")?;
    let (_, quoted) = rest.split_once(' ')?;
    Some(PathBuf::from(quoted.trim_matches('"')))
}

/// Simulate a successful clone into `dest`.
pub(crate) fn populate(dest: &Path) {
    std::fs::create_dir_all(dest.join(".git")).expect("create clone dir");
    std::fs::write(dest.join("README.md"), "module").expect("write clone file");
}

/// Listing output followed by successful clones for everything else.
pub(crate) fn listing_runner(projects: &'static [&'static str]) -> Arc<ScriptedRunner> {
    ScriptedRunner::new(move |cmd| {
        if cmd.line().ends_with("gerrit ls-projects") {
            return ProcessOutput::ok(projects.join("\n"));
        }
        if let Some(dest) = clone_dest(cmd) {
            populate(&dest);
        }
        ProcessOutput::ok("")
    })
}
