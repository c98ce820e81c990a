// oran-mirror: Gerrit to GitHub mirroring tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution and lifecycle management.
//!
//! ```text
//! run()                       run_logged()
//!   |                           |
//!   v                           v
//! build_command()             run() with ALLOW_FAILURE
//! args, cwd, envs, pipes      spawn error -> exit -1, stderr = reason
//!   |                         non-zero    -> error! cmd + stderr
//!   v                         success     -> info! stdout, debug! stderr
//! spawn() -> run_child()        |
//!   |                           v
//!   v                         ProcessOutput (never an Err)
//! validate exit_code
//! (skip if ALLOW_FAILURE)
//!   |
//!   v
//! ProcessOutput { exit_code, stdout, stderr }
//! ```

use crate::error::Result;
use anyhow::Context;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, error, info, trace};

use super::builder::{ProcessBuilder, ProcessFlags, ProcessOutput};

impl ProcessBuilder {
    /// Returns the display name for this process.
    fn display_name(&self) -> String {
        self.program().file_stem().map_or_else(
            || "process".to_string(),
            |s| s.to_string_lossy().into_owned(),
        )
    }

    /// Returns the full command line as a string (for logging).
    pub(super) fn command_line(&self) -> String {
        use std::fmt::Write as _;

        let mut cmd = format!("{}", self.program().display());
        for arg in self.args_slice() {
            if arg.contains(' ') {
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                let _ = write!(cmd, " {arg}");
            }
        }
        cmd
    }

    /// Spawns and runs the process, waiting for completion.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Spawning the child process fails.
    /// - The process exits with a non-zero status (and `ALLOW_FAILURE` flag is not set).
    /// - IO error occurs while waiting for the child.
    pub async fn run(self) -> Result<ProcessOutput> {
        let name = self.display_name();
        let cmd_line = self.command_line();

        if let Some(cwd) = self.working_dir() {
            debug!(cwd = %cwd.display(), "cd");
        }
        debug!(cmd = %cmd_line, "exec");

        let mut command = self.build_command();

        let mut child = command
            .spawn()
            .with_context(|| format!("Failed to spawn: {cmd_line}"))?;

        let pid = child.id();
        trace!(process = %name, pid = ?pid, "spawned");

        let output = self.run_child(&name, &mut child).await?;

        if !self.process_flags().contains(ProcessFlags::ALLOW_FAILURE)
            && !output.success()
        {
            if !output.stderr().is_empty() {
                error!(process = %name, stderr = %output.stderr(), "process error output");
            }
            anyhow::bail!("{} exited with code {}", name, output.exit_code());
        }

        trace!(process = %name, exit_code = output.exit_code(), "completed");
        Ok(output)
    }

    /// Runs the process and reports the outcome through the log only.
    ///
    /// `label` is the command as the operator would type it. Spawn failures
    /// come back as exit code `-1` with the reason in stderr.
    pub async fn run_logged(self, label: &str) -> ProcessOutput {
        let quiet_success = self
            .process_flags()
            .contains(ProcessFlags::IGNORE_OUTPUT_ON_SUCCESS);

        let output = match self.flag(ProcessFlags::ALLOW_FAILURE).run().await {
            Ok(output) => output,
            Err(e) => {
                error!(cmd = %label, error = %format!("{e:#}"), "Error running command");
                return ProcessOutput::failed(-1, format!("{e:#}"));
            }
        };

        if output.success() {
            if !quiet_success {
                let stdout = output.stdout().trim();
                if !stdout.is_empty() {
                    info!(cmd = %label, "{stdout}");
                }
                let stderr = output.stderr().trim();
                if !stderr.is_empty() {
                    debug!(cmd = %label, "{stderr}");
                }
            }
        } else {
            error!(
                cmd = %label,
                exit_code = output.exit_code(),
                stderr = %output.stderr().trim(),
                "Error running command"
            );
        }

        output
    }

    /// Builds the tokio Command from this builder's configuration.
    fn build_command(&self) -> Command {
        let mut command = Command::new(self.program());

        command.args(self.args_slice());

        if let Some(cwd) = self.working_dir() {
            command.current_dir(cwd);
        }

        for (key, value) in self.env_vars() {
            command.env(key, value);
        }

        command.stdin(Stdio::null());
        command.stdout(Stdio::piped());
        command.stderr(Stdio::piped());

        command.kill_on_drop(true);

        command
    }
}
