// oran-mirror: Gerrit to GitHub mirroring tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Async process spawning and management.
//!
//! ```text
//! ProcessBuilder::raw("git pull")
//!   .cwd() .env() .flag()
//!   .run() / .run_logged(label)
//!       --> tokio::process::Command
//!           concurrent stdout/stderr readers
//!       --> ProcessOutput { exit_code, stdout, stderr }
//!
//! ShellCommand + CommandRunner (ShellRunner in production)
//! ```

pub mod builder;
mod io;
mod runner;
pub mod shell;

pub use builder::{ProcessBuilder, ProcessFlags, ProcessOutput};
pub use shell::{CommandRunner, ShellCommand, ShellRunner};
