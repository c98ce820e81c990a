// oran-mirror: Gerrit to GitHub mirroring tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for process and environment management.
//!
//! ```text
//!          core
//!           |
//!     +-----+------+
//!     |            |
//!     v            v
//!    env        process
//!     |            |
//!   Env         ProcessBuilder, ProcessOutput
//!   configure   ShellCommand, CommandRunner,
//!   _environment  ShellRunner
//! ```

pub mod env;
pub mod process;
