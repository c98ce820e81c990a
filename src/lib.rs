// oran-mirror: Gerrit to GitHub mirroring tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |      access / list / sync / publish
//!                |          mirror / provision
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |  TOML, env, --set layers  |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!              mirror        git    hosting
//!         list, sync pool  command   REST API
//!         publish+rollback  lines    + push
//!
//!   +-----------------------------------------+
//!   |  core   process runner, env overlay     |
//!   +-----------------------------------------+
//!   |  foundation   error, logging, utility   |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod git;
pub mod hosting;
pub mod logging;
pub mod mirror;
pub mod utility;
