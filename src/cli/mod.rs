// oran-mirror: Gerrit to GitHub mirroring tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for oran-mirror using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! oran-mirror [global options] <command>
//! version | options | sources
//! access                     key setup + SSH probe
//! list                       Gerrit projects
//! sync [-j N] [--strict]     clone or update everything
//! publish                    modules root --> one repository
//! mirror                     access, list, sync, publish
//! provision                  hosting repository + push
//! ```

pub mod global;
pub mod provision;
pub mod sync;


use crate::cli::global::GlobalOptions;
use crate::cli::provision::ProvisionArgs;
use crate::cli::sync::{MirrorArgs, SyncArgs};
use clap::{Parser, Subcommand};

/// ORAN Gerrit mirroring tool.
///
/// Clones every project of the O-RAN Software Community Gerrit and
/// republishes them as one repository.
#[derive(Debug, Parser)]
#[command(
    name = "oran-mirror",
    author,
    version,
    about = "Mirror ORAN Gerrit projects into a single repository",
    long_about = "oran-mirror Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Lists every project on the Gerrit server, clones or updates\n\
                  each one into the modules directory and publishes the result\n\
                  as a single repository. `oran-mirror mirror` runs the whole\n\
                  workflow. See `oran-mirror <command> --help` for details.",
    after_help = "CONFIGURATION:\n\n\
                  Settings are read from `oran-mirror.toml` in the current\n\
                  directory, then from every --config file in order, then from\n\
                  MIRROR_SECTION__KEY environment variables and the legacy names\n\
                  (GERRIT_USERNAME, GERRIT_EMAIL, NEW_REPO_URL, GITHUB_USERNAME,\n\
                  GITHUB_TOKEN, GITHUB_REPO_NAME, ORAN_LOCAL_PATH). --set wins\n\
                  over all of them."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their resolved values.
    Options,

    /// Lists the configuration sources that were loaded.
    Sources,

    /// Creates an SSH key if needed and tests the Gerrit connection.
    Access,

    /// Lists the Gerrit repositories.
    List,

    /// Clones or updates every Gerrit repository.
    Sync(SyncArgs),

    /// Moves the modules directory into a fresh repository and pushes it.
    Publish,

    /// Runs access, sync and publish in one go.
    Mirror(MirrorArgs),

    /// Creates the hosting repository if needed and pushes a local directory.
    Provision(ProvisionArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
