// oran-mirror: Gerrit to GitHub mirroring tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   config     options, sources
//!   mirror     access, list, sync, publish, mirror
//!   provision  hosting repository + push
//! ```

pub mod config;
pub mod mirror;
pub mod provision;

#[cfg(test)]
mod tests;

use tracing::warn;

use crate::core::process::ProcessBuilder;

/// Warn about every tool in `tools` that is not on `PATH`.
///
/// Returns the missing names. Commands still run; they fail individually.
pub fn preflight(tools: &[&str]) -> Vec<String> {
    let missing: Vec<String> = tools
        .iter()
        .filter(|tool| !ProcessBuilder::exists(tool))
        .map(|tool| (*tool).to_string())
        .collect();
    for tool in &missing {
        warn!(tool = %tool, "{tool} not found in PATH; commands using it will fail");
    }
    missing
}
