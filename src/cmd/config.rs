// oran-mirror: Gerrit to GitHub mirroring tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Config-related commands and configuration loading.

use crate::cli::global::GlobalOptions;
use crate::config::loader::ConfigLoader;
use crate::config::{Config, ENV_PREFIX, LOCAL_CONFIG_FILE};
use crate::error::Result;

/// Loader for every configuration source, lowest priority first.
///
/// ```text
/// oran-mirror.toml --> --config... --> MIRROR_* --> legacy env --> --set / flags
/// ```
///
/// # Errors
///
/// Returns an error if a `--set` assignment or a level flag is malformed.
pub fn build_config_loader(global: &GlobalOptions) -> Result<ConfigLoader> {
    let mut loader = ConfigLoader::new().add_toml_file_optional(LOCAL_CONFIG_FILE);
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix(ENV_PREFIX).with_env_aliases()?;
    for assignment in global.to_config_overrides() {
        loader = loader.set_assignment(&assignment)?;
    }
    Ok(loader)
}

/// Load the merged configuration.
///
/// # Errors
///
/// Returns an error if any source is invalid or a required file is missing.
pub fn load_config(global: &GlobalOptions) -> Result<Config> {
    build_config_loader(global)?.build()
}

/// Display current configuration options.
pub fn run_options_command(config: &Config) {
    for line in config.format_options() {
        println!("{line}");
    }
}

/// Display loaded configuration sources.
pub fn run_sources_command(sources: &[String]) {
    if sources.is_empty() {
        println!("No configuration files loaded");
    } else {
        for line in sources {
            println!("{line}");
        }
    }
}
