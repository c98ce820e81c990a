// oran-mirror: Gerrit to GitHub mirroring tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Access | List | Sync | Publish | Mirror | Provision | Options | Sources
//! ```

use std::process::ExitCode;

use oran_mirror::cli::{self, Command};
use oran_mirror::cmd::config::{
    build_config_loader, load_config, run_options_command, run_sources_command,
};
use oran_mirror::cmd::mirror::{
    run_access_command, run_list_command, run_mirror_command, run_publish_command,
    run_sync_command,
};
use oran_mirror::cmd::provision::run_provision_command;
use oran_mirror::config::Config;
use oran_mirror::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let command = match &cli.command {
        Some(Command::Version) => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Some(command) => command,
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            return ExitCode::FAILURE;
        }
    };

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&build_log_config(&config)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = match command {
        Command::Version => Ok(()),
        Command::Options => {
            run_options_command(&config);
            Ok(())
        }
        Command::Sources => build_config_loader(&cli.global).map(|loader| {
            run_sources_command(&loader.format_loaded_files());
        }),
        Command::Access => run_access_command(&config).await,
        Command::List => run_list_command(&config).await,
        Command::Sync(args) => run_sync_command(args, &config).await,
        Command::Publish => run_publish_command(&config).await,
        Command::Mirror(args) => run_mirror_command(args, &config).await,
        Command::Provision(args) => run_provision_command(args, &config).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(
            config
                .global
                .log_file
                .as_ref()
                .map(|p| p.display().to_string()),
        )
        .build()
}
