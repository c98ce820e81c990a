// oran-mirror: Gerrit to GitHub mirroring tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::io::Write;
use std::path::PathBuf;

use super::config::{build_config_loader, load_config};
use super::mirror::sync_options;
use super::preflight;
use super::provision::apply_args;
use crate::cli::global::GlobalOptions;
use crate::cli::provision::ProvisionArgs;
use crate::cli::sync::SyncArgs;
use crate::config::Config;

#[test]
fn test_preflight_reports_missing_tools() {
    let missing = preflight(&["oran-mirror-no-such-tool-7f3a"]);
    assert_eq!(missing, vec!["oran-mirror-no-such-tool-7f3a"]);
}

#[test]
fn test_apply_args_overrides_hosting() {
    let mut config = Config::default();
    config.hosting.username = "from-config".to_string();
    config.hosting.token = "config-token".to_string();

    let args = ProvisionArgs {
        github_user: Some("jdoe".to_string()),
        github_token: None,
        repo_name: Some("mirror".to_string()),
        private: true,
        local_path: Some(PathBuf::from("out")),
    };
    let merged = apply_args(&args, &config);

    assert_eq!(merged.hosting.username, "jdoe");
    assert_eq!(merged.hosting.token, "config-token");
    assert_eq!(merged.hosting.repo_name, "mirror");
    assert!(merged.hosting.private);
    assert_eq!(merged.hosting.local_path, PathBuf::from("out"));
    assert_eq!(config.hosting.username, "from-config");
}

#[test]
fn test_apply_args_without_flags_keeps_config() {
    let config = Config::default();
    let merged = apply_args(&ProvisionArgs::default(), &config);
    assert_eq!(merged.hosting.repo_name, "oran_modules_repo");
    assert!(!merged.hosting.private);
}

#[test]
fn test_load_config_with_files_and_set() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[sync]\njobs = 3\nbranch = \"dev\"").unwrap();
    let global = GlobalOptions {
        configs: vec![file.path().to_path_buf()],
        options: vec!["sync.jobs=8".to_string()],
        log_level: Some(4),
        ..GlobalOptions::default()
    };

    let config = load_config(&global).unwrap();

    assert_eq!(config.sync.jobs, 8);
    assert_eq!(config.sync.branch, "dev");
    assert_eq!(config.global.output_log_level.as_u8(), 4);
}

#[test]
fn test_bad_set_assignment_is_rejected() {
    let global = GlobalOptions {
        options: vec!["jobs".to_string()],
        ..GlobalOptions::default()
    };
    assert!(build_config_loader(&global).is_err());
}

#[test]
fn test_sync_jobs_zero_means_config_default() {
    let config = Config::default();
    let from_config = sync_options(&SyncArgs::default(), &config).jobs;

    let args = SyncArgs {
        jobs: Some(0),
        ..SyncArgs::default()
    };
    assert_eq!(sync_options(&args, &config).jobs, from_config);
    assert!(from_config >= 1);
}

#[test]
fn test_sync_jobs_flag_wins_over_config() {
    let mut config = Config::default();
    config.sync.jobs = 3;
    let args = SyncArgs {
        jobs: Some(7),
        strict: true,
        no_progress: true,
    };

    let options = sync_options(&args, &config);
    assert_eq!(options.jobs, 7);
    assert!(options.strict);
    assert!(!options.progress);
}
