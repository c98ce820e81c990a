// oran-mirror: Gerrit to GitHub mirroring tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::loader::parse_assignment;
use super::{Config, ConfigLoader};
use crate::error::ConfigError;
use crate::logging::LogLevel;
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let config = Config::default();
    insta::assert_yaml_snapshot!(
        serde_json::json!({
            "gerrit.host": config.gerrit.host,
            "gerrit.port": config.gerrit.port,
            "gerrit.http_base": config.gerrit.http_base,
            "sync.modules_dir": config.sync.modules_dir,
            "sync.branch": config.sync.branch,
            "publish.repo_url": config.publish.repo_url,
            "publish.commit_message": config.publish.commit_message,
            "hosting.repo_name": config.hosting.repo_name,
            "hosting.local_path": config.hosting.local_path,
        }),
        @r#"
    gerrit.host: gerrit.o-ran-sc.org
    gerrit.http_base: "https://gerrit.o-ran-sc.org/r/"
    gerrit.port: 29418
    hosting.local_path: oran_modules
    hosting.repo_name: oran_modules_repo
    publish.commit_message: Initial commit with ORAN modules
    publish.repo_url: "https://your-default-repository-url.git"
    sync.branch: main
    sync.modules_dir: oran_modules
    "#
    );
}

#[test]
fn test_config_parse() {
    let config = Config::parse(
        r#"
            [global]
            output_log_level = 4

            [gerrit]
            username = "jdoe"
            port = 2222

            [sync]
            jobs = 3
            strict = true
            "#,
    )
    .unwrap();

    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.gerrit.username, "jdoe");
    assert_eq!(config.gerrit.port, 2222);
    assert_eq!(config.gerrit.host, "gerrit.o-ran-sc.org");
    assert_eq!(config.sync.effective_jobs(), 3);
    assert!(config.sync.strict);
}

#[test]
fn test_effective_jobs_defaults_to_parallelism() {
    let config = Config::default();
    assert!(config.sync.effective_jobs() >= 1);
}

#[test]
fn test_deny_unknown_fields_top_level() {
    let result = Config::parse("[nonsense]\nkey = 1");
    assert!(result.is_err());
}

#[test]
fn test_deny_unknown_fields_section() {
    let result = Config::parse("[gerrit]\nusername = \"a\"\nhostname = \"typo\"");
    assert!(result.is_err());
}

#[test]
fn test_ssh_key_paths() {
    let config = Config::parse("[ssh]\nkey_path = \"/keys/id_rsa\"").unwrap();
    assert_eq!(
        config.ssh.resolved_key_path(),
        PathBuf::from("/keys/id_rsa")
    );
    assert_eq!(
        config.ssh.public_key_path(),
        PathBuf::from("/keys/id_rsa.pub")
    );
}

#[test]
fn test_ssh_key_path_expands_home() {
    let config = Config::default();
    let resolved = config.ssh.resolved_key_path();
    if let Some(home) = dirs::home_dir() {
        assert_eq!(resolved, home.join(".ssh").join("id_rsa"));
    }
    assert!(
        config
            .ssh
            .public_key_path()
            .to_string_lossy()
            .ends_with("id_rsa.pub")
    );
}

#[test]
fn test_require_hosting_credentials() {
    let mut config = Config::default();
    let err = config.require_hosting_credentials().unwrap_err();
    assert!(matches!(err, ConfigError::MissingKey { ref key, .. } if key == "username"));

    config.hosting.username = "octocat".to_string();
    let err = config.require_hosting_credentials().unwrap_err();
    assert!(matches!(err, ConfigError::MissingKey { ref key, .. } if key == "token"));

    config.hosting.token = "secret".to_string();
    assert!(config.require_hosting_credentials().is_ok());
}

#[test]
fn test_format_options_hides_sensitive() {
    let config = Config::parse(
        r#"
            [hosting]
            username = "octocat"
            token = "ghp_supersecret"
            "#,
    )
    .unwrap();

    let formatted = config.format_options().join("\n");

    assert!(formatted.contains("hosting.token") && formatted.contains("[hidden]"));
    assert!(!formatted.contains("ghp_supersecret"));
    assert!(formatted.contains("octocat"));
}

#[test]
fn test_format_options_deterministic() {
    let config = Config::default();
    let first = config.format_options();
    let second = config.format_options();
    assert_eq!(first, second);

    let keys: Vec<_> = first
        .iter()
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    let mut sorted = keys.clone();
    sorted.sort_unstable();
    assert_eq!(keys, sorted);
}

// --- ConfigLoader Tests ---

#[test]
fn test_config_loader_add_toml_file_success() {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let mut file = NamedTempFile::new().expect("failed to create temp file");
    writeln!(
        file,
        r#"
[publish]
repo_url = "https://example.com/mirror.git"
repo_dir = "out"
"#
    )
    .expect("failed to write temp file");

    let config = ConfigLoader::new()
        .add_toml_file(file.path())
        .build()
        .expect("build should succeed");

    assert_eq!(config.publish.repo_url, "https://example.com/mirror.git");
    assert_eq!(config.publish.repo_dir, PathBuf::from("out"));
}

#[test]
fn test_config_loader_add_toml_file_not_found() {
    let loader = ConfigLoader::new().add_toml_file("/nonexistent/path/to/config.toml");
    assert!(loader.build().is_err());
}

#[test]
fn test_config_loader_optional_only_tracks_existing() {
    let loader = ConfigLoader::new().add_toml_file_optional("/nonexistent/path.toml");
    assert!(loader.loaded_files().is_empty());
    assert!(loader.build().is_ok());
}

#[test]
fn test_config_loader_with_env_prefix() {
    // SAFETY: the variable name is unique to this test.
    unsafe {
        std::env::set_var("MIRRORTEST_SYNC__JOBS", "7");
    }

    let config = ConfigLoader::new()
        .add_toml_str("[sync]\n jobs = 2")
        .with_env_prefix("MIRRORTEST")
        .build()
        .expect("build should succeed");

    assert_eq!(config.sync.jobs, 7, "env var should override TOML value");

    // SAFETY: same as above.
    unsafe {
        std::env::remove_var("MIRRORTEST_SYNC__JOBS");
    }
}

#[test]
fn test_config_loader_env_aliases() {
    let lookup = |name: &str| match name {
        "GERRIT_USERNAME" => Some("jdoe".to_string()),
        "GITHUB_TOKEN" => Some("ghp_token".to_string()),
        "GITHUB_REPO_NAME" => Some(String::new()),
        "ORAN_LOCAL_PATH" => Some("/data/modules".to_string()),
        _ => None,
    };

    let loader = ConfigLoader::new()
        .add_toml_str("[gerrit]\n username = \"from_file\"")
        .with_env_aliases_from(lookup)
        .unwrap();

    insta::assert_snapshot!(loader.format_loaded_files().join("\n"), @r"
    1. [string] <string>
    2. [env] $GERRIT_USERNAME
    3. [env] $GITHUB_TOKEN
    4. [env] $ORAN_LOCAL_PATH
    ");

    let config = loader.build().unwrap();
    assert_eq!(config.gerrit.username, "jdoe");
    assert_eq!(config.hosting.token, "ghp_token");
    assert_eq!(config.hosting.repo_name, "oran_modules_repo");
    assert_eq!(config.hosting.local_path, PathBuf::from("/data/modules"));
}

#[test]
fn test_set_assignment_wins_over_alias() {
    let config = ConfigLoader::new()
        .with_env_aliases_from(|name| (name == "NEW_REPO_URL").then(|| "from-env".to_string()))
        .unwrap()
        .set_assignment("publish.repo_url=from-cli")
        .unwrap()
        .set_assignment("sync.strict = true")
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.publish.repo_url, "from-cli");
    assert!(config.sync.strict);
}

#[test]
fn test_parse_assignment() {
    assert_eq!(
        parse_assignment("gerrit.port=2222").unwrap(),
        ("gerrit.port", "2222")
    );
    assert_eq!(
        parse_assignment("publish.commit_message=a=b").unwrap(),
        ("publish.commit_message", "a=b")
    );

    for bad in ["gerrit.port", "port=1", ".port=1", "gerrit.=1"] {
        let err = parse_assignment(bad).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOverride(_)), "{bad}");
    }
}

#[test]
fn test_config_loader_build_deserialization_error() {
    let result = ConfigLoader::new()
        .add_toml_str("[gerrit]\n port = \"not a number\"")
        .build();

    assert!(result.is_err(), "build should fail with type mismatch");
}

#[test]
fn test_config_loader_rejects_bad_log_level() {
    let result = ConfigLoader::new()
        .set("global.output_log_level", 9)
        .unwrap()
        .build();
    assert!(result.is_err());
}
