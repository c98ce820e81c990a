// oran-mirror: Gerrit to GitHub mirroring tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::sync::Arc;

use tempfile::TempDir;

use super::{HostingClient, PushOutcome, push_local};
use crate::config::Config;
use crate::core::process::ProcessOutput;
use crate::mirror::test_utils::ScriptedRunner;

const URL: &str = "https://github.com/jdoe/oran_modules_repo.git";

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn porcelain(stdout: &'static str) -> Arc<ScriptedRunner> {
    ScriptedRunner::new(move |cmd| {
        if cmd.line() == "git status --porcelain" {
            ProcessOutput::ok(stdout)
        } else {
            ProcessOutput::ok("")
        }
    })
}

#[test]
fn test_repo_url_trims_trailing_slash() {
    let client = HostingClient::new("https://api.example/", "https://github.com/", "jdoe", "t");
    assert_eq!(
        client.repo_url("oran_modules_repo"),
        "https://github.com/jdoe/oran_modules_repo.git"
    );
}

#[test]
fn test_client_from_config() {
    let mut config = Config::default();
    config.hosting.username = "jdoe".to_string();
    let client = HostingClient::from_config(&config.hosting);
    assert_eq!(client.username(), "jdoe");
    assert_eq!(client.repo_url("x"), "https://github.com/jdoe/x.git");
}

#[tokio::test]
async fn test_push_fresh_directory() {
    let temp = temp_dir();
    let runner = porcelain("A  README.md\n");

    let outcome = push_local(runner.as_ref(), temp.path(), URL, "main", "Initial commit").await;

    assert_eq!(outcome, PushOutcome::Pushed);
    insta::assert_snapshot!(runner.lines().join("\n"), @r#"
    git init
    git branch -m main
    git remote add origin https://github.com/jdoe/oran_modules_repo.git
    git add .
    git status --porcelain
    git commit -m "Initial commit"
    git push -u origin main
    "#);
}

#[tokio::test]
async fn test_push_existing_repo_pulls_and_skips_remote() {
    let temp = temp_dir();
    std::fs::create_dir(temp.path().join(".git")).unwrap();
    let runner = porcelain(" M README.md\n");

    let outcome = push_local(runner.as_ref(), temp.path(), URL, "main", "msg").await;

    assert_eq!(outcome, PushOutcome::Pushed);
    assert_eq!(runner.lines()[0], "git pull origin main");
    assert!(runner.matching("git init").is_empty());
    assert!(runner.matching("git remote").is_empty());
    assert_eq!(runner.matching("git push").len(), 1);
}

#[tokio::test]
async fn test_push_clean_tree_skips_commit_and_push() {
    let temp = temp_dir();
    std::fs::create_dir(temp.path().join(".git")).unwrap();
    let runner = porcelain("");

    let outcome = push_local(runner.as_ref(), temp.path(), URL, "main", "msg").await;

    assert_eq!(outcome, PushOutcome::NothingToCommit);
    assert!(runner.matching("git commit").is_empty());
    assert!(runner.matching("git push").is_empty());
}

#[tokio::test]
async fn test_push_missing_path() {
    let temp = temp_dir();
    let runner = ScriptedRunner::succeeding();

    let outcome = push_local(
        runner.as_ref(),
        &temp.path().join("absent"),
        URL,
        "main",
        "msg",
    )
    .await;

    assert_eq!(outcome, PushOutcome::LocalPathMissing);
    assert!(runner.calls().is_empty());
}

#[tokio::test]
async fn test_provision_requires_credentials_before_requests() {
    let runner = ScriptedRunner::succeeding();
    let err = super::provision(&Config::default(), runner.as_ref())
        .await
        .unwrap_err();

    insta::assert_snapshot!(
        err.to_string(),
        @"config error: missing required config key 'username' in section '[hosting]'"
    );
    assert!(runner.calls().is_empty());
}
