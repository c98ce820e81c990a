// oran-mirror: Gerrit to GitHub mirroring tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::copy::{copy_dir_contents_async, move_entry};
use super::{is_populated, list_entries};
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

#[test]
fn test_is_populated() {
    let temp = temp_dir();
    let dir = temp.path().join("repo");

    assert!(!is_populated(&dir), "missing dir is empty");

    std::fs::create_dir(&dir).unwrap();
    assert!(!is_populated(&dir), "new dir is empty");

    std::fs::write(dir.join(".hidden"), "").unwrap();
    assert!(is_populated(&dir), "a hidden file counts as content");
}

#[tokio::test]
async fn test_list_entries_sorted() {
    let temp = temp_dir();
    std::fs::create_dir(temp.path().join("b")).unwrap();
    std::fs::write(temp.path().join("a.txt"), "").unwrap();
    std::fs::create_dir(temp.path().join("c")).unwrap();

    let names: Vec<_> = list_entries(temp.path())
        .await
        .unwrap()
        .iter()
        .filter_map(|p| p.file_name().and_then(|n| n.to_str()).map(String::from))
        .collect();

    assert_eq!(names, vec!["a.txt", "b", "c"]);
}

#[tokio::test]
async fn test_list_entries_missing_dir() {
    let temp = temp_dir();
    assert!(list_entries(&temp.path().join("missing")).await.is_err());
}

#[tokio::test]
async fn test_copy_dir_contents_async() {
    let temp = temp_dir();
    let src = temp.path().join("src");
    std::fs::create_dir_all(src.join("nested")).unwrap();
    std::fs::write(src.join("top.txt"), "top").unwrap();
    std::fs::write(src.join("nested/inner.txt"), "inner").unwrap();

    let dst = temp.path().join("dst");
    copy_dir_contents_async(&src, &dst).await.unwrap();

    assert_eq!(std::fs::read_to_string(dst.join("top.txt")).unwrap(), "top");
    assert_eq!(
        std::fs::read_to_string(dst.join("nested/inner.txt")).unwrap(),
        "inner"
    );
    assert!(src.join("top.txt").exists(), "copy keeps the source");
}

#[tokio::test]
async fn test_move_entry_directory_and_file() {
    let temp = temp_dir();
    let from_dir = temp.path().join("modules/proj-a");
    std::fs::create_dir_all(&from_dir).unwrap();
    std::fs::write(from_dir.join("README"), "a").unwrap();
    std::fs::write(temp.path().join("modules/notes.txt"), "n").unwrap();

    let dest = temp.path().join("repo");
    std::fs::create_dir(&dest).unwrap();

    move_entry(&from_dir, &dest.join("proj-a")).await.unwrap();
    move_entry(
        &temp.path().join("modules/notes.txt"),
        &dest.join("notes.txt"),
    )
    .await
    .unwrap();

    assert!(!from_dir.exists());
    assert!(dest.join("proj-a/README").exists());
    assert!(dest.join("notes.txt").exists());
    assert!(!is_populated(&temp.path().join("modules")));
}

#[tokio::test]
async fn test_move_entry_missing_source_fails() {
    let temp = temp_dir();
    let err = move_entry(&temp.path().join("nope"), &temp.path().join("dest"))
        .await
        .unwrap_err();
    assert!(err.to_string().starts_with("filesystem error: failed to move"));
}
