// oran-mirror: Gerrit to GitHub mirroring tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::{FsError, MirrorResult, Result};
use anyhow::Context;
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Recursively copies all contents from src directory to dst directory (async version).
///
/// Creates dst if it doesn't exist. Handles both files and directories recursively.
///
/// # Example
/// ```no_run
/// use oran_mirror::utility::fs::copy::copy_dir_contents_async;
/// use std::path::Path;
///
/// # async fn example() -> anyhow::Result<()> {
/// copy_dir_contents_async(Path::new("/source/dir"), Path::new("/dest/dir")).await?;
/// # Ok(())
/// # }
/// ```
/// # Errors
///
/// Returns an error if any IO operation fails (creating directory, reading, copying).
pub async fn copy_dir_contents_async(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst)
        .await
        .with_context(|| format!("failed to create directory {}", dst.display()))?;

    let mut entries = fs::read_dir(src)
        .await
        .with_context(|| format!("failed to read directory {}", src.display()))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .with_context(|| format!("failed to read entry from {}", src.display()))?
    {
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            Box::pin(copy_dir_contents_async(&src_path, &dst_path)).await?;
        } else {
            fs::copy(&src_path, &dst_path).await.with_context(|| {
                format!(
                    "failed to copy {} to {}",
                    src_path.display(),
                    dst_path.display()
                )
            })?;
        }
    }

    Ok(())
}

/// Moves a file or directory to `to`.
///
/// Tries a rename first and falls back to copy-then-delete when the rename
/// is refused (for example across filesystems).
///
/// # Errors
///
/// Returns `FsError::MoveFailed` if neither strategy succeeds.
pub async fn move_entry(from: &Path, to: &Path) -> MirrorResult<()> {
    let Err(rename_err) = fs::rename(from, to).await else {
        return Ok(());
    };
    debug!(
        from = %from.display(),
        to = %to.display(),
        error = %rename_err,
        "rename failed, copying instead"
    );

    copy_then_remove(from, to).await.map_err(|source| {
        FsError::MoveFailed {
            from: from.display().to_string(),
            to: to.display().to_string(),
            source,
        }
        .into()
    })
}

async fn copy_then_remove(from: &Path, to: &Path) -> std::io::Result<()> {
    if fs::metadata(from).await?.is_dir() {
        copy_dir_contents_async(from, to)
            .await
            .map_err(|e| std::io::Error::other(format!("{e:#}")))?;
        fs::remove_dir_all(from).await
    } else {
        fs::copy(from, to).await?;
        fs::remove_file(from).await
    }
}
