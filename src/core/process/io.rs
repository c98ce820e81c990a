// oran-mirror: Gerrit to GitHub mirroring tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! I/O streaming and output capture for processes.
//!
//! ```text
//! run_child()
//!   stdout/stderr reader tasks, each owns its buffer
//!   wait
//!   join readers --> ProcessOutput { exit_code, stdout, stderr }
//! ```
//!
//! Readers drain their pipe concurrently with `wait()`, so a child writing
//! more than a pipe buffer of output never blocks.

use crate::error::Result;
use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Child;
use tokio::task::JoinHandle;
use tracing::trace;

use super::builder::{ProcessBuilder, ProcessOutput};

/// Spawns a reader task if the stream is piped.
fn spawn_reader<R>(
    stream: Option<R>,
    process_name: &str,
    stream_name: &'static str,
) -> Option<JoinHandle<String>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    stream.map(|stream| {
        let name = process_name.to_string();
        tokio::spawn(async move { read_stream(stream, &name, stream_name).await })
    })
}

/// Waits for a reader task and returns what it kept.
async fn join_reader(handle: Option<JoinHandle<String>>) -> String {
    match handle {
        Some(handle) => handle.await.unwrap_or_default(),
        None => String::new(),
    }
}

impl ProcessBuilder {
    /// Runs the child process, handling I/O streaming and waiting for completion.
    pub(super) async fn run_child(&self, name: &str, child: &mut Child) -> Result<ProcessOutput> {
        let stdout_handle = spawn_reader(child.stdout.take(), name, "stdout");
        let stderr_handle = spawn_reader(child.stderr.take(), name, "stderr");

        let exit_status = child
            .wait()
            .await
            .with_context(|| format!("failed waiting for process {name}"))?;

        let stdout = join_reader(stdout_handle).await;
        let stderr = join_reader(stderr_handle).await;

        Ok(ProcessOutput::new(
            exit_status.code().unwrap_or(-1),
            stdout,
            stderr,
        ))
    }
}

/// Reads a stream line by line, tracing and keeping each line.
async fn read_stream<R>(
    reader: R,
    process_name: &str,
    stream_name: &str,
) -> String
where
    R: AsyncRead + Unpin,
{
    let mut kept = String::new();
    let mut lines = BufReader::new(reader).lines();

    while let Ok(Some(line)) = lines.next_line().await {
        trace!(process = %process_name, stream = %stream_name, line = %line, "output");
        if !kept.is_empty() {
            kept.push('\n');
        }
        kept.push_str(&line);
    }

    kept
}
