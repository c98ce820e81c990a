// oran-mirror: Gerrit to GitHub mirroring tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! fs
//!   is_populated(), list_entries()
//!   copy:  copy_dir_contents_async(), move_entry()
//! ```

pub mod fs;
