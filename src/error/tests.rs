// oran-mirror: Gerrit to GitHub mirroring tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, GitError, HostingError, MirrorError, MirrorResult, bail_out};

#[test]
fn test_config_error_display() {
    let err = ConfigError::MissingKey {
        section: "hosting".to_string(),
        key: "token".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"missing required config key 'token' in section '[hosting]'");
}

#[test]
fn test_hosting_error_display() {
    let err: MirrorError = HostingError::CreateRejected {
        name: "oran_modules_repo".to_string(),
        status: 401,
        body: "Bad credentials".to_string(),
    }
    .into();
    insta::assert_snapshot!(
        err.to_string(),
        @"hosting error: failed to create repository 'oran_modules_repo' (status 401): Bad credentials"
    );
}

#[test]
fn test_rollback_error_display() {
    let err: MirrorError = GitError::PublishRolledBack {
        step: "git commit".to_string(),
        restored: 3,
        message: "nothing added".to_string(),
    }
    .into();
    insta::assert_snapshot!(
        err.to_string(),
        @"git error: publish step 'git commit' failed, restored 3 module(s): nothing added"
    );
}

#[test]
fn test_bail_out_is_fatal_variant() {
    let err = bail_out("credentials missing");
    assert!(matches!(err, MirrorError::Bailed(_)));
    assert_eq!(err.to_string(), "fatal error: credentials missing");
}

#[test]
fn test_mirror_error_size() {
    // Box<str> variants are a fat pointer, plus the discriminant.
    let size = std::mem::size_of::<MirrorError>();
    assert!(size <= 24, "MirrorError is {size} bytes, expected <= 24");
}

#[test]
fn test_mirror_result_size() {
    let size = std::mem::size_of::<MirrorResult<()>>();
    assert!(size <= 24, "MirrorResult<()> is {size} bytes, expected <= 24");
}
