// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Credential persistence compatibility tests.
//!
//! The on-disk JSON uses the key names the mobile app stored under its
//! platform key-value storage, so an existing installation's credential
//! survives migration to this library.

use chrono::{TimeZone, Utc};
use walkrun_core::{Config, OAuthTokenStore};

#[test]
fn test_loads_credential_with_mobile_storage_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("strava_credential.json");

    std::fs::write(
        &path,
        r#"{
            "stravaAccessToken": "persisted_access",
            "stravaRefreshToken": "persisted_refresh",
            "stravaTokenExpiration": "2030-01-01T00:00:00Z"
        }"#,
    )
    .unwrap();

    let store = OAuthTokenStore::new(&Config::default(), &path);

    assert!(store.is_authenticated());
    assert_eq!(
        store.expires_at(),
        Some(Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap())
    );
}

#[test]
fn test_missing_field_means_unauthenticated() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("strava_credential.json");

    // Refresh token absent: all three fields are required.
    std::fs::write(
        &path,
        r#"{
            "stravaAccessToken": "persisted_access",
            "stravaTokenExpiration": "2030-01-01T00:00:00Z"
        }"#,
    )
    .unwrap();

    let store = OAuthTokenStore::new(&Config::default(), &path);
    assert!(!store.is_authenticated());
}

#[test]
fn test_missing_file_means_unauthenticated() {
    let dir = tempfile::tempdir().unwrap();
    let store = OAuthTokenStore::new(&Config::default(), dir.path().join("nope.json"));

    assert!(!store.is_authenticated());
    assert!(store.expires_at().is_none());
    assert!(store.last_sync().is_none());
}
