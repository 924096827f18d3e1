// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! OAuth credential model.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// The single current Strava credential.
///
/// Replaced wholesale on every exchange or refresh; absence of a credential
/// means "not authenticated". The serde key names match the key-value
/// storage keys the mobile app used, so persisted state survives migration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credential {
    /// Bearer access token
    #[serde(rename = "stravaAccessToken")]
    pub access_token: String,
    /// Refresh token for the refresh_token grant
    #[serde(rename = "stravaRefreshToken")]
    pub refresh_token: String,
    /// When the access token expires
    #[serde(rename = "stravaTokenExpiration")]
    pub expires_at: DateTime<Utc>,
}

impl Credential {
    /// Whether the access token expires within the given margin from now.
    pub fn expires_within(&self, margin: Duration) -> bool {
        Utc::now() + margin >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credential(expires_at: DateTime<Utc>) -> Credential {
        Credential {
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
            expires_at,
        }
    }

    #[test]
    fn test_expires_within_margin() {
        let fresh = credential(Utc::now() + Duration::hours(6));
        assert!(!fresh.expires_within(Duration::seconds(300)));

        let stale = credential(Utc::now() + Duration::seconds(60));
        assert!(stale.expires_within(Duration::seconds(300)));

        let expired = credential(Utc::now() - Duration::hours(1));
        assert!(expired.expires_within(Duration::seconds(300)));
    }

    #[test]
    fn test_serde_uses_storage_key_names() {
        let json = serde_json::to_string(&credential(Utc::now())).unwrap();
        assert!(json.contains("stravaAccessToken"));
        assert!(json.contains("stravaRefreshToken"));
        assert!(json.contains("stravaTokenExpiration"));
    }
}
