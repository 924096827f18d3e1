// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava integration configuration loaded from environment variables.
//!
//! Missing credentials fall back to placeholder literals so the library
//! stays usable for recording and export without a Strava app registered.

use std::env;

const PLACEHOLDER_CLIENT_ID: &str = "YOUR_STRAVA_CLIENT_ID";
const PLACEHOLDER_CLIENT_SECRET: &str = "YOUR_STRAVA_CLIENT_SECRET";
const PLACEHOLDER_REDIRECT_URI: &str = "YOUR_STRAVA_REDIRECT_URI";

const STRAVA_AUTH_URL: &str = "https://www.strava.com/oauth/authorize";
const STRAVA_TOKEN_URL: &str = "https://www.strava.com/oauth/token";
const STRAVA_API_URL: &str = "https://www.strava.com/api/v3";

/// Strava integration configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Strava OAuth client ID (public)
    pub strava_client_id: String,
    /// Strava OAuth client secret
    pub strava_client_secret: String,
    /// Redirect URI registered with the Strava application
    pub strava_redirect_uri: String,
    /// OAuth authorization endpoint
    pub auth_url: String,
    /// OAuth token endpoint (exchange and refresh)
    pub token_url: String,
    /// REST API base URL
    pub api_url: String,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            strava_client_id: "test_client_id".to_string(),
            strava_client_secret: "test_secret".to_string(),
            strava_redirect_uri: "walkrun://callback".to_string(),
            auth_url: STRAVA_AUTH_URL.to_string(),
            token_url: STRAVA_TOKEN_URL.to_string(),
            api_url: STRAVA_API_URL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Each credential falls back to a placeholder with a logged warning
    /// when the variable is absent or empty. Endpoint URLs always default
    /// to the Strava production endpoints; tests override the fields
    /// directly.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self {
            strava_client_id: env_or_placeholder("STRAVA_CLIENT_ID", PLACEHOLDER_CLIENT_ID),
            strava_client_secret: env_or_placeholder(
                "STRAVA_CLIENT_SECRET",
                PLACEHOLDER_CLIENT_SECRET,
            ),
            strava_redirect_uri: env_or_placeholder(
                "STRAVA_REDIRECT_URI",
                PLACEHOLDER_REDIRECT_URI,
            ),
            auth_url: STRAVA_AUTH_URL.to_string(),
            token_url: STRAVA_TOKEN_URL.to_string(),
            api_url: STRAVA_API_URL.to_string(),
        }
    }

    /// Whether real Strava credentials are configured (placeholders don't count).
    pub fn has_strava_credentials(&self) -> bool {
        self.strava_client_id != PLACEHOLDER_CLIENT_ID
            && self.strava_client_secret != PLACEHOLDER_CLIENT_SECRET
            && self.strava_redirect_uri != PLACEHOLDER_REDIRECT_URI
    }
}

/// Read an environment variable, falling back to a placeholder literal.
fn env_or_placeholder(key: &str, placeholder: &'static str) -> String {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => {
            tracing::warn!(key, "Environment variable not set, using placeholder");
            placeholder.to_string()
        }
    }
}
