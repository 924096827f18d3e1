// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Strava OAuth token lifecycle.
//!
//! Handles:
//! - Authorization URL construction and callback code extraction
//! - Authorization-code exchange at the token endpoint
//! - Proactive refresh when the access token is close to expiry
//! - Credential persistence in a local JSON file

use std::path::PathBuf;

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use url::Url;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::Credential;

/// Margin before token expiration when we proactively refresh (5 minutes).
const TOKEN_REFRESH_MARGIN_SECS: i64 = 5 * 60;

/// Callback scheme the Strava application redirects back to.
const CALLBACK_SCHEME: &str = "walkrun";

/// OAuth scope requested for activity upload.
const UPLOAD_SCOPE: &str = "activity:write";

/// Interactive browser-based authorization collaborator.
///
/// Opens `auth_url` in whatever web-auth surface the host provides and
/// resolves with the full callback URI once the user finishes, or an
/// `Error::Authorization` if they cancel.
pub trait AuthorizationFlow {
    fn authorize(
        &self,
        auth_url: &str,
        callback_scheme: &str,
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Token endpoint response for both the authorization_code and
/// refresh_token grants.
#[derive(Debug, Clone, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: String,
    expires_in: i64,
}

/// Owns the single current Strava credential and its persistence.
///
/// Two states: unauthenticated (no credential) and authenticated. The
/// credential is replaced wholesale on every exchange or refresh; last
/// write wins. Constructed explicitly and passed to whoever needs it.
pub struct OAuthTokenStore {
    http: reqwest::Client,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    auth_url: String,
    token_url: String,
    storage_path: PathBuf,
    credential: Option<Credential>,
    last_sync: Option<DateTime<Utc>>,
}

impl OAuthTokenStore {
    /// Create a store persisting its credential at `storage_path`, loading
    /// any previously saved credential.
    pub fn new(config: &Config, storage_path: impl Into<PathBuf>) -> Self {
        let mut store = Self {
            http: reqwest::Client::new(),
            client_id: config.strava_client_id.clone(),
            client_secret: config.strava_client_secret.clone(),
            redirect_uri: config.strava_redirect_uri.clone(),
            auth_url: config.auth_url.clone(),
            token_url: config.token_url.clone(),
            storage_path: storage_path.into(),
            credential: None,
            last_sync: None,
        };
        store.load_persisted();
        store
    }

    /// Load a previously persisted credential, if one parses cleanly.
    ///
    /// A missing or corrupt file is not an error; the store just starts
    /// unauthenticated.
    fn load_persisted(&mut self) {
        let contents = match std::fs::read_to_string(&self.storage_path) {
            Ok(c) => c,
            Err(_) => {
                tracing::debug!(
                    path = %self.storage_path.display(),
                    "No persisted credential found"
                );
                return;
            }
        };

        match serde_json::from_str::<Credential>(&contents) {
            Ok(credential) => {
                tracing::info!(
                    expires_at = %credential.expires_at,
                    "Loaded persisted Strava credential"
                );
                self.credential = Some(credential);
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    path = %self.storage_path.display(),
                    "Persisted credential unreadable, starting unauthenticated"
                );
            }
        }
    }

    fn persist(&self, credential: &Credential) -> Result<()> {
        let json = serde_json::to_string_pretty(credential)
            .map_err(|e| Error::Internal(anyhow::anyhow!("Credential encode failed: {}", e)))?;
        std::fs::write(&self.storage_path, json)?;
        Ok(())
    }

    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.credential.as_ref().map(|c| c.expires_at)
    }

    /// When the last successful upload completed, if any.
    pub fn last_sync(&self) -> Option<DateTime<Utc>> {
        self.last_sync
    }

    pub(crate) fn record_sync(&mut self, at: DateTime<Utc>) {
        self.last_sync = Some(at);
    }

    /// The authorization URL the interactive flow should open.
    pub fn authorization_url(&self) -> String {
        format!(
            "{}?client_id={}&redirect_uri={}&response_type=code&scope={}",
            self.auth_url,
            self.client_id,
            urlencoding::encode(&self.redirect_uri),
            UPLOAD_SCOPE,
        )
    }

    /// Drive the interactive authorization flow and return the
    /// authorization code from the callback URI.
    pub async fn begin_authorization(&self, flow: &impl AuthorizationFlow) -> Result<String> {
        let auth_url = self.authorization_url();
        tracing::info!(client_id = %self.client_id, "Starting Strava authorization");

        let callback = flow.authorize(&auth_url, CALLBACK_SCHEME).await?;
        extract_code(&callback)
    }

    /// Exchange an authorization code for tokens and persist the credential.
    ///
    /// On any failure the store keeps its previous state; nothing retries.
    pub async fn exchange_code(&mut self, code: &str) -> Result<()> {
        let body = serde_json::json!({
            "client_id": self.client_id,
            "client_secret": self.client_secret,
            "code": code,
            "grant_type": "authorization_code",
        });

        let response = self
            .http
            .post(&self.token_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::TokenExchange(format!("Token request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, body = %body, "Strava token exchange failed");
            return Err(Error::TokenExchange(format!(
                "Token exchange failed with status {}",
                status
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| Error::TokenExchange(format!("Failed to parse token response: {}", e)))?;

        self.store_token_response(token)?;
        tracing::info!("Strava authorization complete");
        Ok(())
    }

    /// Return an access token valid for at least the refresh margin,
    /// refreshing through the token endpoint when the current one is stale.
    ///
    /// Refresh failure leaves the existing credential in place so the
    /// caller can retry explicitly.
    pub async fn valid_access_token(&mut self) -> Result<String> {
        let credential = self.credential.as_ref().ok_or(Error::NotAuthenticated)?;
        let margin = Duration::seconds(TOKEN_REFRESH_MARGIN_SECS);

        if !credential.expires_within(margin) {
            return Ok(credential.access_token.clone());
        }

        tracing::info!("Access token expired or expiring soon, refreshing");

        let body = serde_json::json!({
            "client_id": self.client_id,
            "client_secret": self.client_secret,
            "refresh_token": credential.refresh_token,
            "grant_type": "refresh_token",
        });

        let response = self
            .http
            .post(&self.token_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::TokenExchange(format!("Token refresh request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::TokenExchange(format!(
                "Token refresh failed with status {}: {}",
                status, body
            )));
        }

        let token: TokenResponse = response.json().await.map_err(|e| {
            Error::TokenExchange(format!("Failed to parse refresh response: {}", e))
        })?;

        let access_token = token.access_token.clone();
        self.store_token_response(token)?;
        tracing::info!("Token refreshed");
        Ok(access_token)
    }

    /// Replace the credential wholesale and persist it.
    fn store_token_response(&mut self, token: TokenResponse) -> Result<()> {
        let credential = Credential {
            access_token: token.access_token,
            refresh_token: token.refresh_token,
            expires_at: Utc::now() + Duration::seconds(token.expires_in),
        };
        self.persist(&credential)?;
        self.credential = Some(credential);
        Ok(())
    }

    /// Delete the persisted credential and return to unauthenticated.
    pub fn logout(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.storage_path) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(error = %e, "Failed to delete persisted credential");
            }
        }
        self.credential = None;
        self.last_sync = None;
        tracing::info!("Logged out of Strava");
    }
}

/// Extract the `code` query parameter from the authorization callback URI.
fn extract_code(callback: &str) -> Result<String> {
    let parsed = Url::parse(callback)
        .map_err(|e| Error::Authorization(format!("Invalid callback URI: {}", e)))?;

    parsed
        .query_pairs()
        .find(|(key, _)| key == "code")
        .map(|(_, value)| value.into_owned())
        .ok_or_else(|| Error::Authorization("Callback carried no authorization code".to_string()))
}
