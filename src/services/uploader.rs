// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity upload to the Strava uploads endpoint.
//!
//! The multipart body is built by hand because the endpoint was validated
//! against this exact part order and layout: name, type, data_type, file.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Utc;
use ring::rand::{SecureRandom, SystemRandom};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::PositionSample;
use crate::services::gpx::{self, GpxMode};
use crate::services::token_store::OAuthTokenStore;

/// Submits recorded tracks as Strava activities.
pub struct ActivityUploader {
    http: reqwest::Client,
    api_url: String,
    in_flight: AtomicBool,
}

impl ActivityUploader {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: config.api_url.clone(),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Whether an upload is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Upload with the default activity type.
    pub async fn upload_run(
        &self,
        store: &mut OAuthTokenStore,
        samples: &[PositionSample],
        name: &str,
    ) -> Result<()> {
        self.upload(store, samples, name, "Run").await
    }

    /// Serialize `samples` as minimal GPX and POST it to `/uploads`.
    ///
    /// Requires an authenticated store; fails with `NotAuthenticated`
    /// before any request is built otherwise. A call issued while another
    /// upload is in flight is rejected with `UploadInProgress` rather than
    /// racing. Exactly HTTP 201 counts as success, and only the 201 path
    /// records the sync time on the store.
    pub async fn upload(
        &self,
        store: &mut OAuthTokenStore,
        samples: &[PositionSample],
        name: &str,
        activity_type: &str,
    ) -> Result<()> {
        if !store.is_authenticated() {
            return Err(Error::NotAuthenticated);
        }

        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(Error::UploadInProgress);
        }

        let result = self.upload_inner(store, samples, name, activity_type).await;
        self.in_flight.store(false, Ordering::SeqCst);
        result
    }

    async fn upload_inner(
        &self,
        store: &mut OAuthTokenStore,
        samples: &[PositionSample],
        name: &str,
        activity_type: &str,
    ) -> Result<()> {
        let access_token = store.valid_access_token().await?;

        let document = gpx::serialize(samples, GpxMode::UploadMinimal);
        let boundary = random_boundary()?;
        let body = multipart_body(&boundary, name, activity_type, document.as_bytes());

        tracing::info!(
            activity = name,
            activity_type,
            points = samples.len(),
            "Uploading activity to Strava"
        );

        let response = self
            .http
            .post(format!("{}/uploads", self.api_url))
            .bearer_auth(&access_token)
            .header(
                reqwest::header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", boundary),
            )
            .body(body)
            .send()
            .await
            .map_err(|e| Error::Upload {
                status: None,
                message: format!("Upload request failed: {}", e),
            })?;

        let status = response.status();
        if status.as_u16() == 201 {
            store.record_sync(Utc::now());
            tracing::info!(activity = name, "Activity uploaded");
            return Ok(());
        }

        let mut message = format!("Upload failed with status code: {}", status.as_u16());
        let body = response.text().await.unwrap_or_default();
        if !body.is_empty() {
            message.push_str("\nResponse: ");
            message.push_str(&body);
        }

        Err(Error::Upload {
            status: Some(status.as_u16()),
            message,
        })
    }
}

/// Build the multipart/form-data body: name, type, data_type, file, in
/// that order, each part CRLF-terminated, closed with `--boundary--`.
pub fn multipart_body(boundary: &str, name: &str, activity_type: &str, gpx: &[u8]) -> Vec<u8> {
    let mut body = Vec::with_capacity(gpx.len() + 512);

    push_text_part(&mut body, boundary, "name", name);
    push_text_part(&mut body, boundary, "type", activity_type);
    push_text_part(&mut body, boundary, "data_type", "gpx");

    body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
    body.extend_from_slice(
        b"Content-Disposition: form-data; name=\"file\"; filename=\"activity.gpx\"\r\n",
    );
    body.extend_from_slice(b"Content-Type: application/gpx+xml\r\n\r\n");
    body.extend_from_slice(gpx);
    body.extend_from_slice(b"\r\n");

    body.extend_from_slice(format!("--{}--\r\n", boundary).as_bytes());
    body
}

fn push_text_part(body: &mut Vec<u8>, boundary: &str, name: &str, value: &str) {
    body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
    );
    body.extend_from_slice(format!("{}\r\n", value).as_bytes());
}

/// Random multipart boundary token.
fn random_boundary() -> Result<String> {
    let rng = SystemRandom::new();
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes)
        .map_err(|_| Error::Internal(anyhow::anyhow!("System RNG unavailable")))?;
    Ok(format!("Boundary-{}", hex::encode(bytes)))
}
