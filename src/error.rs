// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Library error types.

/// Error type covering every failure the library surfaces.
///
/// No operation retries on failure; every error is terminal for that call
/// and must be re-triggered by the caller.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Location source failure. Logged by the recorder; tracking continues
    /// in a degraded state.
    #[error("Location source error: {0}")]
    Sensor(String),

    /// Interactive authorization was cancelled or the callback carried no code.
    #[error("Authorization error: {0}")]
    Authorization(String),

    /// Token exchange or refresh failed (network, parse, or non-2xx status).
    /// The store keeps its previous state.
    #[error("Token exchange error: {0}")]
    TokenExchange(String),

    /// Upload requires an authenticated token store.
    #[error("Not authenticated with Strava")]
    NotAuthenticated,

    /// A second upload was issued while one was still in flight.
    #[error("An upload is already in progress")]
    UploadInProgress,

    /// Upload transport failure or non-201 response.
    #[error("Upload error: {message}")]
    Upload {
        /// HTTP status when the server answered, None on transport failure.
        status: Option<u16>,
        message: String,
    },

    /// Local GPX file write failure.
    #[error("Write error: {0}")]
    Write(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
