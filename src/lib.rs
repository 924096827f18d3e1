// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! WalkRun Core: GPS track recording, GPX export, and Strava upload.
//!
//! This crate is the non-UI heart of a location-tracking app: a
//! [`TrackRecorder`](services::TrackRecorder) accumulates fixes from a
//! location source, [`gpx`](services::gpx) serializes and exports the track,
//! an [`OAuthTokenStore`](services::OAuthTokenStore) owns the Strava
//! credential lifecycle, and an
//! [`ActivityUploader`](services::ActivityUploader) submits recorded tracks
//! to the Strava uploads endpoint.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;

pub use config::Config;
pub use error::{Error, Result};
pub use models::{Credential, PositionSample, Track};
pub use services::{
    ActivityUploader, AuthorizationFlow, GpxExporter, GpxMode, LocationSource, OAuthTokenStore,
    SampleSink, TrackRecorder,
};
