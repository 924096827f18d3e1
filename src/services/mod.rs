// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - recording, export, auth, and upload.

pub mod gpx;
pub mod recorder;
pub mod token_store;
pub mod uploader;

pub use gpx::{GpxExporter, GpxMode};
pub use recorder::{LocationSource, SampleSink, TrackRecorder};
pub use token_store::{AuthorizationFlow, OAuthTokenStore};
pub use uploader::ActivityUploader;
