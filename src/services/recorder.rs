// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Track recording.
//!
//! `TrackRecorder` accumulates timestamped position samples delivered by a
//! `LocationSource`. Samples are appended in arrival order with no
//! distance/time filtering and no outlier rejection.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::{PositionSample, Track};
use crate::services::gpx::GpxExporter;

/// Receives position samples from a location-producing collaborator.
///
/// Any source that can deliver fixes drives the recorder through this
/// single method.
pub trait SampleSink {
    fn on_sample(&mut self, sample: PositionSample);
}

/// External location-sensing collaborator.
///
/// Start/stop toggle continuous delivery of fixes to whatever `SampleSink`
/// the host wired up. Failures surface as `Error::Sensor`; the recorder
/// logs them and keeps going rather than retrying.
pub trait LocationSource {
    fn start_updates(&mut self) -> Result<()>;
    fn stop_updates(&mut self);
}

/// Accumulates one recording session's track and owns its lifecycle.
#[derive(Debug, Default)]
pub struct TrackRecorder {
    track: Track,
    is_tracking: bool,
    last_export: Option<PathBuf>,
}

impl TrackRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request continuous location updates and mark tracking active.
    ///
    /// Idempotent when already tracking. A source that fails to start is
    /// logged and tracking stays on in a degraded state; the source reports
    /// recovery on its own.
    pub fn start(&mut self, source: &mut dyn LocationSource) {
        if self.is_tracking {
            return;
        }
        if let Err(e) = source.start_updates() {
            tracing::warn!(error = %e, "Location source failed to start");
        }
        self.is_tracking = true;
        tracing::info!("Tracking started");
    }

    /// Cancel location updates and mark tracking inactive.
    pub fn stop(&mut self, source: &mut dyn LocationSource) {
        source.stop_updates();
        self.is_tracking = false;
        tracing::info!(points = self.track.len(), "Tracking stopped");
    }

    /// Empty the track, drop any pending export reference, and force
    /// tracking off if it was active.
    pub fn clear(&mut self, source: &mut dyn LocationSource) {
        self.track.clear();
        self.last_export = None;
        if self.is_tracking {
            self.stop(source);
        }
        tracing::info!("Track cleared");
    }

    /// Serialize the current track through the exporter and remember the
    /// written file. No-op on an empty track.
    pub fn export(&mut self, exporter: &GpxExporter) -> Result<Option<PathBuf>> {
        let snapshot = self.snapshot();
        let path = exporter.export(&snapshot)?;
        if let Some(ref p) = path {
            self.last_export = Some(p.clone());
        }
        Ok(path)
    }

    pub fn is_tracking(&self) -> bool {
        self.is_tracking
    }

    pub fn len(&self) -> usize {
        self.track.len()
    }

    pub fn is_empty(&self) -> bool {
        self.track.is_empty()
    }

    /// Snapshot the track for serialization or upload.
    ///
    /// Consumers must not iterate the live track while recording continues;
    /// they take a copy at a point in time instead.
    pub fn snapshot(&self) -> Track {
        self.track.clone()
    }

    /// The file written by the most recent export, if any.
    pub fn last_export(&self) -> Option<&Path> {
        self.last_export.as_deref()
    }
}

impl SampleSink for TrackRecorder {
    /// Append every incoming fix unconditionally, in arrival order.
    fn on_sample(&mut self, sample: PositionSample) {
        self.track.push(sample);
        tracing::debug!(
            lat = sample.latitude,
            lon = sample.longitude,
            total = self.track.len(),
            "Sample recorded"
        );
    }
}
