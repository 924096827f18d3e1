// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! GPX serialization and file export.
//!
//! Two document shapes exist on purpose: the full export carries elevation
//! and speed per point, while the upload variant carries only lat/lon/time.
//! The Strava upload endpoint was validated against the minimal shape, so
//! the asymmetry is wire format, not an oversight.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::error::Result;
use crate::models::PositionSample;
use crate::time_utils::format_gpx_time;

/// Which GPX document shape to emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpxMode {
    /// Local export: elevation and speed per point, GPX 1.1 namespace.
    Full,
    /// Strava upload: lat/lon/time only.
    UploadMinimal,
}

/// Serialize samples into a GPX 1.1 document.
pub fn serialize(samples: &[PositionSample], mode: GpxMode) -> String {
    let mut gpx = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");

    match mode {
        GpxMode::Full => {
            gpx.push_str(
                "<gpx version=\"1.1\" creator=\"WalkRun\" xmlns=\"http://www.topografix.com/GPX/1/1\">\n",
            );
            gpx.push_str("<trk>\n<name>WalkRun Track</name>\n<trkseg>\n");
        }
        GpxMode::UploadMinimal => {
            gpx.push_str("<gpx version=\"1.1\" creator=\"WalkRun\">\n");
            gpx.push_str("<trk>\n<name>WalkRun Activity</name>\n<trkseg>\n");
        }
    }

    for sample in samples {
        let time = format_gpx_time(sample.timestamp);
        match mode {
            GpxMode::Full => {
                let _ = writeln!(
                    gpx,
                    "<trkpt lat=\"{}\" lon=\"{}\">\n<ele>{}</ele>\n<time>{}</time>\n<speed>{}</speed>\n</trkpt>",
                    sample.latitude, sample.longitude, sample.altitude, time, sample.speed
                );
            }
            GpxMode::UploadMinimal => {
                let _ = writeln!(
                    gpx,
                    "<trkpt lat=\"{}\" lon=\"{}\">\n<time>{}</time>\n</trkpt>",
                    sample.latitude, sample.longitude, time
                );
            }
        }
    }

    gpx.push_str("</trkseg>\n</trk>\n</gpx>\n");
    gpx
}

/// Writes full-mode GPX documents into a local persistent directory.
#[derive(Debug, Clone)]
pub struct GpxExporter {
    directory: PathBuf,
}

impl GpxExporter {
    /// `directory` is the documents directory the host platform provides.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Write the track to `walkrun_track_<epoch-seconds>.gpx`.
    ///
    /// An empty track is a no-op and returns `Ok(None)`; the exporter never
    /// emits an empty-track document. Filesystem failures surface as
    /// `Error::Write` and are not retried.
    pub fn export(&self, samples: &[PositionSample]) -> Result<Option<PathBuf>> {
        if samples.is_empty() {
            tracing::debug!("No samples recorded, skipping export");
            return Ok(None);
        }

        let document = serialize(samples, GpxMode::Full);
        let filename = format!("walkrun_track_{}.gpx", Utc::now().timestamp());
        let path = self.directory.join(filename);

        std::fs::write(&path, document)?;

        tracing::info!(
            path = %path.display(),
            points = samples.len(),
            "GPX track exported"
        );
        Ok(Some(path))
    }
}
