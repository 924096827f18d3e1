// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Position samples and the recorded track.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single GPS fix delivered by the location source.
///
/// Immutable once created; samples are appended to the track in arrival
/// order with no merging or deduplication.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionSample {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Altitude above sea level in meters
    pub altitude: f64,
    /// Instantaneous speed in meters per second (raw, not unit-converted)
    pub speed: f64,
    /// When the fix was taken
    pub timestamp: DateTime<Utc>,
}

impl PositionSample {
    pub fn new(
        latitude: f64,
        longitude: f64,
        altitude: f64,
        speed: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
            speed,
            timestamp,
        }
    }
}

/// The ordered sequence of samples for one recording session.
pub type Track = Vec<PositionSample>;
