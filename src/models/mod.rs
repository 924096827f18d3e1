// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the library.

pub mod credential;
pub mod sample;

pub use credential::Credential;
pub use sample::{PositionSample, Track};
