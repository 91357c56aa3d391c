// Copyright 2025 the Storymap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned when a tour or one of its view records cannot be built.
///
/// Navigation itself never fails: moving past either end of a tour clamps
/// silently. Every variant here is a configuration problem detected at
/// construction time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TourError {
    /// The step script was empty, so there is no step to show.
    EmptyScript,
    /// A zoom level was zero, negative, or not finite.
    InvalidZoom(f64),
    /// A coordinate was outside `[-180, 180]` longitude / `[-90, 90]` latitude,
    /// or not finite.
    InvalidCoordinate {
        /// The offending longitude, in degrees.
        lon: f64,
        /// The offending latitude, in degrees.
        lat: f64,
    },
}

impl fmt::Display for TourError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyScript => f.write_str("a tour needs at least one step"),
            Self::InvalidZoom(zoom) => {
                write!(f, "zoom level {zoom} is not a positive finite number")
            }
            Self::InvalidCoordinate { lon, lat } => {
                write!(f, "coordinate (lon {lon}, lat {lat}) is out of range")
            }
        }
    }
}

impl core::error::Error for TourError {}
