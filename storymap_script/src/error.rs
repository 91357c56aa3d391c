// Copyright 2025 the Storymap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::{fmt, io};

use storymap_tour::TourError;

/// Error returned when a script cannot be read or does not describe a valid tour.
#[derive(Debug)]
pub enum ScriptError {
    /// The script file could not be read.
    Io(io::Error),
    /// The script is not valid JSON or does not match the expected shape.
    Json(serde_json::Error),
    /// One step has an invalid center or zoom.
    Step {
        /// Zero-based position of the step in the script.
        index: usize,
        /// What was wrong with it.
        source: TourError,
    },
    /// The script as a whole was rejected, for example because it has no steps.
    Tour(TourError),
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(_) => f.write_str("failed to read tour script"),
            Self::Json(_) => f.write_str("failed to parse tour script"),
            Self::Step { index, .. } => write!(f, "step {index} of the tour script is invalid"),
            Self::Tour(_) => f.write_str("tour script does not describe a valid tour"),
        }
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Step { source, .. } => Some(source),
            Self::Tour(err) => Some(err),
        }
    }
}

impl From<io::Error> for ScriptError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ScriptError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<TourError> for ScriptError {
    fn from(err: TourError) -> Self {
        Self::Tour(err)
    }
}
