// Copyright 2025 the Storymap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=storymap_script --heading-base-level=0

//! Storymap Script: tour scripts as JSON.
//!
//! A script is the static configuration of a tour: its steps, in order, with
//! the text, center, zoom and optional marker of each. Scripts state their
//! coordinate order once, at the top:
//!
//! ```json
//! {
//!   "title": "A short walk",
//!   "axis_order": "lat_lon",
//!   "steps": [
//!     { "title": "Start", "narrative": "...", "center": [23.50, 121.40], "zoom": 12 },
//!     {
//!       "title": "Breach",
//!       "center": [23.49, 121.43],
//!       "zoom": 15,
//!       "marker": { "color": "red", "label": "Breach point" },
//!       "insight": "Cut bank versus weak levee."
//!     }
//!   ]
//! }
//! ```
//!
//! [`Script::into_tour`] validates every step and builds a
//! [`storymap_tour::Tour`]. Errors name the offending step.
//!
//! ```rust
//! use storymap_script::{MATAAN_FLOOD, Script};
//!
//! let tour = Script::from_json_str(MATAAN_FLOOD).unwrap().into_tour().unwrap();
//! assert_eq!(tour.len(), 4);
//! assert_eq!(tour.progress_label(), "1 of 4");
//! ```
//!
//! Loading logs through `tracing` at `debug` and `trace` level.

mod error;
mod script;

pub use error::ScriptError;
pub use script::{AxisOrder, MarkerRecord, Script, StepRecord};

/// The built-in four-step flood narrative of the Mataan River, in `lat_lon` order.
pub const MATAAN_FLOOD: &str = include_str!("../scripts/mataan_flood.json");
