// Copyright 2025 the Storymap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=storymap_tour --heading-base-level=0

//! Storymap Tour: a guided-tour state machine over a fixed script of map views.
//!
//! A story map walks a reader through a short, fixed sequence of places. Each
//! stop is a [`ViewStep`]: a title and narrative for the text panel, plus the
//! center, zoom and optional marker the map should show. [`Tour`] owns the
//! script and the current position, and is the only way to move through it.
//!
//! This crate does **not** render maps, fetch tiles, or project coordinates.
//! It describes what the map should show; the host hands those parameters to
//! whatever map widget it uses (see `storymap_view` for a command-based
//! bridge).
//!
//! ## Minimal example
//!
//! ```rust
//! use storymap_tour::{GeoPoint, Marker, Tour, ViewStep, Zoom};
//!
//! let steps = [
//!     ViewStep::new(
//!         "Overview",
//!         "The river basin and its alluvial fan.",
//!         GeoPoint::from_lat_lon(23.50, 121.40).unwrap(),
//!         Zoom::new(12.0).unwrap(),
//!     ),
//!     ViewStep::new(
//!         "Levee breach",
//!         "Where the embankment failed.",
//!         GeoPoint::from_lat_lon(23.49, 121.43).unwrap(),
//!         Zoom::new(15.0).unwrap(),
//!     )
//!     .with_marker(Marker::new("red", "Breach")),
//! ];
//!
//! let mut tour = Tour::new(steps).unwrap();
//! assert_eq!(tour.progress_label(), "1 of 2");
//! assert!(!tour.can_go_previous());
//!
//! tour.next();
//! assert_eq!(tour.current().title, "Levee breach");
//!
//! // Navigation clamps at the ends instead of failing.
//! assert!(!tour.next());
//! assert_eq!(tour.index(), 1);
//! ```
//!
//! ## Coordinates
//!
//! [`GeoPoint`] stores longitude and latitude as named fields and is built
//! through [`GeoPoint::from_lon_lat`] or [`GeoPoint::from_lat_lon`], so the
//! tuple order is always stated at the call site. Out-of-range values are
//! rejected, which also catches most swapped pairs.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
mod geo;
mod step;
mod tour;

pub use error::TourError;
pub use geo::{GeoPoint, Zoom};
pub use step::{Marker, ViewStep};
pub use tour::{Progress, Tour};
