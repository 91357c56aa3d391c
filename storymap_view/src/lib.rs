// Copyright 2025 the Storymap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=storymap_view --heading-base-level=0

//! Storymap View: the contract between a tour and a map widget.
//!
//! `storymap_tour` decides *which* step is active. This crate turns a step
//! into the handful of instructions a map widget needs, and keeps a widget in
//! sync as the tour moves:
//!
//! - [`commands_for`] derives a [`MapCommand`] batch from a step: recenter,
//!   set zoom, clear old markers, and place the step's marker if it has one.
//! - [`MapSink`] is implemented by the host around its widget.
//! - [`TourDriver`] owns a tour and a sink, and re-issues the commands after
//!   every navigation call that actually moved. A [`TourObserver`] can watch
//!   those moves.
//! - [`overview_bounds`] gives the `(lon, lat)` box around every stop.
//! - [`preset`] holds static page setups (story map, location map, globe,
//!   3D buildings, split comparison), and [`pages`] fills them in with the
//!   concrete pages that accompany the Mataan River tour.
//!
//! It does **not** draw anything, fetch tiles, or project coordinates.
//!
//! ## Minimal example
//!
//! ```rust
//! use storymap_tour::{GeoPoint, Marker, Tour, ViewStep, Zoom};
//! use storymap_view::{MapSink, TourDriver};
//!
//! #[derive(Default)]
//! struct Widget {
//!     center: Option<(f64, f64)>,
//!     zoom: f64,
//!     markers: Vec<String>,
//! }
//!
//! impl MapSink for Widget {
//!     fn recenter(&mut self, center: GeoPoint) {
//!         // This widget takes latitude first.
//!         self.center = Some(center.as_lat_lon());
//!     }
//!     fn set_zoom(&mut self, zoom: Zoom) {
//!         self.zoom = zoom.get();
//!     }
//!     fn clear_markers(&mut self) {
//!         self.markers.clear();
//!     }
//!     fn place_marker(&mut self, _at: GeoPoint, marker: &Marker) {
//!         self.markers.push(marker.label.clone());
//!     }
//! }
//!
//! let tour = Tour::new([
//!     ViewStep::new("Basin", "", GeoPoint::from_lat_lon(23.50, 121.40).unwrap(), Zoom::new(12.0).unwrap()),
//!     ViewStep::new("Breach", "", GeoPoint::from_lat_lon(23.49, 121.43).unwrap(), Zoom::new(15.0).unwrap())
//!         .with_marker(Marker::new("red", "Breach point")),
//! ])
//! .unwrap();
//!
//! let mut driver = TourDriver::new(tour, Widget::default());
//! driver.start();
//! assert_eq!(driver.sink().center, Some((23.50, 121.40)));
//! assert!(driver.sink().markers.is_empty());
//!
//! driver.next();
//! assert_eq!(driver.sink().zoom, 15.0);
//! assert_eq!(driver.sink().markers, ["Breach point"]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod bounds;
mod command;
mod driver;
pub mod pages;
pub mod preset;

pub use bounds::{lon_lat_point, overview_bounds};
pub use command::{MapCommand, MapCommands, MapSink, apply_all, commands_for};
pub use driver::{NoopObserver, TourDriver, TourObserver};
