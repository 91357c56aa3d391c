// Copyright 2025 the Storymap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fixed map pages that accompany the Mataan River tour.
//!
//! Each function returns the setup of one page, with its center, zoom and
//! camera written out. Centers are checked on construction like any other
//! [`GeoPoint`], so the fallible pages return a [`TourError`] instead of
//! panicking.

use storymap_tour::{GeoPoint, TourError, Zoom};

use crate::preset::{MapPreset, SplitView};

/// Setup of one page: a single map, or two maps split by a divider.
#[derive(Clone, Debug, PartialEq)]
pub enum PageSetup {
    /// One map.
    Single(MapPreset),
    /// Two basemaps compared side by side.
    Split(SplitView),
}

/// Whole-world globe in the `liberty` vector style.
#[must_use]
pub fn globe_overview() -> MapPreset {
    MapPreset::globe("liberty")
}

/// Base map of the Mataan River around the Guangfu bridge.
pub fn mataan_location() -> Result<MapPreset, TourError> {
    Ok(MapPreset::location(
        GeoPoint::from_lat_lon(23.69, 121.41)?,
        Zoom::new(14.0)?,
    ))
}

/// Extruded buildings around Guangfu Township, near the Mataan wetland.
pub fn mataan_buildings() -> Result<MapPreset, TourError> {
    Ok(MapPreset::buildings_3d(
        GeoPoint::from_lon_lat(121.42, 23.48)?,
        Zoom::new(16.0)?,
        -20.0,
    ))
}

/// Extruded buildings around Taipei City Hall.
pub fn taipei_buildings() -> Result<MapPreset, TourError> {
    Ok(MapPreset::buildings_3d(
        GeoPoint::from_lon_lat(121.56, 25.03)?,
        Zoom::new(15.5)?,
        -17.0,
    ))
}

/// Satellite imagery against the street map over the Mataan basin.
pub fn mataan_split() -> Result<SplitView, TourError> {
    Ok(SplitView::imagery_vs_streets(
        GeoPoint::from_lat_lon(23.48, 121.42)?,
        Zoom::new(14.0)?,
    ))
}
