// Copyright 2025 the Storymap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};
use storymap_tour::{GeoPoint, Tour};

/// Maps a position into plain `(lon, lat)` plane coordinates.
///
/// No projection is applied: `x` is longitude and `y` is latitude, both in
/// degrees.
#[must_use]
pub fn lon_lat_point(point: GeoPoint) -> Point {
    let (lon, lat) = point.as_lon_lat();
    Point::new(lon, lat)
}

/// Returns the `(lon, lat)` bounding box of every step center in `tour`.
///
/// Useful for an "all stops" overview before or after the guided part. A tour
/// whose steps share one center yields a zero-area rectangle; callers that
/// fit a map to it usually inflate it first.
///
/// ```rust
/// use storymap_tour::{GeoPoint, Tour, ViewStep, Zoom};
/// use storymap_view::overview_bounds;
///
/// let zoom = Zoom::new(14.0).unwrap();
/// let tour = Tour::new([
///     ViewStep::new("a", "", GeoPoint::from_lon_lat(121.40, 23.50).unwrap(), zoom),
///     ViewStep::new("b", "", GeoPoint::from_lon_lat(121.43, 23.47).unwrap(), zoom),
/// ])
/// .unwrap();
///
/// let bounds = overview_bounds(&tour);
/// assert_eq!((bounds.x0, bounds.x1), (121.40, 121.43));
/// assert_eq!((bounds.y0, bounds.y1), (23.47, 23.50));
/// ```
#[must_use]
pub fn overview_bounds(tour: &Tour) -> Rect {
    let first = lon_lat_point(tour.steps()[0].center);
    tour.steps()
        .iter()
        .skip(1)
        .fold(Rect::from_points(first, first), |bounds, step| {
            bounds.union_pt(lon_lat_point(step.center))
        })
}
