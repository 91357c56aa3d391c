// Copyright 2025 the Storymap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::TourError;

/// A WGS84 position in degrees, stored **longitude first**.
///
/// Map widgets disagree about tuple order: some take `(lon, lat)` and others
/// `(lat, lon)`. `GeoPoint` keeps named fields and only converts to a tuple
/// through methods that spell out the order, so a swapped pair cannot slip
/// through silently.
///
/// ```rust
/// use storymap_tour::GeoPoint;
///
/// let a = GeoPoint::from_lon_lat(121.425, 23.485).unwrap();
/// let b = GeoPoint::from_lat_lon(23.485, 121.425).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.as_lat_lon(), (23.485, 121.425));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    lon: f64,
    lat: f64,
}

impl GeoPoint {
    /// Creates a point from a longitude and a latitude, in that order.
    ///
    /// Fails if either value is not finite, or if the longitude is outside
    /// `[-180, 180]` or the latitude outside `[-90, 90]`.
    pub fn new(lon: f64, lat: f64) -> Result<Self, TourError> {
        let lon_ok = lon.is_finite() && (-180.0..=180.0).contains(&lon);
        let lat_ok = lat.is_finite() && (-90.0..=90.0).contains(&lat);
        if lon_ok && lat_ok {
            Ok(Self { lon, lat })
        } else {
            Err(TourError::InvalidCoordinate { lon, lat })
        }
    }

    /// Creates a point from a `(lon, lat)` pair.
    pub fn from_lon_lat(lon: f64, lat: f64) -> Result<Self, TourError> {
        Self::new(lon, lat)
    }

    /// Creates a point from a `(lat, lon)` pair.
    pub fn from_lat_lon(lat: f64, lon: f64) -> Result<Self, TourError> {
        Self::new(lon, lat)
    }

    /// Longitude in degrees.
    #[must_use]
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Latitude in degrees.
    #[must_use]
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Returns `(lon, lat)`, for widgets that take longitude first.
    #[must_use]
    pub fn as_lon_lat(&self) -> (f64, f64) {
        (self.lon, self.lat)
    }

    /// Returns `(lat, lon)`, for widgets that take latitude first.
    #[must_use]
    pub fn as_lat_lon(&self) -> (f64, f64) {
        (self.lat, self.lon)
    }
}

/// A positive, finite map zoom level.
///
/// Fractional levels are allowed; globe overviews commonly sit around `2.5`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Zoom(f64);

impl Zoom {
    /// A level that fits the whole world in a typical page-sized map.
    pub const WORLD: Self = Self(2.5);

    /// Creates a zoom level, rejecting zero, negative and non-finite values.
    pub fn new(level: f64) -> Result<Self, TourError> {
        if level.is_finite() && level > 0.0 {
            Ok(Self(level))
        } else {
            Err(TourError::InvalidZoom(level))
        }
    }

    /// Returns the zoom level.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lat_lon_and_lon_lat_constructors_agree() {
        let a = GeoPoint::from_lon_lat(121.41, 23.69).unwrap();
        let b = GeoPoint::from_lat_lon(23.69, 121.41).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.lon(), 121.41);
        assert_eq!(a.lat(), 23.69);
        assert_eq!(a.as_lon_lat(), (121.41, 23.69));
    }

    #[test]
    fn swapped_pair_outside_latitude_range_is_rejected() {
        // (lat, lon) passed where (lon, lat) was expected puts 121 in the latitude slot.
        let err = GeoPoint::from_lon_lat(23.48, 121.42).unwrap_err();
        assert_eq!(
            err,
            TourError::InvalidCoordinate {
                lon: 23.48,
                lat: 121.42
            }
        );
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(GeoPoint::new(180.0, 90.0).is_ok());
        assert!(GeoPoint::new(-180.0, -90.0).is_ok());
        assert!(GeoPoint::new(180.5, 0.0).is_err());
        assert!(GeoPoint::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn zoom_must_be_positive_and_finite() {
        assert_eq!(Zoom::new(14.0).unwrap().get(), 14.0);
        assert_eq!(Zoom::new(2.5).unwrap().get(), 2.5);
        assert_eq!(Zoom::new(0.0), Err(TourError::InvalidZoom(0.0)));
        assert!(Zoom::new(-3.0).is_err());
        assert!(Zoom::new(f64::INFINITY).is_err());
    }
}
