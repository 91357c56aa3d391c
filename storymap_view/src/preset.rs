// Copyright 2025 the Storymap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static map page descriptors.
//!
//! These describe how a map page is set up (base layer, projection, camera
//! tilt, controls) without saying anything about how it is drawn. A host
//! translates a preset into the options of its map widget once, then drives
//! the view through [`crate::MapSink`].

use alloc::string::String;
use alloc::vec::Vec;

use storymap_tour::{GeoPoint, ViewStep, Zoom};

/// Base layer shown under everything else.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Basemap {
    /// `OpenStreetMap` raster tiles.
    OpenStreetMap,
    /// Esri world satellite imagery.
    EsriWorldImagery,
    /// A named vector style such as `"liberty"` or `"positron"`.
    VectorStyle(String),
}

impl Basemap {
    /// Returns the provider or style name a tile widget expects.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::OpenStreetMap => "OpenStreetMap",
            Self::EsriWorldImagery => "Esri.WorldImagery",
            Self::VectorStyle(style) => style.as_str(),
        }
    }
}

/// How the map surface is projected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Projection {
    /// Flat web-mercator map.
    #[default]
    Mercator,
    /// Zoomed-out views wrap onto a globe.
    Globe,
}

/// Screen corner a control is anchored to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Corner {
    /// Top left.
    TopLeft,
    /// Top right.
    TopRight,
    /// Bottom left.
    BottomLeft,
    /// Bottom right.
    BottomRight,
}

/// An on-map control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    /// Distance scale bar.
    Scale(Corner),
    /// Layer visibility toggles.
    Layers(Corner),
}

/// Extra data layered over the basemap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Overlay {
    /// Extruded building footprints, shown under the given layer name.
    Buildings3d {
        /// Name shown in the layer control.
        name: String,
    },
}

/// Camera tilt and rotation, in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Camera {
    /// Tilt away from straight down. `0` is a flat top-down view.
    pub pitch: f64,
    /// Rotation from north, clockwise.
    pub bearing: f64,
}

/// Setup of a single map page.
#[derive(Clone, Debug, PartialEq)]
pub struct MapPreset {
    /// Initial center. `None` lets the widget pick its default (whole world).
    pub center: Option<GeoPoint>,
    /// Initial zoom level.
    pub zoom: Zoom,
    /// Base layer.
    pub basemap: Basemap,
    /// Surface projection.
    pub projection: Projection,
    /// Camera tilt and rotation.
    pub camera: Camera,
    /// Whether the mouse wheel zooms the map.
    pub scroll_wheel_zoom: bool,
    /// On-map controls.
    pub controls: Vec<Control>,
    /// Extra layers over the basemap.
    pub overlays: Vec<Overlay>,
}

impl MapPreset {
    /// A free-roaming `OpenStreetMap` page centered on `center`.
    #[must_use]
    pub fn location(center: GeoPoint, zoom: Zoom) -> Self {
        Self {
            center: Some(center),
            zoom,
            basemap: Basemap::OpenStreetMap,
            projection: Projection::Mercator,
            camera: Camera::default(),
            scroll_wheel_zoom: true,
            controls: Vec::from([
                Control::Scale(Corner::BottomLeft),
                Control::Layers(Corner::TopRight),
            ]),
            overlays: Vec::new(),
        }
    }

    /// The map beside a tour's narrative panel, initially showing `step`.
    ///
    /// Wheel zoom is off; the tour decides where the map looks.
    #[must_use]
    pub fn story(step: &ViewStep) -> Self {
        Self {
            center: Some(step.center),
            zoom: step.zoom,
            basemap: Basemap::OpenStreetMap,
            projection: Projection::Mercator,
            camera: Camera::default(),
            scroll_wheel_zoom: false,
            controls: Vec::from([Control::Scale(Corner::BottomLeft)]),
            overlays: Vec::new(),
        }
    }

    /// A whole-world globe overview in the named vector `style`.
    #[must_use]
    pub fn globe(style: impl Into<String>) -> Self {
        Self {
            center: None,
            zoom: Zoom::WORLD,
            basemap: Basemap::VectorStyle(style.into()),
            projection: Projection::Globe,
            camera: Camera::default(),
            scroll_wheel_zoom: true,
            controls: Vec::new(),
            overlays: Vec::new(),
        }
    }

    /// A tilted view with extruded buildings over a light vector style.
    #[must_use]
    pub fn buildings_3d(center: GeoPoint, zoom: Zoom, bearing: f64) -> Self {
        Self {
            center: Some(center),
            zoom,
            basemap: Basemap::VectorStyle(String::from("positron")),
            projection: Projection::Mercator,
            camera: Camera {
                pitch: 60.0,
                bearing,
            },
            scroll_wheel_zoom: true,
            controls: Vec::from([Control::Layers(Corner::TopRight)]),
            overlays: Vec::from([Overlay::Buildings3d {
                name: String::from("Overture 3D Buildings"),
            }]),
        }
    }
}

/// One side of a [`SplitView`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SplitSide {
    /// Base layer on this side.
    pub basemap: Basemap,
    /// Caption shown on this side.
    pub label: String,
}

/// Two basemaps over the same place, separated by a draggable divider.
#[derive(Clone, Debug, PartialEq)]
pub struct SplitView {
    /// Left of the divider.
    pub left: SplitSide,
    /// Right of the divider.
    pub right: SplitSide,
    /// Shared center.
    pub center: GeoPoint,
    /// Shared zoom level.
    pub zoom: Zoom,
    /// Where the divider's own control sits.
    pub divider_control: Corner,
    /// Additional on-map controls.
    pub controls: Vec<Control>,
}

impl SplitView {
    /// Compares satellite imagery (left) against street map (right).
    #[must_use]
    pub fn imagery_vs_streets(center: GeoPoint, zoom: Zoom) -> Self {
        Self {
            left: SplitSide {
                basemap: Basemap::EsriWorldImagery,
                label: String::from("Satellite imagery (terrain)"),
            },
            right: SplitSide {
                basemap: Basemap::OpenStreetMap,
                label: String::from("Street map (roads)"),
            },
            center,
            zoom,
            divider_control: Corner::BottomLeft,
            controls: Vec::from([Control::Scale(Corner::BottomRight)]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storymap_tour::Marker;

    fn center() -> GeoPoint {
        GeoPoint::from_lat_lon(23.48, 121.42).unwrap()
    }

    #[test]
    fn story_preset_follows_the_step_and_locks_wheel_zoom() {
        let step = ViewStep::new("s", "", center(), Zoom::new(15.0).unwrap())
            .with_marker(Marker::new("red", "x"));
        let preset = MapPreset::story(&step);
        assert_eq!(preset.center, Some(step.center));
        assert_eq!(preset.zoom, step.zoom);
        assert!(!preset.scroll_wheel_zoom);
        assert_eq!(preset.basemap.name(), "OpenStreetMap");
    }

    #[test]
    fn globe_preset_has_no_center() {
        let preset = MapPreset::globe("liberty");
        assert_eq!(preset.center, None);
        assert_eq!(preset.projection, Projection::Globe);
        assert_eq!(preset.basemap.name(), "liberty");
        assert_eq!(preset.zoom.get(), 2.5);
    }

    #[test]
    fn buildings_preset_is_tilted() {
        let preset = MapPreset::buildings_3d(center(), Zoom::new(16.0).unwrap(), -20.0);
        assert_eq!(preset.camera.pitch, 60.0);
        assert_eq!(preset.camera.bearing, -20.0);
        assert_eq!(
            preset.overlays,
            [Overlay::Buildings3d {
                name: String::from("Overture 3D Buildings")
            }]
        );
        assert_eq!(preset.controls, [Control::Layers(Corner::TopRight)]);
    }

    #[test]
    fn location_preset_roams_freely_with_scale_and_layer_controls() {
        let preset = MapPreset::location(center(), Zoom::new(14.0).unwrap());
        assert_eq!(preset.center, Some(center()));
        assert_eq!(preset.zoom.get(), 14.0);
        assert!(preset.scroll_wheel_zoom);
        assert_eq!(preset.basemap, Basemap::OpenStreetMap);
        assert_eq!(preset.projection, Projection::Mercator);
        assert_eq!(preset.camera, Camera::default());
        assert_eq!(
            preset.controls,
            [
                Control::Scale(Corner::BottomLeft),
                Control::Layers(Corner::TopRight),
            ]
        );
        assert!(preset.overlays.is_empty());
    }

    #[test]
    fn split_view_compares_imagery_with_streets() {
        let split = SplitView::imagery_vs_streets(center(), Zoom::new(14.0).unwrap());
        assert_eq!(split.left.basemap.name(), "Esri.WorldImagery");
        assert_eq!(split.right.basemap.name(), "OpenStreetMap");
        assert_eq!(split.center, center());
    }
}
