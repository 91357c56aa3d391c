// Copyright 2025 the Storymap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use crate::{GeoPoint, Zoom};

/// An annotation placed at a step's center.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Marker {
    /// Marker color, as understood by the map widget (typically a CSS color name).
    pub color: String,
    /// Popup or tooltip text shown with the marker.
    pub label: String,
}

impl Marker {
    /// Creates a marker with the given color and label.
    pub fn new(color: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            label: label.into(),
        }
    }
}

/// One stop in a guided tour.
///
/// A `ViewStep` carries everything a host needs to render the stop: text for
/// the narrative panel and the center/zoom/marker parameters for the map.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewStep {
    /// Display label.
    pub title: String,
    /// Body text explaining the stop.
    pub narrative: String,
    /// Map center.
    pub center: GeoPoint,
    /// Map zoom level.
    pub zoom: Zoom,
    /// Annotation shown at [`ViewStep::center`], if any.
    pub marker: Option<Marker>,
    /// Auxiliary side-panel text specific to this stop, if any.
    pub insight: Option<String>,
}

impl ViewStep {
    /// Creates a step without a marker or insight text.
    pub fn new(
        title: impl Into<String>,
        narrative: impl Into<String>,
        center: GeoPoint,
        zoom: Zoom,
    ) -> Self {
        Self {
            title: title.into(),
            narrative: narrative.into(),
            center,
            zoom,
            marker: None,
            insight: None,
        }
    }

    /// Returns this step with `marker` attached.
    #[must_use]
    pub fn with_marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }

    /// Returns this step with side-panel `insight` text attached.
    #[must_use]
    pub fn with_insight(mut self, insight: impl Into<String>) -> Self {
        self.insight = Some(insight.into());
        self
    }

    /// Returns `true` if the map should show an annotation for this step.
    #[must_use]
    pub fn has_marker(&self) -> bool {
        self.marker.is_some()
    }
}
