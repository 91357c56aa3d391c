// Copyright 2025 the Storymap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};
use storymap_tour::{GeoPoint, Marker, Tour, TourError, ViewStep, Zoom};
use tracing::{debug, trace};

use crate::ScriptError;

/// Order of the two numbers in every `center` pair of a script.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisOrder {
    /// `[lon, lat]`, as vector-tile widgets expect.
    LonLat,
    /// `[lat, lon]`, as marker-based tile widgets expect.
    LatLon,
}

impl AxisOrder {
    /// Interprets `pair` in this order.
    pub fn point(self, pair: [f64; 2]) -> Result<GeoPoint, TourError> {
        match self {
            Self::LonLat => GeoPoint::from_lon_lat(pair[0], pair[1]),
            Self::LatLon => GeoPoint::from_lat_lon(pair[0], pair[1]),
        }
    }

    /// Writes `point` as a pair in this order.
    #[must_use]
    pub fn pair(self, point: GeoPoint) -> [f64; 2] {
        let (a, b) = match self {
            Self::LonLat => point.as_lon_lat(),
            Self::LatLon => point.as_lat_lon(),
        };
        [a, b]
    }
}

/// Marker entry of a [`StepRecord`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarkerRecord {
    /// Marker color.
    pub color: String,
    /// Marker label.
    pub label: String,
}

/// One step as written in a script, before validation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StepRecord {
    /// Display label.
    pub title: String,
    /// Body text.
    #[serde(default)]
    pub narrative: String,
    /// Map center, in the script's [`AxisOrder`].
    pub center: [f64; 2],
    /// Zoom level.
    pub zoom: f64,
    /// Optional marker at the center.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<MarkerRecord>,
    /// Optional side-panel text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insight: Option<String>,
}

impl StepRecord {
    fn validate(self, order: AxisOrder) -> Result<ViewStep, TourError> {
        let center = order.point(self.center)?;
        let zoom = Zoom::new(self.zoom)?;
        let mut step = ViewStep::new(self.title, self.narrative, center, zoom);
        step.marker = self.marker.map(|m| Marker::new(m.color, m.label));
        step.insight = self.insight;
        Ok(step)
    }

    fn from_step(step: &ViewStep, order: AxisOrder) -> Self {
        Self {
            title: step.title.clone(),
            narrative: step.narrative.clone(),
            center: order.pair(step.center),
            zoom: step.zoom.get(),
            marker: step.marker.as_ref().map(|m| MarkerRecord {
                color: m.color.clone(),
                label: m.label.clone(),
            }),
            insight: step.insight.clone(),
        }
    }
}

/// A tour script: a titled list of steps plus the coordinate order they use.
///
/// `axis_order` has no default. Scripts written against different map widgets
/// disagree on tuple order, so every file has to say which one it uses.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    /// Title of the whole tour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Order of every `center` pair in [`Script::steps`].
    pub axis_order: AxisOrder,
    /// Steps in tour order.
    pub steps: Vec<StepRecord>,
}

impl Script {
    /// Parses a script from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ScriptError> {
        let script: Self = serde_json::from_str(json)?;
        trace!(steps = script.steps.len(), "parsed tour script");
        Ok(script)
    }

    /// Parses a script from a JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ScriptError> {
        let script: Self = serde_json::from_reader(reader)?;
        trace!(steps = script.steps.len(), "parsed tour script");
        Ok(script)
    }

    /// Reads and parses a script file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let script = Self::from_reader(BufReader::new(file))?;
        debug!(
            path = %path.display(),
            steps = script.steps.len(),
            axis_order = ?script.axis_order,
            "loaded tour script"
        );
        Ok(script)
    }

    /// Writes the steps of `tour` as a script in the given order.
    #[must_use]
    pub fn from_tour(title: Option<String>, tour: &Tour, axis_order: AxisOrder) -> Self {
        Self {
            title,
            axis_order,
            steps: tour
                .steps()
                .iter()
                .map(|step| StepRecord::from_step(step, axis_order))
                .collect(),
        }
    }

    /// Serializes the script as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ScriptError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validates every step, in order.
    ///
    /// Stops at the first invalid step and reports its index.
    pub fn into_steps(self) -> Result<Vec<ViewStep>, ScriptError> {
        let order = self.axis_order;
        self.steps
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                record
                    .validate(order)
                    .map_err(|source| ScriptError::Step { index, source })
            })
            .collect()
    }

    /// Validates every step and builds a tour positioned at the first one.
    pub fn into_tour(self) -> Result<Tour, ScriptError> {
        let steps = self.into_steps()?;
        let tour = Tour::new(steps)?;
        debug!(steps = tour.len(), "built tour from script");
        Ok(tour)
    }
}
