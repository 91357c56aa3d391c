// Copyright 2025 the Storymap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use smallvec::SmallVec;
use storymap_tour::{GeoPoint, Marker, ViewStep, Zoom};

/// One instruction for the map widget.
///
/// Commands borrow marker text from the step they were derived from, so a
/// batch lives no longer than the tour that produced it.
#[derive(Clone, Debug, PartialEq)]
pub enum MapCommand<'a> {
    /// Move the map center.
    Recenter(GeoPoint),
    /// Set the zoom level.
    SetZoom(Zoom),
    /// Remove every annotation placed by earlier steps.
    ClearMarkers,
    /// Place one annotation.
    PlaceMarker {
        /// Where to place the annotation.
        at: GeoPoint,
        /// Color and label of the annotation.
        marker: &'a Marker,
    },
}

impl MapCommand<'_> {
    /// Forwards this command to the matching [`MapSink`] method.
    pub fn apply<S: MapSink + ?Sized>(&self, sink: &mut S) {
        match self {
            Self::Recenter(center) => sink.recenter(*center),
            Self::SetZoom(zoom) => sink.set_zoom(*zoom),
            Self::ClearMarkers => sink.clear_markers(),
            Self::PlaceMarker { at, marker } => sink.place_marker(*at, marker),
        }
    }
}

/// The commands for one step. At most four, so they stay inline.
pub type MapCommands<'a> = SmallVec<[MapCommand<'a>; 4]>;

/// Derives the commands that bring a map in line with `step`.
///
/// The batch is, in order: recenter, set zoom, clear markers, and a marker at
/// the step center if the step has one. Markers are always cleared so that an
/// annotation from a previous stop never lingers on a stop without one.
#[must_use]
pub fn commands_for(step: &ViewStep) -> MapCommands<'_> {
    let mut commands = MapCommands::new();
    commands.push(MapCommand::Recenter(step.center));
    commands.push(MapCommand::SetZoom(step.zoom));
    commands.push(MapCommand::ClearMarkers);
    if let Some(marker) = &step.marker {
        commands.push(MapCommand::PlaceMarker {
            at: step.center,
            marker,
        });
    }
    commands
}

/// Applies every command in `commands` to `sink`, in order.
pub fn apply_all<S: MapSink + ?Sized>(commands: &[MapCommand<'_>], sink: &mut S) {
    for command in commands {
        command.apply(sink);
    }
}

/// The receiving end of map commands, implemented by the host around its map widget.
///
/// Whether the widget is driven imperatively or re-rendered from props is up
/// to the implementation; the sink only sees the parameters.
pub trait MapSink {
    /// Moves the map center to `center`.
    fn recenter(&mut self, center: GeoPoint);

    /// Sets the zoom level.
    fn set_zoom(&mut self, zoom: Zoom);

    /// Removes every annotation previously placed through this sink.
    fn clear_markers(&mut self);

    /// Places one annotation at `at`.
    fn place_marker(&mut self, at: GeoPoint, marker: &Marker);
}

impl<S: MapSink + ?Sized> MapSink for &mut S {
    fn recenter(&mut self, center: GeoPoint) {
        (**self).recenter(center);
    }

    fn set_zoom(&mut self, zoom: Zoom) {
        (**self).set_zoom(zoom);
    }

    fn clear_markers(&mut self) {
        (**self).clear_markers();
    }

    fn place_marker(&mut self, at: GeoPoint, marker: &Marker) {
        (**self).place_marker(at, marker);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step() -> ViewStep {
        ViewStep::new(
            "Wetland",
            "",
            GeoPoint::from_lat_lon(23.467, 121.433).unwrap(),
            Zoom::new(14.0).unwrap(),
        )
    }

    #[test]
    fn step_without_marker_yields_three_commands() {
        let step = step();
        let commands = commands_for(&step);
        assert_eq!(
            commands.as_slice(),
            &[
                MapCommand::Recenter(step.center),
                MapCommand::SetZoom(step.zoom),
                MapCommand::ClearMarkers,
            ]
        );
        assert!(!commands.spilled());
    }

    #[test]
    fn marker_is_placed_at_step_center() {
        let step = step().with_marker(Marker::new("green", "Restored wetland"));
        let commands = commands_for(&step);
        assert_eq!(commands.len(), 4);
        match &commands[3] {
            MapCommand::PlaceMarker { at, marker } => {
                assert_eq!(*at, step.center);
                assert_eq!(marker.color, "green");
                assert_eq!(marker.label, "Restored wetland");
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
