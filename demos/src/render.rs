// Copyright 2025 the Storymap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text stand-ins for the map widget and the narrative panel.

use storymap_tour::{GeoPoint, Marker, Tour, TourError, ViewStep, Zoom};
use storymap_view::pages::{self, PageSetup};
use storymap_view::preset::{MapPreset, SplitView};
use storymap_view::{MapSink, TourObserver};
use tracing::info;

use crate::cli::Page;

/// A map "widget" that records what it was told to do, one line per command.
#[derive(Debug, Default)]
pub(crate) struct TextMap {
    lat_lon: bool,
    lines: Vec<String>,
}

impl TextMap {
    pub(crate) fn new(lat_lon: bool) -> Self {
        Self {
            lat_lon,
            lines: Vec::new(),
        }
    }

    /// Returns and forgets the lines recorded so far.
    pub(crate) fn take_lines(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }

    fn pair(&self, point: GeoPoint) -> String {
        if self.lat_lon {
            let (lat, lon) = point.as_lat_lon();
            format!("lat {lat:.4}, lon {lon:.4}")
        } else {
            let (lon, lat) = point.as_lon_lat();
            format!("lon {lon:.4}, lat {lat:.4}")
        }
    }
}

impl MapSink for TextMap {
    fn recenter(&mut self, center: GeoPoint) {
        let line = format!("map: recenter to {}", self.pair(center));
        self.lines.push(line);
    }

    fn set_zoom(&mut self, zoom: Zoom) {
        self.lines.push(format!("map: zoom {}", zoom.get()));
    }

    fn clear_markers(&mut self) {
        self.lines.push("map: clear markers".to_owned());
    }

    fn place_marker(&mut self, at: GeoPoint, marker: &Marker) {
        let line = format!(
            "map: {} marker \"{}\" at {}",
            marker.color,
            marker.label,
            self.pair(at)
        );
        self.lines.push(line);
    }
}

/// Logs every step change.
#[derive(Debug, Default)]
pub(crate) struct LogObserver;

impl TourObserver for LogObserver {
    fn step_changed(&mut self, from: usize, to: usize, step: &ViewStep) {
        info!(from, to, title = %step.title, "step changed");
    }
}

/// Renders the narrative panel and the navigation row for the active step.
pub(crate) fn panel(tour: &Tour) -> String {
    let step = tour.current();
    let mut out = format!("## {}\n", step.title);
    if !step.narrative.is_empty() {
        out.push_str(&step.narrative);
        out.push('\n');
    }
    if let Some(insight) = &step.insight {
        out.push_str(&format!("> {insight}\n"));
    }
    let prev = if tour.can_go_previous() {
        "[p] previous"
    } else {
        "   previous"
    };
    let next = if tour.can_go_next() {
        "[n] next"
    } else {
        "   next"
    };
    out.push_str(&format!("{prev}   {}   {next}", tour.progress_label()));
    out
}

/// Describes the page setup once, before the tour starts.
pub(crate) fn preset_summary(preset: &MapPreset) -> String {
    let wheel = if preset.scroll_wheel_zoom { "on" } else { "off" };
    format!(
        "page: {} basemap, {:?} projection, wheel zoom {wheel}",
        preset.basemap.name(),
        preset.projection,
    )
}

/// Describes a split comparison page.
pub(crate) fn split_summary(split: &SplitView) -> String {
    format!(
        "page: split {} | {} (\"{}\" | \"{}\"), zoom {}",
        split.left.basemap.name(),
        split.right.basemap.name(),
        split.left.label,
        split.right.label,
        split.zoom.get(),
    )
}

/// Describes a page setup, followed by its center and camera when it has them.
pub(crate) fn page_summary(setup: &PageSetup) -> String {
    match setup {
        PageSetup::Single(preset) => {
            let mut out = preset_summary(preset);
            if let Some(center) = preset.center {
                let (lon, lat) = center.as_lon_lat();
                out.push_str(&format!(
                    "\ncenter: lon {lon:.2}, lat {lat:.2}, zoom {}",
                    preset.zoom.get()
                ));
            }
            if preset.camera.pitch != 0.0 {
                out.push_str(&format!(
                    "\ncamera: pitch {}, bearing {}",
                    preset.camera.pitch, preset.camera.bearing
                ));
            }
            out
        }
        PageSetup::Split(split) => split_summary(split),
    }
}

/// Looks up one of the fixed pages that do not need a tour.
pub(crate) fn fixed_page(page: Page) -> Result<Option<PageSetup>, TourError> {
    let setup = match page {
        Page::Story => return Ok(None),
        Page::Location => PageSetup::Single(pages::mataan_location()?),
        Page::Globe => PageSetup::Single(pages::globe_overview()),
        Page::Buildings => PageSetup::Single(pages::mataan_buildings()?),
        Page::Taipei => PageSetup::Single(pages::taipei_buildings()?),
        Page::Split => PageSetup::Split(pages::mataan_split()?),
    };
    Ok(Some(setup))
}
